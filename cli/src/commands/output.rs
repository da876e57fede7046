//! Text and JSON rendering of command results

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::services::{AnalysisReport, TargetsReport};
use fitdash_shared::models::{Meal, MealPlan, UserProfile};
use fitdash_shared::units::UnitPreferences;
use fitdash_shared::workouts::WorkoutPlan;
use serde::Serialize;

const NOT_SET: &str = "not set";

/// Renders results as pretty JSON or as aligned text in the preferred units
pub struct Renderer {
    json: bool,
    units: UnitPreferences,
}

impl Renderer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            json: config.output.json,
            units: config.units,
        }
    }

    fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
        serde_json::to_string_pretty(value).map_err(|e| CliError::Internal(e.into()))
    }

    fn energy(&self, kcal: f64) -> String {
        self.units.energy.format(kcal)
    }

    pub fn profile(&self, profile: &UserProfile) -> CliResult<String> {
        if self.json {
            return Self::to_json(profile);
        }

        let weight = profile.weight_kg.map_or(NOT_SET.to_string(), |kg| {
            format!("{:.1} {}", self.units.weight.from_kg(kg), self.units.weight.abbreviation())
        });
        let height = profile.height_cm.map_or(NOT_SET.to_string(), |cm| {
            format!("{:.1} {}", self.units.height.from_cm(cm), self.units.height.abbreviation())
        });
        let activity = profile.activity_level.map_or(NOT_SET.to_string(), |level| {
            format!("{} ({})", level, level.description())
        });

        let lines = [
            "Profile".to_string(),
            format!("  Weight:         {}", weight),
            format!("  Height:         {}", height),
            format!("  Age:            {}", display_or_unset(profile.age_years)),
            format!("  Gender:         {}", display_or_unset(profile.gender)),
            format!("  Activity level: {}", activity),
            format!("  Goal:           {}", display_or_unset(profile.goal)),
            format!(
                "  Body fat:       {}",
                profile
                    .body_fat_percent
                    .map_or(NOT_SET.to_string(), |bf| format!("{:.1}%", bf))
            ),
        ];
        Ok(lines.join("\n"))
    }

    pub fn targets(&self, report: &TargetsReport) -> CliResult<String> {
        if self.json {
            return Self::to_json(report);
        }

        let n = &report.nutrition;
        let m = &n.macro_targets;
        let micro = &n.micronutrient_needs;
        let mut lines = vec![
            "Daily targets".to_string(),
            format!("  BMR:          {}", self.energy(n.bmr)),
            format!("  TDEE:         {}", self.energy(n.tdee)),
            format!("  Calories:     {}", self.energy(n.target_calories as f64)),
            format!("  Protein:      {} g", m.protein),
            format!("  Carbohydrate: {} g", m.carbs),
            format!("  Fat:          {} g", m.fat),
        ];
        if m.carbs < 0 {
            lines.push("  Protein and fat already exceed the calorie target".to_string());
        }
        lines.extend([
            "Micronutrients".to_string(),
            format!("  Vitamin C:    {} mg", micro.vitamin_c_mg),
            format!("  Iron:         {} mg", micro.iron_mg),
            format!("  Calcium:      {} mg", micro.calcium_mg),
            format!("  Fiber:        {} g", micro.fiber_g),
        ]);
        if !report.defaulted_fields.is_empty() {
            lines.push(format!("Using defaults for: {}", report.defaulted_fields.join(", ")));
        }
        Ok(lines.join("\n"))
    }

    pub fn meal_plan(&self, plan: &MealPlan) -> CliResult<String> {
        if self.json {
            return Self::to_json(plan);
        }
        if plan.is_empty() {
            return Ok("Meal plan is empty".to_string());
        }

        let mut lines = vec![match plan.date {
            Some(date) => format!("Meal plan for {}", date),
            None => "Meal plan".to_string(),
        }];
        let slots = [
            ("Breakfast", plan.breakfast.as_ref()),
            ("Lunch", plan.lunch.as_ref()),
            ("Dinner", plan.dinner.as_ref()),
        ];
        for (label, meal) in slots {
            if let Some(meal) = meal {
                lines.push(self.meal_line(label, meal));
            }
        }
        for snack in &plan.snacks {
            lines.push(self.meal_line("Snack", snack));
        }
        Ok(lines.join("\n"))
    }

    fn meal_line(&self, label: &str, meal: &Meal) -> String {
        let name = meal.name.as_deref().map(|n| format!(" {}", n)).unwrap_or_default();
        format!(
            "  {:<10}{} | {} | P {:.0} g | C {:.0} g | F {:.0} g",
            label,
            name,
            self.energy(meal.calories()),
            meal.protein(),
            meal.carbs(),
            meal.fat()
        )
    }

    pub fn analysis(&self, report: &AnalysisReport) -> CliResult<String> {
        if self.json {
            return Self::to_json(report);
        }

        let a = &report.analysis;
        let target = &report.nutrition;
        let macro_balance = match &a.macro_balance {
            Some(b) => format!(
                "protein {:.0}% / carbs {:.0}% / fat {:.0}%",
                b.protein, b.carbs, b.fat
            ),
            None => "undefined (no calories logged)".to_string(),
        };

        let mut lines = vec![
            "Meal plan analysis".to_string(),
            format!(
                "  Calories:      {} of {} ({:.0}%)",
                self.energy(a.totals.calories),
                self.energy(target.target_calories as f64),
                a.calorie_balance
            ),
            format!(
                "  Protein:       {:.0} g of {} g ({:.0}%)",
                a.totals.protein, target.macro_targets.protein, a.protein_adequacy
            ),
            format!("  Macro balance: {}", macro_balance),
            format!("  Score:         {}/100", a.nutrition_score),
            "Recommendations".to_string(),
        ];
        lines.extend(a.recommendations.iter().map(|r| format!("  - {}", r)));
        Ok(lines.join("\n"))
    }

    pub fn workout(&self, plan: &WorkoutPlan) -> CliResult<String> {
        if self.json {
            return Self::to_json(plan);
        }

        let mut lines = vec![format!(
            "Workout plan: {} ({} days/week)",
            plan.goal,
            plan.days.len()
        )];
        for day in &plan.days {
            lines.push(format!("Day {}: {}", day.day, day.focus));
            lines.extend(
                day.exercises
                    .iter()
                    .map(|e| format!("  - {} ({}) {}", e.name, e.category, e.prescription)),
            );
        }
        Ok(lines.join("\n"))
    }
}

fn display_or_unset<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or(NOT_SET.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitdash_shared::meal_analysis::analyze_meal_plan;
    use fitdash_shared::nutrition::compute_profile;
    use fitdash_shared::units::EnergyUnit;

    fn renderer(json: bool) -> Renderer {
        let mut config = AppConfig::default();
        config.output.json = json;
        Renderer::new(&config)
    }

    fn empty_report() -> AnalysisReport {
        let nutrition = compute_profile(&UserProfile::default());
        let meal_plan = MealPlan::default();
        let analysis = analyze_meal_plan(&meal_plan, &nutrition);
        AnalysisReport {
            nutrition,
            meal_plan,
            analysis,
        }
    }

    #[test]
    fn test_empty_plan_macro_balance_text() {
        let text = renderer(false).analysis(&empty_report()).unwrap();
        assert!(text.contains("undefined (no calories logged)"));
        assert!(text.contains("Score:         30/100"));
    }

    #[test]
    fn test_empty_plan_macro_balance_json_is_null() {
        let json = renderer(true).analysis(&empty_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["analysis"]["macro_balance"].is_null());
    }

    #[test]
    fn test_profile_text_shows_unset_fields() {
        let profile = UserProfile {
            weight_kg: Some(70.0),
            ..Default::default()
        };
        let text = renderer(false).profile(&profile).unwrap();
        assert!(text.contains("70.0 kg"));
        assert!(text.contains("Height:         not set"));
    }

    #[test]
    fn test_workout_text_uses_category_names() {
        let plan = fitdash_shared::workouts::select_workout_plan(
            fitdash_shared::models::FitnessGoal::MuscleGain,
            fitdash_shared::models::ActivityLevel::Light,
        );
        let text = renderer(false).workout(&plan).unwrap();
        assert!(text.contains("  - Bench press (strength) 4 x 8"));
        assert!(!text.contains("Strength"));
    }

    #[test]
    fn test_energy_in_kilojoules() {
        let mut config = AppConfig::default();
        config.units.energy = EnergyUnit::Kj;
        let out = Renderer::new(&config);
        assert_eq!(out.energy(1000.0), "4184 kJ");
    }
}
