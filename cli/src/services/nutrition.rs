//! Nutrition service - targets and meal plan analysis from stored data

use crate::error::{CliError, CliResult};
use crate::services::profile::ProfileService;
use anyhow::Context;
use fitdash_shared::meal_analysis::{analyze_meal_plan, MealNutritionAnalysis};
use fitdash_shared::models::{Meal, MealPlan, MealSlot, UserProfile};
use fitdash_shared::nutrition::{compute_profile, NutritionProfile};
use fitdash_shared::store::{MealPlanStore, ProfileStore};
use fitdash_shared::validation::{get_missing_fields_labels, validate_meal};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Targets together with the profile they came from
#[derive(Debug, Clone, Serialize)]
pub struct TargetsReport {
    pub profile: UserProfile,
    pub nutrition: NutritionProfile,
    /// Labels of profile fields that fell back to defaults
    pub defaulted_fields: Vec<String>,
}

/// Meal plan analysis together with the targets it was scored against
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub nutrition: NutritionProfile,
    pub meal_plan: MealPlan,
    pub analysis: MealNutritionAnalysis,
}

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Compute targets from the stored profile
    ///
    /// A missing profile is not an error: every field falls back to its
    /// default and is listed in `defaulted_fields`.
    pub fn targets<S: ProfileStore + ?Sized>(store: &S) -> CliResult<TargetsReport> {
        let profile = ProfileService::get_profile_or_default(store)?;
        let missing = profile.missing_fields();
        if !missing.is_empty() {
            warn!(fields = ?missing, "Profile incomplete, using defaults");
        }

        let nutrition = compute_profile(&profile);
        debug!(
            bmr = nutrition.bmr,
            tdee = nutrition.tdee,
            target_calories = nutrition.target_calories,
            "Computed nutrition profile"
        );

        Ok(TargetsReport {
            defaulted_fields: get_missing_fields_labels(&missing),
            profile,
            nutrition,
        })
    }

    /// Get the stored meal plan, empty if none was saved
    pub fn get_meal_plan<S: MealPlanStore + ?Sized>(store: &S) -> CliResult<MealPlan> {
        Ok(store.load_meal_plan()?.unwrap_or_default())
    }

    /// Put a meal into a slot of the stored plan; snacks are appended
    pub fn set_meal<S: MealPlanStore + ?Sized>(store: &S, slot: MealSlot, meal: Meal) -> CliResult<MealPlan> {
        validate_meal(&meal)?;

        let mut plan = Self::get_meal_plan(store)?;
        plan.set_meal(slot, meal);
        store.save_meal_plan(&plan)?;

        info!(%slot, meals = plan.meal_count(), "Meal saved");
        Ok(plan)
    }

    /// Replace the stored plan with one read from a JSON file
    pub fn import_meal_plan<S: MealPlanStore + ?Sized>(store: &S, path: &Path) -> CliResult<MealPlan> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CliError::NotFound(format!("Meal plan file {}", path.display()))
            } else {
                CliError::Internal(anyhow::Error::new(e).context(format!("reading {}", path.display())))
            }
        })?;

        let plan: MealPlan = serde_json::from_str(&raw)
            .with_context(|| format!("parsing meal plan {}", path.display()))
            .map_err(|e| CliError::Validation(format!("{:#}", e)))?;

        for meal in plan.meals() {
            validate_meal(meal)?;
        }

        store.save_meal_plan(&plan)?;
        info!(meals = plan.meal_count(), path = %path.display(), "Meal plan imported");
        Ok(plan)
    }

    /// Reset the stored plan to empty
    pub fn clear_meal_plan<S: MealPlanStore + ?Sized>(store: &S) -> CliResult<()> {
        store.save_meal_plan(&MealPlan::default())?;
        info!("Meal plan cleared");
        Ok(())
    }

    /// Score the stored meal plan against the stored profile's targets
    pub fn analyze<S>(store: &S) -> CliResult<AnalysisReport>
    where
        S: ProfileStore + MealPlanStore + ?Sized,
    {
        let targets = Self::targets(store)?;
        let meal_plan = Self::get_meal_plan(store)?;
        let analysis = analyze_meal_plan(&meal_plan, &targets.nutrition);

        if analysis.macro_balance.is_none() {
            warn!("Meal plan has no calories, macro balance is undefined");
        }
        debug!(score = analysis.nutrition_score, "Analyzed meal plan");

        Ok(AnalysisReport {
            nutrition: targets.nutrition,
            meal_plan,
            analysis,
        })
    }
}
