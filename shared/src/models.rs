//! Data models for the FitDash nutrition planner
//!
//! Inputs arrive from loosely-typed client storage, so every field is optional
//! and unknown enum strings deserialize as "absent" instead of failing.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight used when the profile has none
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Height used when the profile has none
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
/// Age used when the profile has none
pub const DEFAULT_AGE_YEARS: u32 = 30;

// ============================================================================
// Profile Enums
// ============================================================================

/// Gender for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Ok(ActivityLevel::Light),
            "moderate" | "moderately_active" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" | "extra_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Fitness goal driving the calorie target and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    #[default]
    Maintenance,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_loss" | "lose" | "cut" => Ok(FitnessGoal::WeightLoss),
            "muscle_gain" | "gain" | "bulk" => Ok(FitnessGoal::MuscleGain),
            "maintenance" | "maintain" => Ok(FitnessGoal::Maintenance),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Deserialize an optional enum from a string, treating unknown values as absent
fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

// ============================================================================
// User Profile
// ============================================================================

/// Biometric input for the nutrition calculator
///
/// All fields are optional; see [`UserProfile::resolve`] for the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Body weight in kilograms
    #[serde(alias = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(alias = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Age in whole years
    #[serde(alias = "age", skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
    #[serde(deserialize_with = "lenient_enum", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(
        alias = "activityLevel",
        deserialize_with = "lenient_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity_level: Option<ActivityLevel>,
    #[serde(deserialize_with = "lenient_enum", skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// Body fat percentage, carried for display only
    #[serde(alias = "bodyFat", skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

/// A profile with every default applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
}

impl UserProfile {
    /// Fill missing fields with the fixed defaults
    /// (70 kg, 170 cm, 30 years, male, moderate, maintenance)
    pub fn resolve(&self) -> ResolvedProfile {
        ResolvedProfile {
            weight_kg: self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG),
            height_cm: self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM),
            age_years: self.age_years.unwrap_or(DEFAULT_AGE_YEARS),
            gender: self.gender.unwrap_or_default(),
            activity_level: self.activity_level.unwrap_or_default(),
            goal: self.goal.unwrap_or_default(),
        }
    }

    /// Names of fields that will fall back to defaults
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push("weight_kg");
        }
        if self.height_cm.is_none() {
            missing.push("height_cm");
        }
        if self.age_years.is_none() {
            missing.push("age_years");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.activity_level.is_none() {
            missing.push("activity_level");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        missing
    }

    /// Overlay the fields that are set in `update` onto this profile
    pub fn merge(&mut self, update: &UserProfile) {
        if update.weight_kg.is_some() {
            self.weight_kg = update.weight_kg;
        }
        if update.height_cm.is_some() {
            self.height_cm = update.height_cm;
        }
        if update.age_years.is_some() {
            self.age_years = update.age_years;
        }
        if update.gender.is_some() {
            self.gender = update.gender;
        }
        if update.activity_level.is_some() {
            self.activity_level = update.activity_level;
        }
        if update.goal.is_some() {
            self.goal = update.goal;
        }
        if update.body_fat_percent.is_some() {
            self.body_fat_percent = update.body_fat_percent;
        }
    }
}

// ============================================================================
// Meals
// ============================================================================

/// A single meal; absent nutrient fields read as zero
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Meal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Fat in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl Meal {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: None,
            calories: Some(calories),
            protein: Some(protein),
            carbs: Some(carbs),
            fat: Some(fat),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn calories(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }

    pub fn protein(&self) -> f64 {
        self.protein.unwrap_or(0.0)
    }

    pub fn carbs(&self) -> f64 {
        self.carbs.unwrap_or(0.0)
    }

    pub fn fat(&self) -> f64 {
        self.fat.unwrap_or(0.0)
    }
}

/// Slot a meal occupies in a daily plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        };
        f.write_str(s)
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" | "snacks" => Ok(MealSlot::Snack),
            _ => Err(format!(
                "Invalid meal slot. Must be one of: breakfast, lunch, dinner, snack (got {})",
                s
            )),
        }
    }
}

/// One day of meals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealPlan {
    /// Day the plan covers, if the client recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
    pub snacks: Vec<Meal>,
}

impl MealPlan {
    /// Iterate over every meal in slot order: breakfast, lunch, dinner, then snacks
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
    }

    /// Place a meal in a slot; snacks are appended
    pub fn set_meal(&mut self, slot: MealSlot, meal: Meal) {
        match slot {
            MealSlot::Breakfast => self.breakfast = Some(meal),
            MealSlot::Lunch => self.lunch = Some(meal),
            MealSlot::Dinner => self.dinner = Some(meal),
            MealSlot::Snack => self.snacks.push(meal),
        }
    }

    pub fn meal_count(&self) -> usize {
        self.meals().count()
    }

    pub fn is_empty(&self) -> bool {
        self.meal_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let resolved = UserProfile::default().resolve();
        assert_eq!(resolved.weight_kg, 70.0);
        assert_eq!(resolved.height_cm, 170.0);
        assert_eq!(resolved.age_years, 30);
        assert_eq!(resolved.gender, Gender::Male);
        assert_eq!(resolved.activity_level, ActivityLevel::Moderate);
        assert_eq!(resolved.goal, FitnessGoal::Maintenance);
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let json = r#"{"weight": 80, "gender": "other", "activityLevel": "couch", "goal": "shred"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.weight_kg, Some(80.0));
        assert_eq!(profile.gender, None);
        assert_eq!(profile.activity_level, None);
        assert_eq!(profile.goal, None);
        assert_eq!(profile.resolve().activity_level.multiplier(), 1.55);
    }

    #[test]
    fn test_profile_round_trips_snake_case() {
        let profile = UserProfile {
            weight_kg: Some(62.5),
            gender: Some(Gender::Female),
            activity_level: Some(ActivityLevel::VeryActive),
            goal: Some(FitnessGoal::MuscleGain),
            ..Default::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"activity_level\":\"very_active\""));
        assert!(json.contains("\"goal\":\"muscle_gain\""));

        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_activity_level_aliases() {
        assert_eq!("lightly_active".parse::<ActivityLevel>(), Ok(ActivityLevel::Light));
        assert_eq!("Very-Active".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
        assert!("super_active".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_merge_only_overwrites_set_fields() {
        let mut profile = UserProfile {
            weight_kg: Some(90.0),
            age_years: Some(40),
            ..Default::default()
        };
        profile.merge(&UserProfile {
            weight_kg: Some(85.0),
            goal: Some(FitnessGoal::WeightLoss),
            ..Default::default()
        });

        assert_eq!(profile.weight_kg, Some(85.0));
        assert_eq!(profile.age_years, Some(40));
        assert_eq!(profile.goal, Some(FitnessGoal::WeightLoss));
    }

    #[test]
    fn test_missing_fields_are_serialized_keys() {
        let full = UserProfile {
            weight_kg: Some(70.0),
            height_cm: Some(170.0),
            age_years: Some(30),
            gender: Some(Gender::Female),
            activity_level: Some(ActivityLevel::Light),
            goal: Some(FitnessGoal::Maintenance),
            body_fat_percent: None,
        };
        let value = serde_json::to_value(&full).unwrap();

        for field in UserProfile::default().missing_fields() {
            assert!(value.get(field).is_some(), "{} is not a profile key", field);
        }
    }

    #[test]
    fn test_missing_fields() {
        let profile = UserProfile {
            weight_kg: Some(70.0),
            gender: Some(Gender::Male),
            ..Default::default()
        };
        assert_eq!(
            profile.missing_fields(),
            vec!["height_cm", "age_years", "activity_level", "goal"]
        );
    }

    #[test]
    fn test_meal_missing_fields_read_as_zero() {
        let meal: Meal = serde_json::from_str(r#"{"calories": 350}"#).unwrap();
        assert_eq!(meal.calories(), 350.0);
        assert_eq!(meal.protein(), 0.0);
        assert_eq!(meal.fat(), 0.0);
    }

    #[test]
    fn test_meal_plan_slots() {
        let mut plan = MealPlan::default();
        assert!(plan.is_empty());

        plan.set_meal(MealSlot::Lunch, Meal::new(600.0, 40.0, 60.0, 20.0));
        plan.set_meal(MealSlot::Snack, Meal::new(150.0, 5.0, 20.0, 5.0));
        plan.set_meal(MealSlot::Snack, Meal::new(100.0, 3.0, 15.0, 2.0));
        plan.set_meal(MealSlot::Lunch, Meal::new(500.0, 35.0, 50.0, 15.0));

        assert_eq!(plan.meal_count(), 3);
        assert_eq!(plan.lunch.as_ref().map(Meal::calories), Some(500.0));
        assert_eq!(plan.snacks.len(), 2);
    }

    #[test]
    fn test_meal_plan_tolerates_partial_json() {
        let json = r#"{"breakfast": {"calories": 400, "protein": 20}, "snacks": [{}]}"#;
        let plan: MealPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.meal_count(), 2);
        assert!(plan.lunch.is_none());
    }
}
