//! Input validation functions
//!
//! The calculator accepts anything and falls back to defaults. These checks
//! run at the edges (CLI, client forms) before data is saved.

use crate::models::{Meal, UserProfile};

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age_years: u32) -> Result<(), String> {
    if age_years < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age_years > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

/// Validate body fat percentage
pub fn validate_body_fat(percent: f64) -> Result<(), String> {
    if percent.is_nan() || percent.is_infinite() {
        return Err("Body fat must be a valid number".to_string());
    }
    if !(3.0..=60.0).contains(&percent) {
        return Err("Body fat must be between 3% and 60%".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a macronutrient amount in grams
pub fn validate_grams(grams: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err("Amount must be a valid number".to_string());
    }
    if grams < 0.0 {
        return Err("Amount cannot be negative".to_string());
    }
    if grams > 5000.0 {
        return Err("Amount unreasonably high".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Current Weight",
        "height" | "height_cm" => "Height",
        "age" | "age_years" => "Age",
        "gender" => "Gender",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "body_fat" | "body_fat_percent" => "Body Fat",
        "calories" => "Calories",
        "protein" => "Protein",
        "carbs" => "Carbohydrates",
        "fat" => "Fat",
        "slot" => "Meal",
        _ => field_name,
    }
}

/// Convert a list of technical field names to user-friendly labels
pub fn get_missing_fields_labels(fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .map(|f| get_field_display_label(f).to_string())
        .collect()
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|msg| ValidationError::new(field, &msg))
}

/// Validate every field that is present on a profile
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    if let Some(weight) = profile.weight_kg {
        check("weight_kg", validate_weight(weight))?;
    }
    if let Some(height) = profile.height_cm {
        check("height_cm", validate_height_cm(height))?;
    }
    if let Some(age) = profile.age_years {
        check("age_years", validate_age(age))?;
    }
    if let Some(body_fat) = profile.body_fat_percent {
        check("body_fat_percent", validate_body_fat(body_fat))?;
    }
    Ok(())
}

/// Validate every nutrient that is present on a meal
pub fn validate_meal(meal: &Meal) -> Result<(), ValidationError> {
    if let Some(calories) = meal.calories {
        check("calories", validate_calories(calories))?;
    }
    if let Some(protein) = meal.protein {
        check("protein", validate_grams(protein))?;
    }
    if let Some(carbs) = meal.carbs {
        check("carbs", validate_grams(carbs))?;
    }
    if let Some(fat) = meal.fat {
        check("fat", validate_grams(fat))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(20.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
        assert!(validate_weight(10.0).is_err());
        assert!(validate_weight(600.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(-10.0).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(30).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(151).is_err());
    }

    #[test]
    fn test_validate_body_fat() {
        assert!(validate_body_fat(18.0).is_ok());
        assert!(validate_body_fat(2.0).is_err());
        assert!(validate_body_fat(75.0).is_err());
    }

    #[test]
    fn test_validate_calories() {
        assert!(validate_calories(0.0).is_ok());
        assert!(validate_calories(2000.0).is_ok());
        assert!(validate_calories(-1.0).is_err());
        assert!(validate_calories(100000.0).is_err());
    }

    #[test]
    fn test_validate_profile_reports_first_bad_field() {
        let profile = UserProfile {
            weight_kg: Some(70.0),
            height_cm: Some(20.0),
            age_years: Some(0),
            ..Default::default()
        };
        let err = validate_profile(&profile).unwrap_err();
        assert_eq!(err.field, "height_cm");
        assert_eq!(err.user_message(), "Height: Height must be at least 50 cm");
    }

    #[test]
    fn test_validate_profile_allows_missing_fields() {
        assert!(validate_profile(&UserProfile::default()).is_ok());
    }

    #[test]
    fn test_validate_meal() {
        assert!(validate_meal(&Meal::new(500.0, 30.0, 60.0, 15.0)).is_ok());
        let bad = Meal {
            fat: Some(-3.0),
            ..Default::default()
        };
        assert_eq!(validate_meal(&bad).unwrap_err().display_label, "Fat");
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("height_cm"), "Height");
        assert_eq!(get_field_display_label("activity_level"), "Activity Level");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
        assert_eq!(
            get_missing_fields_labels(&["weight_kg", "goal"]),
            vec!["Current Weight".to_string(), "Goal".to_string()]
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_negative_grams_rejected(grams in -1000.0f64..-0.001) {
            prop_assert!(validate_grams(grams).is_err());
        }
    }
}
