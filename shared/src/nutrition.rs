//! Nutrition profile calculations
//!
//! Turns a [`UserProfile`] into daily calorie, macronutrient and
//! micronutrient targets.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No side effects, no caching, no storage access
//! 2. **Total**: Missing input falls back to defaults, nothing here errors
//! 3. **Observed arithmetic**: Negative carb targets are reported as computed

use crate::models::{ActivityLevel, FitnessGoal, Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of target calories allotted to fat
const FAT_CALORIE_SHARE: f64 = 0.25;

/// Round to the nearest integer, halves toward positive infinity
///
/// `f64::round` sends -2.5 to -3; targets here send it to -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

// ============================================================================
// Result Types
// ============================================================================

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: i64,
    /// May be negative for very low calorie targets with capped protein
    pub carbs: i64,
    pub fat: i64,
}

/// Daily micronutrient reference intakes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicronutrientNeeds {
    pub vitamin_c_mg: u32,
    pub iron_mg: u32,
    pub calcium_mg: u32,
    pub fiber_g: i64,
}

/// Complete derived nutrition profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    /// Basal Metabolic Rate, kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure, kcal/day
    pub tdee: f64,
    pub target_calories: i64,
    pub macro_targets: MacroTargets,
    pub micronutrient_needs: MicronutrientNeeds,
}

// ============================================================================
// BMR / TDEE
// ============================================================================

/// Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// TDEE = BMR × activity multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Daily calorie target for a goal
///
/// Weight loss subtracts the smaller of 500 kcal and 20% of TDEE; muscle gain
/// adds the smaller of 300 kcal and 10% of TDEE.
pub fn calculate_target_calories(tdee: f64, goal: FitnessGoal) -> i64 {
    let target = match goal {
        FitnessGoal::WeightLoss => tdee - (0.2 * tdee).min(500.0),
        FitnessGoal::MuscleGain => tdee + (0.1 * tdee).min(300.0),
        FitnessGoal::Maintenance => tdee,
    };
    round_half_up(target)
}

// ============================================================================
// Macros and Micronutrients
// ============================================================================

/// Protein target in grams, capped per goal
pub fn calculate_protein_grams(weight_kg: f64, goal: FitnessGoal) -> i64 {
    let grams = match goal {
        FitnessGoal::WeightLoss => (1.6 * weight_kg).min(150.0),
        FitnessGoal::MuscleGain => (2.0 * weight_kg).min(180.0),
        FitnessGoal::Maintenance => (1.2 * weight_kg).min(120.0),
    };
    round_half_up(grams)
}

/// Split target calories into protein, fat and carbs
///
/// Fat takes a quarter of the calories, protein is fixed by body weight and
/// carbs get the remainder. The remainder is not floored at zero.
pub fn calculate_macro_targets(target_calories: i64, goal: FitnessGoal, weight_kg: f64) -> MacroTargets {
    let target = target_calories as f64;
    let protein = calculate_protein_grams(weight_kg, goal);

    let fat_calories = FAT_CALORIE_SHARE * target;
    let fat = round_half_up(fat_calories / KCAL_PER_G_FAT);

    let protein_calories = protein as f64 * KCAL_PER_G_PROTEIN;
    let carb_calories = target - protein_calories - fat_calories;
    let carbs = round_half_up(carb_calories / KCAL_PER_G_CARBS);

    MacroTargets { protein, carbs, fat }
}

/// Fixed micronutrient reference values
pub fn calculate_micronutrient_needs(weight_kg: f64, age_years: u32, gender: Gender) -> MicronutrientNeeds {
    let vitamin_c_mg = match gender {
        Gender::Female => 75,
        Gender::Male => 90,
    };
    let iron_mg = if gender == Gender::Female && age_years < 51 { 18 } else { 8 };
    let calcium_mg = if age_years > 50 { 1200 } else { 1000 };

    MicronutrientNeeds {
        vitamin_c_mg,
        iron_mg,
        calcium_mg,
        fiber_g: round_half_up(weight_kg * 0.35),
    }
}

/// Compute the complete nutrition profile for a user
pub fn compute_profile(profile: &UserProfile) -> NutritionProfile {
    let p = profile.resolve();

    let bmr = calculate_bmr(p.weight_kg, p.height_cm, p.age_years, p.gender);
    let tdee = calculate_tdee(bmr, p.activity_level);
    let target_calories = calculate_target_calories(tdee, p.goal);

    NutritionProfile {
        bmr,
        tdee,
        target_calories,
        macro_targets: calculate_macro_targets(target_calories, p.goal, p.weight_kg),
        micronutrient_needs: calculate_micronutrient_needs(p.weight_kg, p.age_years, p.gender),
    }
}
