//! Meal plan aggregation and scoring against a nutrition profile

use crate::models::MealPlan;
use crate::nutrition::{round_half_up, NutritionProfile, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use serde::{Deserialize, Serialize};

/// Below this calorie balance (percent) the plan is short on energy
pub const LOW_CALORIE_BALANCE: f64 = 85.0;
/// Above this calorie balance (percent) portions are too large
pub const HIGH_CALORIE_BALANCE: f64 = 115.0;
/// Below this protein adequacy (percent) protein is insufficient
pub const LOW_PROTEIN_ADEQUACY: f64 = 80.0;
/// Above this protein adequacy (percent) protein is plentiful
pub const HIGH_PROTEIN_ADEQUACY: f64 = 120.0;

/// Maximum points lost for calorie deviation
const CALORIE_PENALTY_MAX: f64 = 40.0;
/// Maximum points lost for protein deviation
const PROTEIN_PENALTY_MAX: f64 = 30.0;

pub const ADD_SNACK_MESSAGE: &str = "Consider adding a healthy snack to meet your energy needs";
pub const REDUCE_PORTIONS_MESSAGE: &str = "Consider reducing portion sizes to stay closer to your calorie target";
pub const ADD_PROTEIN_MESSAGE: &str = "Add more lean protein sources like chicken, fish, eggs or legumes";
pub const VARY_PROTEIN_MESSAGE: &str = "Your protein intake is more than adequate; consider varying your protein sources";
pub const WELL_BALANCED_MESSAGE: &str = "Your nutrition is well-balanced for your goals";

/// Summed nutrients of a meal plan
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Percent of total calories contributed by each macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBalance {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Result of scoring a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealNutritionAnalysis {
    pub totals: NutritionTotals,
    /// Total calories as a percent of target; may exceed 100
    pub calorie_balance: f64,
    /// Total protein as a percent of target
    pub protein_adequacy: f64,
    /// `None` when the plan has zero calories
    pub macro_balance: Option<MacroBalance>,
    /// 0-100
    pub nutrition_score: i64,
    pub recommendations: Vec<String>,
}

/// Sum every meal in the plan; absent meals and fields count as zero
pub fn aggregate_nutrition(plan: &MealPlan) -> NutritionTotals {
    plan.meals().fold(NutritionTotals::default(), |acc, meal| NutritionTotals {
        calories: acc.calories + meal.calories(),
        protein: acc.protein + meal.protein(),
        carbs: acc.carbs + meal.carbs(),
        fat: acc.fat + meal.fat(),
    })
}

/// Calorie-weighted macro shares, undefined when there are no calories
pub fn calculate_macro_balance(totals: &NutritionTotals) -> Option<MacroBalance> {
    if totals.calories == 0.0 {
        return None;
    }
    Some(MacroBalance {
        protein: totals.protein * KCAL_PER_G_PROTEIN / totals.calories * 100.0,
        carbs: totals.carbs * KCAL_PER_G_CARBS / totals.calories * 100.0,
        fat: totals.fat * KCAL_PER_G_FAT / totals.calories * 100.0,
    })
}

/// Score from 0 to 100
///
/// Up to 40 points are lost for calorie deviation and up to 30 for protein
/// deviation, both proportional to the relative error. The remaining 30 points
/// are never deducted.
pub fn calculate_nutrition_score(totals: &NutritionTotals, profile: &NutritionProfile) -> i64 {
    let target_calories = profile.target_calories as f64;
    let target_protein = profile.macro_targets.protein as f64;

    let calorie_penalty = (CALORIE_PENALTY_MAX * (totals.calories - target_calories).abs() / target_calories)
        .min(CALORIE_PENALTY_MAX);
    let protein_penalty = (PROTEIN_PENALTY_MAX * (totals.protein - target_protein).abs() / target_protein)
        .min(PROTEIN_PENALTY_MAX);

    let score = (100.0 - calorie_penalty - protein_penalty).clamp(0.0, 100.0);
    round_half_up(score)
}

/// Advisory messages, calorie advice before protein advice
pub fn build_recommendations(calorie_balance: f64, protein_adequacy: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if calorie_balance < LOW_CALORIE_BALANCE {
        recommendations.push(ADD_SNACK_MESSAGE.to_string());
    } else if calorie_balance > HIGH_CALORIE_BALANCE {
        recommendations.push(REDUCE_PORTIONS_MESSAGE.to_string());
    }

    if protein_adequacy < LOW_PROTEIN_ADEQUACY {
        recommendations.push(ADD_PROTEIN_MESSAGE.to_string());
    } else if protein_adequacy > HIGH_PROTEIN_ADEQUACY {
        recommendations.push(VARY_PROTEIN_MESSAGE.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(WELL_BALANCED_MESSAGE.to_string());
    }

    recommendations
}

/// Compare a meal plan against a nutrition profile
pub fn analyze_meal_plan(plan: &MealPlan, profile: &NutritionProfile) -> MealNutritionAnalysis {
    let totals = aggregate_nutrition(plan);

    let calorie_balance = 100.0 * totals.calories / profile.target_calories as f64;
    let protein_adequacy = 100.0 * totals.protein / profile.macro_targets.protein as f64;

    MealNutritionAnalysis {
        totals,
        calorie_balance,
        protein_adequacy,
        macro_balance: calculate_macro_balance(&totals),
        nutrition_score: calculate_nutrition_score(&totals, profile),
        recommendations: build_recommendations(calorie_balance, protein_adequacy),
    }
}
