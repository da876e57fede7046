//! FitDash WASM Module
//!
//! WebAssembly bindings so the dashboard can run the nutrition calculator in
//! the browser. Structured values cross the boundary as JSON strings.

use fitdash_shared::meal_analysis;
use fitdash_shared::models::{ActivityLevel, FitnessGoal, Gender, MealPlan, UserProfile};
use fitdash_shared::nutrition::{self, NutritionProfile};
use fitdash_shared::workouts;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn parse<T: DeserializeOwned>(what: &str, json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn render<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

fn to_js(err: String) -> JsValue {
    JsValue::from_str(&err)
}

/// Nutrition profile JSON for a user profile JSON
pub fn nutrition_profile_json(profile_json: &str) -> Result<String, String> {
    let profile: UserProfile = parse("profile", profile_json)?;
    render(&nutrition::compute_profile(&profile))
}

/// Nutrient totals JSON for a meal plan JSON
pub fn meal_totals_json(plan_json: &str) -> Result<String, String> {
    let plan: MealPlan = parse("meal plan", plan_json)?;
    render(&meal_analysis::aggregate_nutrition(&plan))
}

/// Analysis JSON for a meal plan against a computed nutrition profile
pub fn meal_analysis_json(plan_json: &str, nutrition_json: &str) -> Result<String, String> {
    let plan: MealPlan = parse("meal plan", plan_json)?;
    let profile: NutritionProfile = parse("nutrition profile", nutrition_json)?;
    render(&meal_analysis::analyze_meal_plan(&plan, &profile))
}

/// Analysis JSON for a meal plan against a user profile's targets
pub fn meal_analysis_for_user_json(plan_json: &str, profile_json: &str) -> Result<String, String> {
    let plan: MealPlan = parse("meal plan", plan_json)?;
    let profile: UserProfile = parse("profile", profile_json)?;
    let targets = nutrition::compute_profile(&profile);
    render(&meal_analysis::analyze_meal_plan(&plan, &targets))
}

/// Compute calorie, macro and micronutrient targets
#[wasm_bindgen]
pub fn compute_nutrition_profile(profile_json: &str) -> Result<String, JsValue> {
    nutrition_profile_json(profile_json).map_err(to_js)
}

/// Sum calories and macros across a meal plan
#[wasm_bindgen]
pub fn aggregate_meal_plan(plan_json: &str) -> Result<String, JsValue> {
    meal_totals_json(plan_json).map_err(to_js)
}

/// Score a meal plan against a nutrition profile produced by
/// `compute_nutrition_profile`
#[wasm_bindgen]
pub fn analyze_meal_plan(plan_json: &str, nutrition_json: &str) -> Result<String, JsValue> {
    meal_analysis_json(plan_json, nutrition_json).map_err(to_js)
}

/// Score a meal plan directly against a user profile
#[wasm_bindgen]
pub fn analyze_meal_plan_for_user(plan_json: &str, profile_json: &str) -> Result<String, JsValue> {
    meal_analysis_for_user_json(plan_json, profile_json).map_err(to_js)
}

/// Weekly workout plan; unknown goal or activity strings use the defaults
#[wasm_bindgen]
pub fn select_workout_plan(goal: &str, activity_level: &str) -> Result<String, JsValue> {
    let goal: FitnessGoal = goal.parse().unwrap_or_default();
    let level: ActivityLevel = activity_level.parse().unwrap_or_default();
    render(&workouts::select_workout_plan(goal, level)).map_err(to_js)
}

/// Calculate BMR (Mifflin-St Jeor)
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    nutrition::calculate_bmr(weight_kg, height_cm, age_years, gender)
}

/// Calculate TDEE from BMR; unknown activity levels use 1.55
#[wasm_bindgen]
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> f64 {
    let level: ActivityLevel = activity_level.parse().unwrap_or_default();
    nutrition::calculate_tdee(bmr, level)
}

/// Daily calorie target for a goal string
#[wasm_bindgen]
pub fn calculate_target_calories(tdee: f64, goal: &str) -> f64 {
    let goal: FitnessGoal = goal.parse().unwrap_or_default();
    nutrition::calculate_target_calories(tdee, goal) as f64
}
