//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use fitdash_wasm::{analyze_meal_plan_for_user, compute_nutrition_profile, select_workout_plan};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn computes_profile_in_browser() {
    let json = compute_nutrition_profile(r#"{"gender": "female", "age": 45}"#).unwrap();
    assert!(json.contains("\"iron_mg\":18"));
}

#[wasm_bindgen_test]
fn invalid_json_becomes_js_error() {
    let err = compute_nutrition_profile("{").unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Invalid profile JSON"));
}

#[wasm_bindgen_test]
fn analyzes_plan_and_selects_workouts() {
    let analysis = analyze_meal_plan_for_user(r#"{"snacks": [{"calories": 200}]}"#, "{}").unwrap();
    assert!(analysis.contains("Consider adding a healthy snack"));

    let plan = select_workout_plan("muscle_gain", "active").unwrap();
    assert!(plan.contains("Bench press"));
}
