//! Integration tests for targets, meal plan and workout commands

mod common;

use fitdash_cli::error::CliError;

#[test]
fn test_targets_for_reference_profile() {
    let app = common::TestApp::new();
    app.set_reference_profile();

    let report = app.run_json(&["targets"]);

    assert_eq!(report["nutrition"]["bmr"], 1617.5);
    assert_eq!(report["nutrition"]["tdee"], 2507.125);
    assert_eq!(report["nutrition"]["target_calories"], 2007);
    assert_eq!(report["nutrition"]["macro_targets"]["protein"], 112);
    assert_eq!(report["nutrition"]["macro_targets"]["carbs"], 264);
    assert_eq!(report["nutrition"]["macro_targets"]["fat"], 56);
    assert_eq!(report["defaulted_fields"].as_array().unwrap().len(), 0);
}

#[test]
fn test_targets_without_profile_report_defaults() {
    let app = common::TestApp::new();

    let text = app.run(&["targets"]).unwrap();

    assert!(text.contains("2507 kcal"));
    assert!(text.contains("Using defaults for:"));
}

#[test]
fn test_empty_meal_plan_has_null_macro_balance() {
    let app = common::TestApp::new();
    app.set_reference_profile();

    let report = app.run_json(&["meals", "analyze"]);

    assert!(report["analysis"]["macro_balance"].is_null());
    assert_eq!(report["analysis"]["totals"]["calories"], 0.0);
    assert_eq!(report["analysis"]["nutrition_score"], 30);
}

#[test]
fn test_low_meal_plan_recommendations() {
    let app = common::TestApp::new();
    app.set_reference_profile();
    app.run(&[
        "meals", "set", "breakfast", "--name", "Oats", "--calories", "500", "--protein", "20", "--carbs", "60",
        "--fat", "15",
    ])
    .unwrap();
    app.run(&["meals", "set", "snack", "--calories", "200", "--protein", "5"]).unwrap();

    let report = app.run_json(&["meals", "analyze"]);

    let recommendations = report["analysis"]["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert!(recommendations[0].as_str().unwrap().contains("snack"));
    assert!(recommendations[1].as_str().unwrap().contains("protein"));
    assert_eq!(report["analysis"]["totals"]["calories"], 700.0);
}

#[test]
fn test_snacks_are_appended() {
    let app = common::TestApp::new();
    app.run(&["meals", "set", "snack", "--calories", "100"]).unwrap();
    app.run(&["meals", "set", "snack", "--calories", "150"]).unwrap();

    let plan = app.run_json(&["meals", "show"]);

    assert_eq!(plan["snacks"].as_array().unwrap().len(), 2);
}

#[test]
fn test_import_meal_plan_file() {
    let app = common::TestApp::new();
    let path = app.write_file(
        "today.json",
        r#"{
            "date": "2026-10-19",
            "breakfast": {"name": "Eggs", "calories": 400, "protein": 30, "carbs": 10, "fat": 25},
            "lunch": {"calories": 700, "protein": 45},
            "snacks": [{"calories": 150}]
        }"#,
    );

    let plan = app.run_json(&["meals", "import", path.to_str().unwrap()]);
    assert_eq!(plan["date"], "2026-10-19");

    let report = app.run_json(&["meals", "analyze"]);
    assert_eq!(report["analysis"]["totals"]["calories"], 1250.0);
    assert_eq!(report["analysis"]["totals"]["protein"], 75.0);
}

#[test]
fn test_import_invalid_json_is_validation_error() {
    let app = common::TestApp::new();
    let path = app.write_file("bad.json", "[1, 2");

    let err = app.run(&["meals", "import", path.to_str().unwrap()]).unwrap_err();

    assert!(matches!(err, CliError::Validation(_)));
}

#[test]
fn test_clear_meal_plan() {
    let app = common::TestApp::new();
    app.run(&["meals", "set", "dinner", "--calories", "800"]).unwrap();

    let text = app.run(&["meals", "clear"]).unwrap();

    assert_eq!(text, "Meal plan is empty");
}

#[test]
fn test_workout_plan_for_profile() {
    let app = common::TestApp::new();
    app.run(&["profile", "set", "--goal", "weight_loss", "--activity", "active"]).unwrap();

    let plan = app.run_json(&["workout"]);

    let days = plan["days"].as_array().unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days[0]["exercises"].as_array().unwrap().len(), 5);
}
