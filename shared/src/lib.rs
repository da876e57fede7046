//! FitDash Shared Library
//!
//! Nutrition targets, meal plan scoring and workout selection shared by the
//! CLI and the WASM bindings used by the dashboard.

pub mod errors;
pub mod meal_analysis;
pub mod models;
pub mod nutrition;
pub mod store;
pub mod units;
pub mod validation;
pub mod workouts;

// Re-export commonly used items
pub use errors::*;
pub use meal_analysis::{aggregate_nutrition, analyze_meal_plan, MacroBalance, MealNutritionAnalysis, NutritionTotals};
pub use models::*;
pub use nutrition::{compute_profile, MacroTargets, MicronutrientNeeds, NutritionProfile};
pub use store::{InMemoryStore, MealPlanStore, ProfileStore};
pub use units::*;
pub use workouts::{select_workout_plan, WorkoutPlan};
