//! Business logic services
//!
//! Services load data through the store traits, hand plain values to the
//! shared calculators and save results back.

pub mod nutrition;
pub mod profile;
pub mod workout;

pub use nutrition::{AnalysisReport, NutritionService, TargetsReport};
pub use profile::ProfileService;
pub use workout::WorkoutService;
