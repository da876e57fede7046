//! Workout service - weekly plan for the stored profile

use crate::error::CliResult;
use crate::services::profile::ProfileService;
use fitdash_shared::store::ProfileStore;
use fitdash_shared::workouts::{select_workout_plan, WorkoutPlan};
use tracing::debug;

pub struct WorkoutService;

impl WorkoutService {
    /// Select the plan for the stored goal and activity level (defaults if unset)
    pub fn plan<S: ProfileStore + ?Sized>(store: &S) -> CliResult<WorkoutPlan> {
        let resolved = ProfileService::get_profile_or_default(store)?.resolve();
        let plan = select_workout_plan(resolved.goal, resolved.activity_level);
        debug!(goal = %resolved.goal, days = plan.days.len(), "Selected workout plan");
        Ok(plan)
    }
}
