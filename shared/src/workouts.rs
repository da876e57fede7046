//! Workout plan selection
//!
//! Each goal owns a fixed exercise catalog. Days draw from it round-robin so
//! the same goal and activity level always produce the same plan, and a week
//! cycles through the whole catalog before repeating an exercise.

use crate::models::{ActivityLevel, FitnessGoal};
use serde::Serialize;
use std::fmt;

use self::ExerciseCategory::{Cardio, Core, Flexibility, Strength};

/// Broad exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Core,
    Flexibility,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength => "strength",
            Cardio => "cardio",
            Core => "core",
            Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub category: ExerciseCategory,
    /// Sets/reps or duration, e.g. "4 x 8"
    pub prescription: &'static str,
}

const fn exercise(name: &'static str, category: ExerciseCategory, prescription: &'static str) -> Exercise {
    Exercise { name, category, prescription }
}

const WEIGHT_LOSS_CATALOG: &[Exercise] = &[
    exercise("Jumping jacks", Cardio, "3 x 45 s"),
    exercise("Bodyweight squats", Strength, "3 x 20"),
    exercise("Mountain climbers", Core, "3 x 30 s"),
    exercise("Push-ups", Strength, "3 x 12"),
    exercise("Burpees", Cardio, "3 x 10"),
    exercise("Walking lunges", Strength, "3 x 12 each leg"),
    exercise("Plank", Core, "3 x 45 s"),
    exercise("Brisk walk or jog", Cardio, "30 min"),
];

const MUSCLE_GAIN_CATALOG: &[Exercise] = &[
    exercise("Bench press", Strength, "4 x 8"),
    exercise("Overhead press", Strength, "4 x 8"),
    exercise("Dips", Strength, "3 x 10"),
    exercise("Barbell row", Strength, "4 x 8"),
    exercise("Pull-ups", Strength, "4 x 6-10"),
    exercise("Biceps curls", Strength, "3 x 12"),
    exercise("Back squat", Strength, "4 x 6"),
    exercise("Romanian deadlift", Strength, "4 x 8"),
    exercise("Hanging leg raises", Core, "3 x 12"),
];

const MAINTENANCE_CATALOG: &[Exercise] = &[
    exercise("Push-ups", Strength, "3 x 15"),
    exercise("Goblet squats", Strength, "3 x 12"),
    exercise("Dumbbell rows", Strength, "3 x 12"),
    exercise("Plank", Core, "3 x 45 s"),
    exercise("Cycling", Cardio, "30 min"),
    exercise("Glute bridges", Strength, "3 x 15"),
    exercise("Yoga flow", Flexibility, "20 min"),
];

/// Exercises, per-day count and day focus labels for a goal
struct Routine {
    catalog: &'static [Exercise],
    per_day: usize,
    focus: &'static [&'static str],
}

fn routine(goal: FitnessGoal) -> Routine {
    match goal {
        FitnessGoal::WeightLoss => Routine {
            catalog: WEIGHT_LOSS_CATALOG,
            per_day: 5,
            focus: &["Full-body conditioning", "Cardio intervals", "Strength circuit"],
        },
        FitnessGoal::MuscleGain => Routine {
            catalog: MUSCLE_GAIN_CATALOG,
            per_day: 4,
            focus: &["Push", "Pull", "Legs"],
        },
        FitnessGoal::Maintenance => Routine {
            catalog: MAINTENANCE_CATALOG,
            per_day: 4,
            focus: &["Full body", "Mobility and cardio"],
        },
    }
}

/// Training days per week for an activity level
pub fn training_days_per_week(level: ActivityLevel) -> usize {
    match level {
        ActivityLevel::Sedentary | ActivityLevel::Light => 3,
        ActivityLevel::Moderate => 4,
        ActivityLevel::Active => 5,
        ActivityLevel::VeryActive => 6,
    }
}

/// One training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDay {
    /// 1-based day number within the week
    pub day: usize,
    pub focus: &'static str,
    pub exercises: Vec<Exercise>,
}

/// A week of training
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutPlan {
    pub goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub days: Vec<WorkoutDay>,
}

/// Exercises for the 0-based `day_index`: catalog entries
/// `(day_index * per_day + j) % len` for `j` in `0..per_day`
pub fn exercises_for_day(goal: FitnessGoal, day_index: usize) -> Vec<Exercise> {
    let routine = routine(goal);
    let len = routine.catalog.len();
    (0..routine.per_day)
        .map(|j| routine.catalog[(day_index * routine.per_day + j) % len])
        .collect()
}

/// Build the weekly plan for a goal and activity level
pub fn select_workout_plan(goal: FitnessGoal, activity_level: ActivityLevel) -> WorkoutPlan {
    let routine = routine(goal);
    let days = (0..training_days_per_week(activity_level))
        .map(|d| WorkoutDay {
            day: d + 1,
            focus: routine.focus[d % routine.focus.len()],
            exercises: exercises_for_day(goal, d),
        })
        .collect();

    WorkoutPlan { goal, activity_level, days }
}
