//! Command-line interface definition and dispatch

pub mod output;

use crate::error::CliResult;
use crate::services::{NutritionService, ProfileService, WorkoutService};
use crate::state::AppState;
use clap::{Args, Parser, Subcommand};
use fitdash_shared::models::{ActivityLevel, FitnessGoal, Gender, Meal, MealSlot, UserProfile};
use fitdash_shared::units::{HeightUnit, UnitPreferences, WeightUnit};
use std::path::PathBuf;

/// Nutrition targets, meal plan scoring and workout plans
#[derive(Parser, Debug)]
#[command(name = "fitdash", version)]
pub struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding profile.json and meal_plan.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the stored profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Show calorie, macro and micronutrient targets
    Targets,
    /// Manage and analyze the meal plan
    #[command(subcommand)]
    Meals(MealsCommand),
    /// Show this week's workout plan
    Workout,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Set one or more profile fields
    Set(ProfileArgs),
    /// Print the stored profile
    Show,
}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Body weight, in --weight-unit (default from config)
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long, value_name = "kg|lbs|st")]
    pub weight_unit: Option<WeightUnit>,
    /// Height, in --height-unit (default from config)
    #[arg(long)]
    pub height: Option<f64>,
    #[arg(long, value_name = "cm|m|in")]
    pub height_unit: Option<HeightUnit>,
    #[arg(long)]
    pub age: Option<u32>,
    #[arg(long, value_name = "male|female")]
    pub gender: Option<Gender>,
    #[arg(long, value_name = "sedentary|light|moderate|active|very_active")]
    pub activity: Option<ActivityLevel>,
    #[arg(long, value_name = "weight_loss|muscle_gain|maintenance")]
    pub goal: Option<FitnessGoal>,
    /// Body fat percentage
    #[arg(long)]
    pub body_fat: Option<f64>,
}

impl ProfileArgs {
    /// Profile update in SI units
    pub fn to_profile(&self, units: &UnitPreferences) -> UserProfile {
        let weight_unit = self.weight_unit.unwrap_or(units.weight);
        let height_unit = self.height_unit.unwrap_or(units.height);

        UserProfile {
            weight_kg: self.weight.map(|w| weight_unit.to_kg(w)),
            height_cm: self.height.map(|h| height_unit.to_cm(h)),
            age_years: self.age,
            gender: self.gender,
            activity_level: self.activity,
            goal: self.goal,
            body_fat_percent: self.body_fat,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum MealsCommand {
    /// Set a meal slot (snacks are appended)
    Set(MealArgs),
    /// Replace the plan with a JSON file
    Import {
        file: PathBuf,
    },
    /// Remove every meal
    Clear,
    /// Print the stored plan
    Show,
    /// Score the plan against your targets
    Analyze,
}

#[derive(Args, Debug)]
pub struct MealArgs {
    /// breakfast, lunch, dinner or snack
    pub slot: MealSlot,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub calories: Option<f64>,
    /// Protein in grams
    #[arg(long)]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[arg(long)]
    pub carbs: Option<f64>,
    /// Fat in grams
    #[arg(long)]
    pub fat: Option<f64>,
}

impl MealArgs {
    pub fn to_meal(&self) -> Meal {
        Meal {
            name: self.name.clone(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

/// Run a command and return what should be printed
pub fn execute(state: &AppState, command: &Command) -> CliResult<String> {
    let store = state.store();
    let out = output::Renderer::new(&state.config);

    match command {
        Command::Profile(ProfileCommand::Set(args)) => {
            let update = args.to_profile(&state.config.units);
            let profile = ProfileService::update_profile(store, &update)?;
            out.profile(&profile)
        }
        Command::Profile(ProfileCommand::Show) => {
            let profile = ProfileService::get_profile(store)?;
            out.profile(&profile)
        }
        Command::Targets => out.targets(&NutritionService::targets(store)?),
        Command::Meals(MealsCommand::Set(args)) => {
            let plan = NutritionService::set_meal(store, args.slot, args.to_meal())?;
            out.meal_plan(&plan)
        }
        Command::Meals(MealsCommand::Import { file }) => {
            let plan = NutritionService::import_meal_plan(store, file)?;
            out.meal_plan(&plan)
        }
        Command::Meals(MealsCommand::Clear) => {
            NutritionService::clear_meal_plan(store)?;
            out.meal_plan(&NutritionService::get_meal_plan(store)?)
        }
        Command::Meals(MealsCommand::Show) => out.meal_plan(&NutritionService::get_meal_plan(store)?),
        Command::Meals(MealsCommand::Analyze) => out.analysis(&NutritionService::analyze(store)?),
        Command::Workout => out.workout(&WorkoutService::plan(store)?),
    }
}
