//! Storage capabilities for profiles and meal plans
//!
//! The calculator never touches storage. Callers load data through these
//! traits and pass plain values in, so the same code runs against browser
//! storage, a JSON file or memory.

use crate::errors::StoreError;
use crate::models::{MealPlan, UserProfile};
use std::sync::RwLock;

/// Load and save the user's biometric profile
pub trait ProfileStore {
    fn load_profile(&self) -> Result<Option<UserProfile>, StoreError>;
    fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;
}

/// Load and save the current meal plan
pub trait MealPlanStore {
    fn load_meal_plan(&self) -> Result<Option<MealPlan>, StoreError>;
    fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), StoreError>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profile: RwLock<Option<UserProfile>>,
    meal_plan: RwLock<Option<MealPlan>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(profile: Option<UserProfile>, meal_plan: Option<MealPlan>) -> Self {
        Self {
            profile: RwLock::new(profile),
            meal_plan: RwLock::new(meal_plan),
        }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

impl ProfileStore for InMemoryStore {
    fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profile.read().map_err(poisoned)?.clone())
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        *self.profile.write().map_err(poisoned)? = Some(profile.clone());
        Ok(())
    }
}

impl MealPlanStore for InMemoryStore {
    fn load_meal_plan(&self) -> Result<Option<MealPlan>, StoreError> {
        Ok(self.meal_plan.read().map_err(poisoned)?.clone())
    }

    fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), StoreError> {
        *self.meal_plan.write().map_err(poisoned)? = Some(plan.clone());
        Ok(())
    }
}
