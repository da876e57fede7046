//! Application state
//!
//! Holds the loaded configuration and the store every command reads from.
//! Commands receive the store as a trait object so tests can swap in an
//! in-memory store.

use crate::config::AppConfig;
use crate::repositories::JsonFileStore;
use fitdash_shared::store::{MealPlanStore, ProfileStore};
use std::sync::Arc;

/// Everything a command needs to persist profile and meal data
pub trait DashboardStore: ProfileStore + MealPlanStore + Send + Sync {}

impl<T> DashboardStore for T where T: ProfileStore + MealPlanStore + Send + Sync {}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Profile and meal plan storage
    pub store: Arc<dyn DashboardStore>,
}

impl AppState {
    /// State backed by JSON files in the configured data directory
    pub fn new(config: AppConfig) -> Self {
        let store = JsonFileStore::new(config.storage.data_dir.clone());
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: AppConfig, store: Arc<dyn DashboardStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    #[inline]
    pub fn store(&self) -> &dyn DashboardStore {
        self.store.as_ref()
    }
}
