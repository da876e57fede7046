//! JSON file store for the profile and meal plan

use fitdash_shared::errors::StoreError;
use fitdash_shared::models::{MealPlan, UserProfile};
use fitdash_shared::store::{MealPlanStore, ProfileStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROFILE_FILE: &str = "profile.json";
pub const MEAL_PLAN_FILE: &str = "meal_plan.json";

/// One pretty-printed JSON file per record inside a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, StoreError> {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded stored file");
        Ok(Some(value))
    }

    /// Write through a temp file and rename so a crash never leaves half a file
    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!(".{}.tmp", file));

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), "Saved stored file");
        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.read_json(PROFILE_FILE)
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write_json(PROFILE_FILE, profile)
    }
}

impl MealPlanStore for JsonFileStore {
    fn load_meal_plan(&self) -> Result<Option<MealPlan>, StoreError> {
        self.read_json(MEAL_PLAN_FILE)
    }

    fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), StoreError> {
        self.write_json(MEAL_PLAN_FILE, plan)
    }
}
