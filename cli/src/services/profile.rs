//! Profile service - load, validate and update the stored user profile

use crate::error::{CliError, CliResult};
use fitdash_shared::models::UserProfile;
use fitdash_shared::store::ProfileStore;
use fitdash_shared::validation::validate_profile;
use tracing::info;

/// Profile service for user profile operations
pub struct ProfileService;

impl ProfileService {
    /// Get the stored profile
    pub fn get_profile<S: ProfileStore + ?Sized>(store: &S) -> CliResult<UserProfile> {
        store.load_profile()?.ok_or_else(|| {
            CliError::NotFound("No profile saved yet; run `fitdash profile set` first".to_string())
        })
    }

    /// Get the stored profile, or an empty one that resolves to defaults
    pub fn get_profile_or_default<S: ProfileStore + ?Sized>(store: &S) -> CliResult<UserProfile> {
        Ok(store.load_profile()?.unwrap_or_default())
    }

    /// Merge `update` into the stored profile and save it
    ///
    /// Only fields set on `update` change. The merged profile is validated
    /// before anything is written.
    pub fn update_profile<S: ProfileStore + ?Sized>(store: &S, update: &UserProfile) -> CliResult<UserProfile> {
        let mut profile = Self::get_profile_or_default(store)?;
        profile.merge(update);

        validate_profile(&profile)?;
        store.save_profile(&profile)?;

        info!(
            missing = profile.missing_fields().len(),
            "Profile updated"
        );
        Ok(profile)
    }
}
