//! CLI error handling
//!
//! Errors carry a user-facing message and map to a process exit code.

use fitdash_shared::errors::StoreError;
use fitdash_shared::validation::ValidationError;
use thiserror::Error;
use tracing::error;

/// Error type returned by commands and services
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Internal(err) => {
                error!("Internal error: {:?}", err);
                1
            }
            CliError::Validation(_) => 2,
            CliError::NotFound(_) => 3,
            CliError::Store(_) => 4,
            CliError::Config(_) => 5,
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Validation(err.user_message())
    }
}

/// Result type alias for commands and services
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Validation("bad".to_string()).exit_code(), 2);
        assert_eq!(CliError::NotFound("profile".to_string()).exit_code(), 3);
        assert_eq!(CliError::Store(StoreError::Corrupt("x".to_string())).exit_code(), 4);
        assert_eq!(CliError::Internal(anyhow::anyhow!("boom")).exit_code(), 1);
    }

    #[test]
    fn test_validation_error_message() {
        let err: CliError = ValidationError::new("height_cm", "Height must be at least 50 cm").into();
        assert_eq!(
            err.to_string(),
            "Validation error: Height: Height must be at least 50 cm"
        );
    }
}
