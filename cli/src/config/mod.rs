//! Configuration management for the FitDash CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FITDASH__)

use fitdash_shared::units::UnitPreferences;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub units: UnitPreferences,
}

/// Where the profile and meal plan files live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Default filter when RUST_LOG is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: "fitdash_cli=warn".to_string(),
        }
    }
}

/// Command output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print JSON instead of text
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: PathBuf::from(".fitdash"),
            },
            log: LogConfig::default(),
            output: OutputConfig::default(),
            units: UnitPreferences::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FITDASH__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., FITDASH__STORAGE__DATA_DIR=/tmp/fitdash sets storage.data_dir
            .add_source(
                config::Environment::with_prefix("FITDASH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitdash_shared::units::WeightUnit;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.data_dir, PathBuf::from(".fitdash"));
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert!(!config.output.json);
        assert_eq!(config.units.weight, WeightUnit::Kg);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[storage]\ndata_dir = \"/tmp/fd\"\n[units]\nweight = \"lbs\"\nheight = \"inches\"\nenergy = \"kcal\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/fd"));
        assert_eq!(config.units.weight, WeightUnit::Lbs);
        assert_eq!(config.log.level, "fitdash_cli=warn");
    }
}
