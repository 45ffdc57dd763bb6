//! Configuration management.

use crate::error::Result;
use crate::telemetry::LoggingConfig;
use crate::validation::{DobPolicy, DEFAULT_FLOOR_YEAR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `FIELDCHECK_VALIDATION__FLOOR_YEAR`.
pub const ENV_PREFIX: &str = "FIELDCHECK";

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Validation configuration
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Birth years up to and including this one are rejected
    #[serde(default = "default_floor_year")]
    pub floor_year: i32,

    /// Birth years from this one on are rejected; the current year when unset
    #[serde(default)]
    pub reference_year: Option<i32>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            floor_year: default_floor_year(),
            reference_year: None,
        }
    }
}

impl ValidationConfig {
    /// The date-of-birth policy this configuration describes.
    pub fn policy(&self) -> DobPolicy {
        let policy = match self.reference_year {
            Some(year) => DobPolicy::for_year(year),
            None => DobPolicy::current(),
        };
        policy.with_floor_year(self.floor_year)
    }
}

// Default value functions
fn default_floor_year() -> i32 { DEFAULT_FLOOR_YEAR }

impl Config {
    /// The `FIELDCHECK_*` environment source, e.g. `FIELDCHECK_LOGGING__LEVEL`.
    ///
    /// Reads the process environment unless given an explicit map with
    /// [`config::Environment::source`].
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from the environment (and a `.env` file, if any).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_with(Self::environment())
    }

    /// Load configuration from the given environment source only.
    pub fn load_with(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(environment)
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }

    /// Load from a specific file path, with environment overrides on top.
    ///
    /// The format follows the file extension (toml, yaml, json, ...).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, Self::environment())
    }

    /// Load from a file, layering the given environment source on top.
    pub fn from_file_with(path: impl AsRef<Path>, environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment)
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }
}
