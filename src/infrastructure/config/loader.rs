use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::logger::parse_log_level;

/// Project-local configuration directory
pub const CONFIG_DIR: &str = ".taskscore";

/// Prefix for environment overrides, nested keys split on `__`
pub const ENV_PREFIX: &str = "TASKSCORE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Server host cannot be empty")]
    EmptyHost,

    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid horizon_days: {0}. Must be at least 1")]
    InvalidHorizon(i64),

    #[error("Invalid importance_scale: {0}. Must be positive")]
    InvalidImportanceScale(f64),

    #[error("Invalid scoring weight {name}: {value}. Must be finite")]
    NonFiniteWeight { name: &'static str, value: f64 },
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .taskscore/config.yaml
    /// 3. .taskscore/local.yaml (optional overrides)
    /// 4. Environment variables (TASKSCORE_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let figment = Self::base()
            .merge(Yaml::file(Path::new(CONFIG_DIR).join("config.yaml")))
            .merge(Yaml::file(Path::new(CONFIG_DIR).join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(&figment).context("Failed to extract configuration from figment")
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let figment = Self::base()
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(&figment).context(format!(
            "Failed to load config from {}",
            path.as_ref().display()
        ))
    }

    /// Load from an explicit file when given, else from the project directory
    pub fn load_with(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    fn extract(figment: &Figment) -> Result<Config> {
        let config: Config = figment.extract()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let scoring = &config.scoring;
        if scoring.horizon_days < 1 {
            return Err(ConfigError::InvalidHorizon(scoring.horizon_days));
        }

        if !(scoring.importance_scale.is_finite() && scoring.importance_scale > 0.0) {
            return Err(ConfigError::InvalidImportanceScale(scoring.importance_scale));
        }

        let weights = [
            ("urgency_weight", scoring.urgency_weight),
            ("importance_weight", scoring.importance_weight),
            ("effort_weight", scoring.effort_weight),
            ("dependency_weight", scoring.dependency_weight),
            ("scale", scoring.scale),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteWeight { name, value });
            }
        }

        Ok(())
    }
}
