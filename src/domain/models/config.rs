use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;

/// Main configuration structure for taskscore
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,

    /// Score formula weights
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to enable permissive CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

const fn default_enable_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

/// Weights of the priority score formula.
///
/// `score = round((urgency * urgency_weight
///               + importance / importance_scale * importance_weight
///               + 1 / (hours + 1) * effort_weight
///               + dependencies * dependency_weight) * scale, 2)`
///
/// The defaults give a nominal 0-100 range for importance in 0-10 and a
/// handful of dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Days before the due date at which urgency starts rising
    #[serde(default = "default_horizon_days")]
    pub horizon_days: i64,

    #[serde(default = "default_urgency_weight")]
    pub urgency_weight: f64,

    #[serde(default = "default_importance_weight")]
    pub importance_weight: f64,

    /// Divisor that maps importance onto 0-1
    #[serde(default = "default_importance_scale")]
    pub importance_scale: f64,

    #[serde(default = "default_effort_weight")]
    pub effort_weight: f64,

    /// Bonus per dependency
    #[serde(default = "default_dependency_weight")]
    pub dependency_weight: f64,

    /// Final multiplier applied before rounding
    #[serde(default = "default_scale")]
    pub scale: f64,
}

const fn default_horizon_days() -> i64 {
    30
}

const fn default_urgency_weight() -> f64 {
    4.0
}

const fn default_importance_weight() -> f64 {
    4.0
}

const fn default_importance_scale() -> f64 {
    10.0
}

const fn default_effort_weight() -> f64 {
    2.0
}

const fn default_dependency_weight() -> f64 {
    0.05
}

const fn default_scale() -> f64 {
    25.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            urgency_weight: default_urgency_weight(),
            importance_weight: default_importance_weight(),
            importance_scale: default_importance_scale(),
            effort_weight: default_effort_weight(),
            dependency_weight: default_dependency_weight(),
            scale: default_scale(),
        }
    }
}
