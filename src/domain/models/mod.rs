pub mod config;
pub mod score;
pub mod task;

pub use config::{Config, ScoringConfig, ServerConfig};
pub use score::{PriorityLevel, ScoreBreakdown, ScoredTask};
pub use task::{Task, DUE_DATE_FORMAT, SCORE_KEY};
