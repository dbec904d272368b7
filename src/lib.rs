//! Taskscore - task prioritization service
//!
//! Scores tasks by deadline urgency, importance, effort and dependency count,
//! and ranks batches of tasks by that score over HTTP or from the command
//! line.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): task model, score types, errors, scoring port
//! - **Service Layer** (`services`): score calculation and batch ranking
//! - **Adapters** (`adapters`): axum HTTP server
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use taskscore::{Task, TaskRanker};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let tasks = vec![
//!     Task::new("Later", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), 0.0, 0),
//!     Task::new("Now", NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), 2.0, 8),
//! ];
//!
//! let ranked = TaskRanker::default().rank(tasks, today).unwrap();
//! assert_eq!(ranked[0].task.title(), "Now");
//! assert_eq!(ranked[0].score, 193.33);
//! assert_eq!(ranked[1].score, 50.0);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{RankError, TaskError};
pub use domain::models::{
    Config, PriorityLevel, ScoreBreakdown, ScoredTask, ScoringConfig, ServerConfig, Task,
};
pub use domain::ports::TaskScorer;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{PriorityCalculator, TaskRanker};
