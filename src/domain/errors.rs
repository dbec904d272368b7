//! Domain errors for task scoring and ranking.

use thiserror::Error;

/// A task record that could not be turned into a [`Task`](super::models::Task).
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid task at index {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid task at index {index}: expected an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Invalid due_date at index {index}: '{value}' is not a YYYY-MM-DD calendar date")]
    InvalidDueDate { index: usize, value: String },
}

impl TaskError {
    /// Position of the failing record in its batch
    pub const fn index(&self) -> usize {
        match self {
            Self::Invalid { index, .. }
            | Self::NotAnObject { index, .. }
            | Self::InvalidDueDate { index, .. } => *index,
        }
    }

    /// Stable machine-readable code for API responses
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } | Self::NotAnObject { .. } => "INVALID_TASK",
            Self::InvalidDueDate { .. } => "INVALID_DUE_DATE",
        }
    }
}

/// Errors raised while ranking a batch of tasks.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Task '{title}' cannot be scored: estimated_hours {estimated_hours} yields a non-finite score")]
    NonFiniteScore { title: String, estimated_hours: f64 },
}

impl RankError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NonFiniteScore { .. } => "UNSCORABLE_TASK",
        }
    }
}

pub type RankResult<T> = Result<T, RankError>;
