//! Domain layer for taskscore
//!
//! This module contains the task model, score types, errors and the
//! scoring port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{RankError, TaskError};
