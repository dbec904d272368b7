//! Port trait definitions (Hexagonal Architecture)
//!
//! - TaskScorer: maps a task and a reference date to a priority score
pub mod task_scorer;

pub use task_scorer::TaskScorer;
