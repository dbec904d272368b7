//! Service layer: score calculation and batch ranking.

pub mod priority_calculator;
pub mod suggestions;
pub mod task_ranker;

pub use priority_calculator::PriorityCalculator;
pub use suggestions::sample_suggestions;
pub use task_ranker::TaskRanker;
