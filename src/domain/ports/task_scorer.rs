use chrono::NaiveDate;

use crate::domain::models::{ScoreBreakdown, Task};

/// Port for task priority scoring following hexagonal architecture
///
/// Implementations must be pure: the result depends only on the task and the
/// `today` passed in, so a batch scored against one date is internally
/// consistent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskscore::domain::models::Task;
/// use taskscore::domain::ports::TaskScorer;
/// use taskscore::services::PriorityCalculator;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let task = Task::new("Plan sprint", today.succ_opt().unwrap(), 2.0, 8);
///
/// let calc = PriorityCalculator::new();
/// assert_eq!(calc.score(&task, today), 193.33);
/// ```
pub trait TaskScorer: Send + Sync {
    /// Compute every factor of the score for `task` as of `today`
    fn breakdown(&self, task: &Task, today: NaiveDate) -> ScoreBreakdown;

    /// Compute the final rounded score
    fn score(&self, task: &Task, today: NaiveDate) -> f64 {
        self.breakdown(task, today).score
    }
}
