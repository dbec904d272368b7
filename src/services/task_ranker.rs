use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::debug;

use crate::domain::errors::{RankError, RankResult};
use crate::domain::models::{ScoreBreakdown, ScoredTask, ScoringConfig, Task};
use crate::domain::ports::TaskScorer;
use crate::services::PriorityCalculator;

/// Scores a batch of tasks and orders it by descending score.
///
/// Every task in a batch is scored against the same reference date. Ties
/// keep their input order.
#[derive(Clone)]
pub struct TaskRanker {
    scorer: Arc<dyn TaskScorer>,
}

impl Default for TaskRanker {
    fn default() -> Self {
        Self::new(Arc::new(PriorityCalculator::new()))
    }
}

impl std::fmt::Debug for TaskRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRanker").finish_non_exhaustive()
    }
}

impl TaskRanker {
    pub fn new(scorer: Arc<dyn TaskScorer>) -> Self {
        Self { scorer }
    }

    /// Ranker backed by a [`PriorityCalculator`] with the given weights
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(Arc::new(PriorityCalculator::with_weights(config.clone())))
    }

    /// Rank tasks as of the current local calendar date.
    ///
    /// The date is read once for the whole batch.
    pub fn rank_today(&self, tasks: Vec<Task>) -> RankResult<Vec<ScoredTask>> {
        self.rank(tasks, today())
    }

    /// Score every task against `today` and sort by score, highest first.
    ///
    /// Fails if any score is not finite, which only happens when
    /// `estimated_hours` is exactly -1.
    pub fn rank(&self, tasks: Vec<Task>, today: NaiveDate) -> RankResult<Vec<ScoredTask>> {
        debug!(count = tasks.len(), %today, "ranking task batch");

        let mut scored = tasks
            .into_iter()
            .map(|task| {
                let score = self.scorer.score(&task, today);
                if !score.is_finite() {
                    return Err(RankError::NonFiniteScore {
                        title: task.title().to_string(),
                        estimated_hours: task.estimated_hours(),
                    });
                }
                Ok(ScoredTask { task, score })
            })
            .collect::<RankResult<Vec<_>>>()?;

        // sort_by is stable; scores are finite here so partial_cmp never fails
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(scored)
    }

    /// Factor breakdown for a single task
    pub fn explain(&self, task: &Task, today: NaiveDate) -> ScoreBreakdown {
        self.scorer.breakdown(task, today)
    }
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn task(title: &str, days_out: i64, hours: f64, importance: i32) -> Task {
        Task::new(title, reference_date() + Duration::days(days_out), hours, importance)
    }

    /// Scorer that returns a fixed score per title.
    struct FixedScorer;

    impl TaskScorer for FixedScorer {
        fn breakdown(&self, task: &Task, _today: NaiveDate) -> ScoreBreakdown {
            let score = match task.title() {
                "inf" => f64::INFINITY,
                "high" => 90.0,
                _ => 10.0,
            };
            ScoreBreakdown {
                days_left: 0,
                urgency: 0.0,
                importance_factor: 0.0,
                effort_factor: 0.0,
                dependency_factor: 0.0,
                raw: score,
                score,
            }
        }
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranker = TaskRanker::default();
        let tasks = vec![
            task("later", 60, 8.0, 2),
            task("urgent", 1, 2.0, 8),
            task("middle", 10, 4.0, 5),
        ];

        let ranked = ranker.rank(tasks, reference_date()).unwrap();
        let titles: Vec<_> = ranked.iter().map(|t| t.task.title()).collect();
        assert_eq!(titles, vec!["urgent", "middle", "later"]);
        assert_eq!(ranked[0].score, 193.33);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let ranker = TaskRanker::new(Arc::new(FixedScorer));
        let tasks = vec![
            task("a", 0, 0.0, 0),
            task("high", 0, 0.0, 0),
            task("b", 0, 0.0, 0),
            task("c", 0, 0.0, 0),
        ];

        let ranked = ranker.rank(tasks, reference_date()).unwrap();
        let titles: Vec<_> = ranked.iter().map(|t| t.task.title()).collect();
        assert_eq!(titles, vec!["high", "a", "b", "c"]);
    }

    #[test]
    fn test_rank_empty_batch() {
        let ranker = TaskRanker::default();
        assert!(ranker.rank(Vec::new(), reference_date()).unwrap().is_empty());
    }

    #[test]
    fn test_rank_rejects_non_finite_score() {
        let ranker = TaskRanker::default();
        let tasks = vec![task("ok", 5, 1.0, 5), task("broken", 5, -1.0, 5)];

        let err = ranker.rank(tasks, reference_date()).unwrap_err();
        match err {
            RankError::NonFiniteScore { title, estimated_hours } => {
                assert_eq!(title, "broken");
                assert_eq!(estimated_hours, -1.0);
            }
        }
    }

    #[test]
    fn test_rank_uses_custom_scorer() {
        let ranker = TaskRanker::new(Arc::new(FixedScorer));
        let err = ranker
            .rank(vec![task("inf", 0, 0.0, 0)], reference_date())
            .unwrap_err();
        assert_eq!(err.code(), "UNSCORABLE_TASK");
    }

    #[test]
    fn test_from_config_applies_weights() {
        let config = ScoringConfig {
            scale: 50.0,
            ..ScoringConfig::default()
        };
        let ranker = TaskRanker::from_config(&config);

        let ranked = ranker
            .rank(vec![task("far", 60, 0.0, 0)], reference_date())
            .unwrap();
        assert_eq!(ranked[0].score, 100.0);
    }

    #[test]
    fn test_explain_matches_rank_score() {
        let ranker = TaskRanker::default();
        let t = task("x", 7, 3.0, 6).with_dependencies(["d1"]);

        let breakdown = ranker.explain(&t, reference_date());
        let ranked = ranker.rank(vec![t], reference_date()).unwrap();
        assert_eq!(breakdown.score, ranked[0].score);
        assert_eq!(breakdown.days_left, 7);
    }
}
