use chrono::NaiveDate;

use crate::domain::models::{ScoreBreakdown, ScoringConfig, Task};
use crate::domain::ports::TaskScorer;

/// Service for calculating task priority scores
///
/// Score formula:
/// `round((urgency * 4 + importance / 10 * 4 + 1 / (hours + 1) * 2 + deps * 0.05) * 25, 2)`
///
/// Neither the inputs nor the result are clamped, so importance outside 0-10
/// or a long dependency list can push the score outside 0-100.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityCalculator {
    weights: ScoringConfig,
}

impl Default for PriorityCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityCalculator {
    /// Create a new priority calculator with default weights
    pub fn new() -> Self {
        Self {
            weights: ScoringConfig::default(),
        }
    }

    /// Create a priority calculator with custom weights
    pub const fn with_weights(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    /// Weights in use
    pub const fn weights(&self) -> &ScoringConfig {
        &self.weights
    }

    /// Calculate the score for a task
    ///
    /// # Arguments
    /// * `task` - The task to score
    /// * `today` - Reference date the deadline is measured from
    pub fn calculate(&self, task: &Task, today: NaiveDate) -> f64 {
        self.calculate_breakdown(task, today).score
    }

    /// Calculate the score together with every intermediate factor
    pub fn calculate_breakdown(&self, task: &Task, today: NaiveDate) -> ScoreBreakdown {
        let w = &self.weights;

        let days_left = (task.due_date() - today).num_days();
        let urgency = self.calculate_urgency(days_left);
        let importance_factor = task.importance() / w.importance_scale;
        let effort_factor = 1.0 / (task.estimated_hours() + 1.0);
        let dependency_factor = task.dependency_count() as f64 * w.dependency_weight;

        let raw = urgency * w.urgency_weight
            + importance_factor * w.importance_weight
            + effort_factor * w.effort_weight
            + dependency_factor;

        ScoreBreakdown {
            days_left,
            urgency,
            importance_factor,
            effort_factor,
            dependency_factor,
            raw,
            score: round_to_cents(raw * w.scale),
        }
    }

    /// Deadline pressure for a task due in `days_left` days
    ///
    /// Rises linearly from 0 at the horizon to 1 on the due date and stays
    /// at 1 for overdue tasks.
    fn calculate_urgency(&self, days_left: i64) -> f64 {
        let horizon = self.weights.horizon_days;
        let pressure = horizon.saturating_sub(days_left).max(0);
        (pressure as f64 / horizon as f64).min(1.0)
    }
}

impl TaskScorer for PriorityCalculator {
    fn breakdown(&self, task: &Task, today: NaiveDate) -> ScoreBreakdown {
        self.calculate_breakdown(task, today)
    }
}

/// Round half away from zero to two decimal places
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn create_test_task(days_out: i64, hours: f64, importance: i32) -> Task {
        Task::new("Test", today() + Duration::days(days_out), hours, importance)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_due_tomorrow_scenario() {
        let calc = PriorityCalculator::new();
        let task = create_test_task(1, 2.0, 8);

        let breakdown = calc.calculate_breakdown(&task, today());
        assert_eq!(breakdown.days_left, 1);
        assert!(approx(breakdown.urgency, 29.0 / 30.0));
        assert!(approx(breakdown.importance_factor, 0.8));
        assert!(approx(breakdown.effort_factor, 1.0 / 3.0));
        assert!(approx(breakdown.dependency_factor, 0.0));
        assert!(approx(breakdown.raw, 7.733_333_333_333_333));
        // Above 100: the scale is nominal, not a clamp
        assert_eq!(breakdown.score, 193.33);
    }

    #[test]
    fn test_far_future_zero_effort_scenario() {
        let calc = PriorityCalculator::new();
        let task = create_test_task(60, 0.0, 0);

        assert_eq!(calc.calculate(&task, today()), 50.0);
    }

    #[test]
    fn test_urgency_zero_at_horizon() {
        let calc = PriorityCalculator::new();
        assert_eq!(calc.calculate_urgency(30), 0.0);
        assert_eq!(calc.calculate_urgency(31), 0.0);
        assert_eq!(calc.calculate_urgency(365), 0.0);
    }

    #[test]
    fn test_urgency_linear_inside_horizon() {
        let calc = PriorityCalculator::new();
        assert!(approx(calc.calculate_urgency(15), 0.5));
        assert!(approx(calc.calculate_urgency(29), 1.0 / 30.0));
    }

    #[test]
    fn test_urgency_saturates_when_overdue() {
        let calc = PriorityCalculator::new();
        assert_eq!(calc.calculate_urgency(0), 1.0);
        assert_eq!(calc.calculate_urgency(-1), 1.0);
        assert_eq!(calc.calculate_urgency(-30), 1.0);
        assert_eq!(calc.calculate_urgency(-400), 1.0);
        assert_eq!(calc.calculate_urgency(i64::MIN), 1.0);
    }

    #[test]
    fn test_dependencies_add_linear_bonus() {
        let calc = PriorityCalculator::new();
        let base = create_test_task(60, 0.0, 0);
        let with_deps = base.clone().with_dependencies(["a", "b", "c", "d"]);

        // 4 * 0.05 * 25 = 5
        assert_eq!(calc.calculate(&with_deps, today()), 55.0);
        assert_eq!(calc.calculate(&base, today()), 50.0);
    }

    #[test]
    fn test_out_of_range_importance_is_not_clamped() {
        let calc = PriorityCalculator::new();

        // importance -20 -> factor -2 -> -8 raw; effort 1/(1+1)*2 = 1
        let negative = create_test_task(60, 1.0, -20);
        assert_eq!(calc.calculate(&negative, today()), -175.0);

        let huge = create_test_task(60, 0.0, 20);
        assert_eq!(calc.calculate(&huge, today()), 250.0);
    }

    #[test]
    fn test_effort_of_minus_one_is_not_finite() {
        let calc = PriorityCalculator::new();
        let task = create_test_task(60, -1.0, 5);

        assert!(!calc.calculate(&task, today()).is_finite());
    }

    #[test]
    fn test_calculate_with_custom_weights() {
        let calc = PriorityCalculator::with_weights(ScoringConfig {
            horizon_days: 10,
            urgency_weight: 1.0,
            importance_weight: 0.0,
            importance_scale: 10.0,
            effort_weight: 0.0,
            dependency_weight: 1.0,
            scale: 10.0,
        });
        let task = create_test_task(5, 3.0, 9).with_dependencies(["x"]);

        // urgency 0.5 + 1 dependency = 1.5, * 10
        assert_eq!(calc.calculate(&task, today()), 15.0);
    }

    #[test]
    fn test_trait_score_matches_calculate() {
        let calc = PriorityCalculator::new();
        let task = create_test_task(3, 4.0, 6).with_dependencies(["a"]);
        let scorer: &dyn TaskScorer = &calc;

        assert_eq!(scorer.score(&task, today()), calc.calculate(&task, today()));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(193.333_333), 193.33);
        assert_eq!(round_to_cents(12.345_6), 12.35);
        assert_eq!(round_to_cents(-1.006), -1.01);
        assert_eq!(round_to_cents(50.0), 50.0);
    }
}
