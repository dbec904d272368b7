use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use super::task::{Task, SCORE_KEY};

/// A task annotated with its priority score.
///
/// Serializes as the task's record with `score` added, so the response for a
/// task is the request record plus one key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTask {
    pub task: Task,

    /// Score rounded to two decimal places
    pub score: f64,
}

impl Serialize for ScoredTask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.task.record();
        let mut map = serializer.serialize_map(Some(record.len() + 1))?;
        for (key, value) in record {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(SCORE_KEY, &self.score)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoredTask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let mut record = Map::<String, Value>::deserialize(deserializer)?;
        let score = record
            .remove(SCORE_KEY)
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or_else(|| D::Error::missing_field(SCORE_KEY))?;
        let task = Task::from_json(0, Value::Object(record)).map_err(D::Error::custom)?;

        Ok(Self { task, score })
    }
}

impl ScoredTask {
    /// Display band for this task's score
    pub fn priority_level(&self) -> PriorityLevel {
        PriorityLevel::from_score(self.score)
    }
}

/// Intermediate factors behind a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Whole calendar days until the due date (negative when overdue)
    pub days_left: i64,
    /// Deadline pressure in `[0, 1]`
    pub urgency: f64,
    /// Importance normalised by the importance scale (not clamped)
    pub importance_factor: f64,
    /// `1 / (hours + 1)`
    pub effort_factor: f64,
    /// Linear bonus per dependency (not capped)
    pub dependency_factor: f64,
    /// Weighted sum before scaling
    pub raw: f64,
    /// Scaled and rounded score
    pub score: f64,
}

/// Coarse priority band used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// Lowest score considered high priority
    pub const HIGH_THRESHOLD: f64 = 70.0;
    /// Lowest score considered medium priority
    pub const MEDIUM_THRESHOLD: f64 = 40.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_priority_level_thresholds() {
        assert_eq!(PriorityLevel::from_score(193.33), PriorityLevel::High);
        assert_eq!(PriorityLevel::from_score(70.0), PriorityLevel::High);
        assert_eq!(PriorityLevel::from_score(69.99), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::from_score(40.0), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::from_score(39.99), PriorityLevel::Low);
        assert_eq!(PriorityLevel::from_score(-12.5), PriorityLevel::Low);
    }

    #[test]
    fn test_scored_task_serializes_flat() {
        let due = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let scored = ScoredTask {
            task: Task::new("Fix login", due, 2.0, 8),
            score: 50.0,
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["title"], json!("Fix login"));
        assert_eq!(value["due_date"], json!("2025-11-20"));
        assert_eq!(value["score"], json!(50.0));
        assert!(value.get("task").is_none());
        assert!(value.get("dependencies").is_none());

        let decoded: ScoredTask = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, scored);
    }
}
