use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::errors::TaskError;

/// Wire and display format for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Key the computed score is published under.
pub const SCORE_KEY: &str = "score";

/// A task submitted for prioritization.
///
/// Only `due_date`, `estimated_hours`, `importance` and the number of
/// `dependencies` feed the score. The task also keeps the JSON object it was
/// decoded from and serializes back to exactly that object, so numbers keep
/// their original form, absent optional keys stay absent and unknown keys
/// pass through.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    title: String,
    due_date: NaiveDate,
    estimated_hours: f64,
    importance: f64,
    dependencies: Vec<String>,
    record: Map<String, Value>,
}

/// Typed view of the scored keys of a task record
#[derive(Deserialize)]
#[serde(rename = "Task")]
struct TaskFields {
    title: String,
    due_date: NaiveDate,
    estimated_hours: f64,
    importance: f64,
    #[serde(default)]
    dependencies: Vec<String>,
}

impl Task {
    /// Create a task with no dependencies
    pub fn new(
        title: impl Into<String>,
        due_date: NaiveDate,
        estimated_hours: f64,
        importance: impl Into<f64>,
    ) -> Self {
        let title = title.into();
        let importance = importance.into();

        let mut record = Map::new();
        record.insert("title".to_string(), Value::from(title.as_str()));
        record.insert(
            "due_date".to_string(),
            Value::from(due_date.format(DUE_DATE_FORMAT).to_string()),
        );
        record.insert("estimated_hours".to_string(), Value::from(estimated_hours));
        record.insert("importance".to_string(), Value::from(importance));

        Self {
            title,
            due_date,
            estimated_hours,
            importance,
            dependencies: Vec::new(),
            record,
        }
    }

    /// Builder-style setter for dependencies
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self.record
            .insert("dependencies".to_string(), Value::from(self.dependencies.clone()));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub const fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    /// Stated importance, expected on a 0-10 scale but not clamped
    pub const fn importance(&self) -> f64 {
        self.importance
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Number of dependencies attached to this task
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    /// The JSON object this task serializes to
    pub const fn record(&self) -> &Map<String, Value> {
        &self.record
    }

    /// Decode one task record from a JSON value.
    ///
    /// `index` is the position of the record in its batch and is carried in
    /// the error so callers can point at the offending entry. A `due_date`
    /// that is a string but not a calendar date is reported separately from
    /// other shape problems. A `score` key sent by the client is dropped; the
    /// computed score takes its place.
    pub fn from_json(index: usize, value: Value) -> Result<Self, TaskError> {
        let mut record = match value {
            Value::Object(record) => record,
            other => {
                return Err(TaskError::NotAnObject {
                    index,
                    found: json_type_name(&other),
                })
            }
        };

        if let Some(Value::String(raw)) = record.get("due_date") {
            if NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).is_err() {
                return Err(TaskError::InvalidDueDate {
                    index,
                    value: raw.clone(),
                });
            }
        }

        record.remove(SCORE_KEY);

        let fields: TaskFields = serde_json::from_value(Value::Object(record.clone()))
            .map_err(|source| TaskError::Invalid { index, source })?;

        Ok(Self {
            title: fields.title,
            due_date: fields.due_date,
            estimated_hours: fields.estimated_hours,
            importance: fields.importance,
            dependencies: fields.dependencies,
            record,
        })
    }

    /// Decode a batch of task records, stopping at the first bad one
    pub fn parse_batch(values: Vec<Value>) -> Result<Vec<Self>, TaskError> {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Self::from_json(index, value))
            .collect()
    }
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(0, value).map_err(serde::de::Error::custom)
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
