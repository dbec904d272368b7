//! Placeholder task suggestions.
//!
//! There is no recommendation engine behind this: the payload is a fixed
//! demonstration sample served as-is.

use serde_json::{json, Value};

/// Key the suggestion list is published under
pub const SUGGESTIONS_KEY: &str = "top_3";

/// Fixed demonstration payload for the suggest endpoint
pub fn sample_suggestions() -> Value {
    json!({
        "top_3": [
            {
                "title": "Fix login",
                "due_date": "2025-11-20",
                "estimated_hours": 2,
                "importance": 8,
                "dependencies": []
            }
        ]
    })
}
