use anyhow::Result;
use serde_json::Value;

use crate::cli::output::TableFormatter;
use crate::domain::models::Task;
use crate::services::suggestions::{sample_suggestions, SUGGESTIONS_KEY};

/// Decode the suggestion entries of a payload into tasks
pub fn suggested_tasks(payload: &Value) -> Result<Vec<Task>> {
    let entries = payload[SUGGESTIONS_KEY]
        .as_array()
        .cloned()
        .unwrap_or_default();

    Ok(Task::parse_batch(entries)?)
}

/// Handle suggest command
pub fn execute(json: bool) -> Result<()> {
    let payload = sample_suggestions();

    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let tasks = suggested_tasks(&payload)?;
    println!("Suggested tasks (sample data):");
    println!("{}", TableFormatter::new().format_tasks(&tasks));

    Ok(())
}
