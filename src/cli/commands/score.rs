use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use crate::cli::output::TableFormatter;
use crate::cli::types::ScoreArgs;
use crate::domain::models::{Config, ScoredTask, Task};
use crate::services::task_ranker::{self, TaskRanker};

/// Accepted input shapes: a bare array or the HTTP request envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskListInput {
    Envelope {
        #[serde(default)]
        tasks: Vec<Value>,
    },
    Bare(Vec<Value>),
}

impl TaskListInput {
    fn into_values(self) -> Vec<Value> {
        match self {
            Self::Envelope { tasks } | Self::Bare(tasks) => tasks,
        }
    }
}

/// Decode a task list from JSON text
pub fn parse_task_list(text: &str) -> Result<Vec<Task>> {
    let input: TaskListInput = serde_json::from_str(text)
        .context("Input must be a JSON array of tasks or an object with a \"tasks\" array")?;

    Ok(Task::parse_batch(input.into_values())?)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tasks from {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read tasks from stdin")?;
            Ok(buffer)
        }
    }
}

/// Handle score command
pub fn execute(args: ScoreArgs, config: &Config, json: bool) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let tasks = parse_task_list(&text)?;

    let ranker = TaskRanker::from_config(&config.scoring);
    let today = args.today.unwrap_or_else(task_ranker::today);
    let ranked = ranker.rank(tasks, today)?;

    tracing::debug!(count = ranked.len(), %today, "scored tasks");

    if json {
        let output = if args.explain {
            let rows: Vec<Value> = ranked
                .iter()
                .map(|scored| {
                    let mut row = serde_json::to_value(scored)?;
                    row["breakdown"] = serde_json::to_value(ranker.explain(&scored.task, today))?;
                    Ok(row)
                })
                .collect::<Result<_, serde_json::Error>>()?;
            serde_json::json!({ "tasks": rows })
        } else {
            serde_json::json!({ "tasks": ranked })
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No tasks provided for analysis.");
        return Ok(());
    }

    let formatter = TableFormatter::new();
    if args.explain {
        let rows: Vec<(ScoredTask, _)> = ranked
            .into_iter()
            .map(|scored| {
                let breakdown = ranker.explain(&scored.task, today);
                (scored, breakdown)
            })
            .collect();
        println!("{}", formatter.format_breakdowns(&rows));
        println!("\nScored {} task(s) as of {}", rows.len(), today);
    } else {
        println!("{}", formatter.format_ranked(&ranked));
        println!("\nScored {} task(s) as of {}", ranked.len(), today);
    }

    Ok(())
}
