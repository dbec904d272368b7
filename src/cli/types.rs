//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskscore")]
#[command(about = "Taskscore - task prioritization service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .taskscore/config.yaml)
    #[arg(short, long, global = true, env = "TASKSCORE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP scoring server
    Serve(ServeArgs),

    /// Score and rank tasks from a JSON file or stdin
    Score(ScoreArgs),

    /// Print the sample suggestion payload
    Suggest,

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON file holding a task array or {"tasks": [...]}; `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) instead of today
    #[arg(short, long)]
    pub today: Option<NaiveDate>,

    /// Show every factor behind each score
    #[arg(short, long)]
    pub explain: bool,
}
