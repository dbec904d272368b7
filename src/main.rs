//! Taskscore CLI entry point.

use clap::Parser;

use taskscore::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = taskscore::cli::run(cli).await {
        taskscore::cli::handle_error(err, json);
    }
}
