//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, ScoreArgs, ServeArgs};

use anyhow::Result;

use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;

/// Load configuration and run the selected command
pub async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load_with(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Score(args) => {
            let _logger = LoggerImpl::init_stderr(&config.logging.level)?;
            commands::score::execute(args, &config, cli.json)
        }
        Commands::Suggest => commands::suggest::execute(cli.json),
        Commands::Config => commands::config::execute(&config, cli.json),
    }
}

/// Print an error the way the user asked for and exit non-zero
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        eprintln!(
            "{}",
            serde_json::json!({ "error": err.to_string(), "causes": &chain[1..] })
        );
    } else {
        eprintln!("Error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }
    }
    std::process::exit(1);
}
