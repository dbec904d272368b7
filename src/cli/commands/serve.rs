use anyhow::Result;

use crate::adapters::http::TasksHttpServer;
use crate::cli::types::ServeArgs;
use crate::domain::models::{Config, ServerConfig};
use crate::infrastructure::logging::LoggerImpl;
use crate::services::TaskRanker;

/// Apply command-line overrides on top of the loaded server config
pub fn resolve_server_config(config: &Config, args: &ServeArgs) -> ServerConfig {
    let mut server = config.server.clone();
    if let Some(host) = &args.host {
        server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    server
}

/// Handle serve command: run until Ctrl-C
pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
    let _logger = LoggerImpl::init(&config.logging)?;

    let server_config = resolve_server_config(&config, &args);
    let ranker = TaskRanker::from_config(&config.scoring);
    let server = TasksHttpServer::new(ranker, server_config);

    server
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {e}"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
