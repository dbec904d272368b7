//! Tasks HTTP Server.
//!
//! Endpoints:
//! - `POST /api/tasks/analyze/` scores a batch and returns it highest first
//! - `GET|POST /api/tasks/suggest/` returns the fixed sample payload
//! - `GET /health`
//!
//! Every client error is a 400 with an [`ErrorResponse`] body.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::errors::{RankError, TaskError};
use crate::domain::models::{ScoredTask, ServerConfig, Task};
use crate::services::{sample_suggestions, TaskRanker};

/// Batch analysis request body.
///
/// Task records stay raw here so each one can be validated individually.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub tasks: Vec<Value>,
}

/// Batch analysis response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub tasks: Vec<ScoredTask>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(code: &str, error: impl ToString) -> ApiError {
    let error = error.to_string();
    tracing::warn!(code, %error, "rejected request");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error,
            code: code.to_string(),
        }),
    )
}

/// Shared state for the tasks HTTP server.
struct AppState {
    ranker: TaskRanker,
}

/// Tasks HTTP Server.
pub struct TasksHttpServer {
    config: ServerConfig,
    ranker: TaskRanker,
}

impl TasksHttpServer {
    pub const fn new(ranker: TaskRanker, config: ServerConfig) -> Self {
        Self { config, ranker }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            ranker: self.ranker.clone(),
        });

        let app = Router::new()
            .route("/api/tasks/analyze/", post(analyze_tasks))
            .route("/api/tasks/analyze", post(analyze_tasks))
            .route("/api/tasks/suggest/", get(suggest_tasks).post(suggest_tasks))
            .route("/api/tasks/suggest", get(suggest_tasks).post(suggest_tasks))
            .route("/health", get(health_check))
            .with_state(state);

        if self.config.enable_cors {
            app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.config.host, self.config.port).parse()
    }

    /// Start the server.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "taskscore HTTP server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("taskscore HTTP server stopped");
        Ok(())
    }
}

// Handler functions

async fn health_check() -> &'static str {
    "OK"
}

async fn analyze_tasks(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|e| bad_request("INVALID_JSON", e))?;

    let tasks = Task::parse_batch(request.tasks).map_err(|e: TaskError| bad_request(e.code(), e))?;

    let ranked = state
        .ranker
        .rank_today(tasks)
        .map_err(|e: RankError| bad_request(e.code(), e))?;

    tracing::info!(count = ranked.len(), "analyzed task batch");
    Ok(Json(AnalyzeResponse { tasks: ranked }))
}

async fn suggest_tasks() -> Json<Value> {
    Json(sample_suggestions())
}
