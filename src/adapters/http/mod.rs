//! HTTP adapter.
//!
//! Serves batch task analysis and the placeholder suggestion feed over
//! axum.

pub mod tasks_http;

pub use tasks_http::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, TasksHttpServer};
