//! CLI command implementations.

pub mod config;
pub mod score;
pub mod serve;
pub mod suggest;
