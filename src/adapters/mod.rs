//! Adapters exposing taskscore to the outside world.

pub mod http;
