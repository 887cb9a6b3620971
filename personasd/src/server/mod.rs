//! HTTP server for the personas daemon
//!
//! This module implements the Axum-based HTTP server that exposes the
//! personas CRUD API over TCP.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app, run_server};
