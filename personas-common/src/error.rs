//! Error types for the personas daemon and CLI
//!
//! This module provides the error type hierarchy for the personas system:
//! - AppError: Top-level application errors
//! - ServerError: HTTP server startup errors
//! - ConfigError: Configuration loading/validation errors (re-exported from config module)
//! - ModelError: Request body parsing errors (re-exported from model module)

use std::io;

pub use crate::config::ConfigError;
pub use crate::model::ModelError;

// ============================================================================
// Top-Level Application Error
// ============================================================================

/// Top-level application error type
///
/// This is the main error type used throughout the daemon. It wraps
/// all lower-level errors and provides context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Request body parsing error
    #[error("Invalid request body: {0}")]
    Model(#[from] ModelError),

    /// Server error
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

// ============================================================================
// Server Error
// ============================================================================

/// HTTP server errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind the TCP listener
    #[error("Failed to bind to {addr}: {source}")]
    BindFailed {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Server startup failed
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

// ============================================================================
// Result Type Aliases
// ============================================================================

/// Result type using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type using ServerError
pub type ServerResult<T> = std::result::Result<T, ServerError>;
