//! Error handling module for the govalt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. Lexical problems in the
//! scanned expression are not errors here; they are reported as diagnostics
//! and only surface as [`GovaltError::Diagnostics`] when `check` finishes.

use thiserror::Error;

/// Main error type for the govalt CLI application.
#[derive(Error, Debug)]
pub enum GovaltError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading an input file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The checked expression produced diagnostics.
    #[error("{count} problem(s) found")]
    Diagnostics {
        /// Number of diagnostics reported.
        count: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a diagnostic span does not fit its source.
    #[error("Source error: {0}")]
    Source(#[from] goval_util::SourceError),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GovaltError {
    /// Process exit code for this error.
    ///
    /// Diagnostics exit with 1 so scripts can tell a dirty expression
    /// apart from a tool failure, which exits with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            GovaltError::Diagnostics { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type alias using GovaltError.
pub type Result<T> = std::result::Result<T, GovaltError>;
