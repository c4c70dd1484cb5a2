//! Error types for verse lookups.

use thiserror::Error;

/// Errors that can occur while looking up a verse.
#[derive(Debug, Error)]
pub enum BibleError {
    /// The query had nothing to look up.
    #[error("empty verse query")]
    EmptyQuery,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("Bible API returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
