//! Error types for Dialogflow calls.

use thiserror::Error;

/// Errors that can occur while calling Dialogflow.
#[derive(Debug, Error)]
pub enum DialogflowError {
    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}
