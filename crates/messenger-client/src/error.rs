//! Error types for messenger-client.

use thiserror::Error;

/// Errors that can occur when talking to the Messenger Platform.
#[derive(Debug, Error)]
pub enum MessengerError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error object returned by the Graph API.
    #[error("Graph API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Non-success HTTP status without a decodable error body.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
