//! Types for sending messages through the Send API.

use serde::{Deserialize, Serialize};

/// Body of a Send API request.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequest {
    /// Who receives the message.
    pub recipient: Recipient,

    /// The message content.
    pub message: OutgoingMessage,

    /// Messaging type; replies to user messages use `RESPONSE`.
    pub messaging_type: MessagingType,
}

impl SendRequest {
    /// Create a text reply to a page-scoped user ID.
    pub fn text(recipient_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: Recipient {
                id: recipient_id.into(),
            },
            message: OutgoingMessage { text: text.into() },
            messaging_type: MessagingType::Response,
        }
    }
}

/// A message recipient.
#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
    /// Page-scoped user ID.
    pub id: String,
}

/// Outgoing message content.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessage {
    /// The message text.
    pub text: String,
}

/// Messaging type of a Send API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessagingType {
    /// Reply to a user message.
    Response,
}

/// Result of sending a message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendResult {
    /// Page-scoped ID of the recipient.
    #[serde(default)]
    pub recipient_id: String,

    /// ID of the sent message.
    #[serde(default)]
    pub message_id: String,
}

/// Error envelope returned by the Graph API.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorResponse {
    /// The error details.
    pub error: GraphError,
}

/// Graph API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphError {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Numeric error code.
    #[serde(default)]
    pub code: i64,
}
