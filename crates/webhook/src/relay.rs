//! Messenger to Dialogflow relay.
//!
//! Each text message in a webhook batch becomes its own task: ask the
//! detector for a reply in the sender's session, then send that reply back
//! to the sender. Tasks are independent; one failing does not touch the
//! others, and the webhook acknowledgment never waits for them.

use std::sync::Arc;

use dialogflow_client::DialogflowError;
use messenger_client::{MessengerError, TextMessage};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::services::{IntentDetector, MessageSender};

/// Errors that can end a single relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The AI platform call failed.
    #[error("intent detection failed: {0}")]
    Detect(#[from] DialogflowError),

    /// The reply could not be delivered.
    #[error("send failed: {0}")]
    Send(#[from] MessengerError),
}

/// Result of relaying a single message.
#[derive(Debug)]
pub enum RelayOutcome {
    /// The reply was delivered.
    Relayed { sender_id: String, reply: String },
    /// Nothing was sent (e.g. the detector had no reply).
    Skipped { sender_id: String, reason: String },
    /// The relay failed and was logged.
    Failed { sender_id: String, error: RelayError },
}

impl RelayOutcome {
    /// Whether a reply reached the user.
    pub fn is_relayed(&self) -> bool {
        matches!(self, RelayOutcome::Relayed { .. })
    }
}

/// Relay one message. The sender ID doubles as the detector session ID.
pub async fn relay_message(
    detector: &dyn IntentDetector,
    messenger: &dyn MessageSender,
    message: TextMessage,
) -> RelayOutcome {
    let TextMessage { sender_id, text } = message;
    debug!(sender = %sender_id, "Relaying message");

    let reply = match detector.detect(&sender_id, &text).await {
        Ok(reply) => reply,
        Err(err) => {
            error!(sender = %sender_id, error = %err, "Intent detection failed");
            return RelayOutcome::Failed {
                sender_id,
                error: err.into(),
            };
        }
    };

    if reply.trim().is_empty() {
        warn!(sender = %sender_id, "No fulfillment text to relay");
        return RelayOutcome::Skipped {
            sender_id,
            reason: "empty fulfillment text".to_string(),
        };
    }

    match messenger.deliver(&sender_id, &reply).await {
        Ok(()) => {
            info!(sender = %sender_id, "Relayed reply");
            RelayOutcome::Relayed { sender_id, reply }
        }
        Err(err) => {
            error!(sender = %sender_id, error = %err, "Failed to send reply");
            RelayOutcome::Failed {
                sender_id,
                error: err.into(),
            }
        }
    }
}

/// Spawn one relay task per message.
///
/// The handles are returned for callers that want to await completion; the
/// webhook route drops them.
pub fn spawn_batch(
    detector: Arc<dyn IntentDetector>,
    messenger: Arc<dyn MessageSender>,
    messages: Vec<TextMessage>,
) -> Vec<JoinHandle<RelayOutcome>> {
    messages
        .into_iter()
        .map(|message| {
            let detector = Arc::clone(&detector);
            let messenger = Arc::clone(&messenger);
            tokio::spawn(async move {
                relay_message(detector.as_ref(), messenger.as_ref(), message).await
            })
        })
        .collect()
}
