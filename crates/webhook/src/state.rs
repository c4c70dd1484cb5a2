//! Application state shared across handlers.

use std::sync::Arc;

use crate::services::{IntentDetector, MessageSender, UserStore, VerseLookup};

/// Shared application state.
///
/// Every client is built once at startup; cloning the state only bumps
/// reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Bible verse lookup service.
    pub verses: Arc<dyn VerseLookup>,
    /// Store for submitted names.
    pub users: Arc<dyn UserStore>,
    /// Conversational AI used by the Messenger relay.
    pub detector: Arc<dyn IntentDetector>,
    /// Messenger Send API.
    pub messenger: Arc<dyn MessageSender>,
    /// Token expected in the Messenger subscription handshake.
    pub verify_token: String,
    /// Optional `source` reported in fulfillment replies.
    pub source: Option<String>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        verses: Arc<dyn VerseLookup>,
        users: Arc<dyn UserStore>,
        detector: Arc<dyn IntentDetector>,
        messenger: Arc<dyn MessageSender>,
        verify_token: impl Into<String>,
    ) -> Self {
        Self {
            verses,
            users,
            detector,
            messenger,
            verify_token: verify_token.into(),
            source: None,
        }
    }

    /// Report `source` in every fulfillment reply.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }
}
