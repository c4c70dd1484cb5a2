//! Webhook subscription handshake.
//!
//! When a webhook is registered, Messenger sends a GET request carrying
//! `hub.mode`, `hub.verify_token` and `hub.challenge`. The endpoint proves
//! ownership by echoing the challenge back, but only when the mode is
//! `subscribe` and the token matches the one configured for the app.

use serde::Deserialize;

/// The only mode accepted by the handshake.
pub const SUBSCRIBE_MODE: &str = "subscribe";

/// Query parameters of a subscription handshake request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionQuery {
    /// Expected to be `subscribe`.
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,

    /// The verify token configured in the app dashboard.
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,

    /// Value to echo back on success.
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Check a handshake request against the expected verify token.
///
/// Returns the challenge to echo on success, `None` on any mismatch or
/// missing field.
pub fn verify_subscription(query: &SubscriptionQuery, expected_token: &str) -> Option<String> {
    let mode = query.mode.as_deref()?;
    let token = query.verify_token.as_deref()?;

    if mode != SUBSCRIBE_MODE || token != expected_token {
        return None;
    }

    query.challenge.clone()
}
