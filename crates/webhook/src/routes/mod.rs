//! Route handlers for the webhook server.

pub mod bible;
pub mod fulfillment;
pub mod health;
pub mod messenger;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Dialogflow fulfillment
        .route("/webhook", post(fulfillment::fulfill))
        // Messenger handshake and events
        .route(
            "/messenger",
            get(messenger::verify).post(messenger::receive),
        )
        // Direct verse lookup
        .route("/bible/:book/:chapter/:verse", get(bible::passage))
        // Health check
        .route("/health", get(health::health))
}
