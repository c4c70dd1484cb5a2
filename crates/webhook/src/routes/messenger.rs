//! Messenger webhook endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use messenger_client::{verify_subscription, SubscriptionQuery, WebhookBatch};
use tracing::{debug, info, warn};

use crate::relay;
use crate::state::AppState;

/// Body of the acknowledgment Messenger expects.
pub const ACK_TEXT: &str = "EVENT_RECEIVED";

/// Subscription handshake: echo the challenge or answer 403.
pub async fn verify(
    State(state): State<AppState>,
    Query(query): Query<SubscriptionQuery>,
) -> Response {
    match verify_subscription(&query, &state.verify_token) {
        Some(challenge) => {
            info!("Messenger webhook verified");
            (StatusCode::OK, challenge).into_response()
        }
        None => {
            warn!(mode = ?query.mode, "Messenger webhook verification failed");
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

/// Event batch: acknowledge at once, relay each message in the background.
pub async fn receive(State(state): State<AppState>, Json(batch): Json<WebhookBatch>) -> Response {
    if !batch.is_page() {
        warn!(object = %batch.object, "Ignoring non-page webhook batch");
        return StatusCode::NOT_FOUND.into_response();
    }

    let events = batch.messaging_events().count();
    let messages = batch.into_text_messages();
    info!(count = messages.len(), "Received Messenger batch");

    let skipped = events - messages.len();
    if skipped > 0 {
        debug!(skipped, "Skipping events without sender ID or text");
    }

    // Handles are dropped: the tasks keep running detached.
    drop(relay::spawn_batch(
        state.detector.clone(),
        state.messenger.clone(),
        messages,
    ));

    (StatusCode::OK, ACK_TEXT).into_response()
}
