//! Dialogflow fulfillment endpoint.

use axum::extract::State;
use axum::Json;

use crate::dispatcher;
use crate::fulfillment::{IntentRequest, WebhookRequest, WebhookResponse};
use crate::state::AppState;

/// Handle a fulfillment call. Always answers 200 with a reply text.
pub async fn fulfill(
    State(state): State<AppState>,
    Json(request): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    let request = IntentRequest::from(request);
    let reply = dispatcher::dispatch(&state, &request).await;
    Json(reply.into_response(state.source.clone()))
}
