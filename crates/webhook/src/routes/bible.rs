//! Direct verse lookup by book, chapter and verse.

use axum::extract::{Path, State};
use axum::Json;
use bible_api::VerseQuery;

use crate::fulfillment::WebhookResponse;
use crate::state::AppState;
use crate::verse;

/// `GET /bible/:book/:chapter/:verse`.
pub async fn passage(
    State(state): State<AppState>,
    Path((book, chapter, verse_number)): Path<(String, u32, u32)>,
) -> Json<WebhookResponse> {
    let query = VerseQuery::passage(book, chapter, verse_number);
    let reply = verse::resolve_verse(state.verses.as_ref(), &query).await;
    Json(reply.into_response(state.source.clone()))
}
