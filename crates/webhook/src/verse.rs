//! Bible verse resolver.

use bible_api::VerseQuery;
use tracing::{debug, error, info};

use crate::fulfillment::FulfillmentReply;
use crate::services::VerseLookup;

/// Reply when the query has nothing to look up.
pub const NO_REFERENCE_TEXT: &str =
    "I didn't receive a Bible verse to look up. Please try again.";

/// Reply when the service answered without verse text.
pub const NOT_FOUND_TEXT: &str = "Sorry, I couldn't find that verse. Please try another one.";

/// Reply when the lookup itself failed.
pub const LOOKUP_ERROR_TEXT: &str =
    "Sorry, I couldn't retrieve that Bible verse due to an error. Please try again later.";

/// Resolve a query into display text.
///
/// Never fails: blank queries, missing verses and lookup errors each map to
/// a fixed reply. Blank queries make no outbound call.
pub async fn resolve_verse(verses: &dyn VerseLookup, query: &VerseQuery) -> FulfillmentReply {
    if query.is_blank() {
        debug!("Verse lookup requested without a reference");
        return FulfillmentReply::text(NO_REFERENCE_TEXT);
    }

    match verses.lookup(query).await {
        Ok(reply) => match reply.into_result(query) {
            Some(verse) => FulfillmentReply::text(verse.to_string()),
            None => {
                info!(query = %query, "Verse lookup returned no text");
                FulfillmentReply::text(NOT_FOUND_TEXT)
            }
        },
        Err(err) => {
            error!(query = %query, error = %err, "Verse lookup failed");
            FulfillmentReply::text(LOOKUP_ERROR_TEXT)
        }
    }
}
