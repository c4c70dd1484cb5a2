//! Intent dispatcher.
//!
//! Maps a fulfillment call's intent display name onto a closed set of
//! handlers. The table is static; names it does not list go to the
//! fallback handler.

use bible_api::VerseQuery;
use tracing::{debug, info};

use crate::fulfillment::{FulfillmentReply, IntentRequest, Parameters};
use crate::recorder;
use crate::state::AppState;
use crate::verse;

/// Reply of the welcome intent.
pub const WELCOME_TEXT: &str = "Welcome to HopeBot! How can I help you today?";

/// Reply of the fallback intent.
pub const FALLBACK_TEXT: &str = "Sorry, I didn’t get that. Can you try again?";

/// Intents the webhook fulfills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Greets the user.
    Welcome,
    /// Catches everything the agent or this table did not match.
    Fallback,
    /// Stores the user's name.
    StoreUserData,
    /// Looks up a Bible verse.
    BibleVerse,
}

/// Display name to intent. Lookup takes the first matching entry.
pub const INTENT_TABLE: &[(&str, Intent)] = &[
    ("Default Welcome Intent", Intent::Welcome),
    ("Default Fallback Intent", Intent::Fallback),
    ("getUserData", Intent::StoreUserData),
    ("getBibleVerse", Intent::BibleVerse),
];

impl Intent {
    /// Resolve a display name by exact match; unknown names are `Fallback`.
    pub fn from_display_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or(Intent::Fallback)
    }

    /// Resolve a display name, `None` when the table has no entry.
    pub fn lookup(name: &str) -> Option<Self> {
        INTENT_TABLE
            .iter()
            .find(|(display_name, _)| *display_name == name)
            .map(|(_, intent)| *intent)
    }

    /// Display name registered for this intent.
    pub fn display_name(self) -> &'static str {
        INTENT_TABLE
            .iter()
            .find(|(_, intent)| *intent == self)
            .map(|(display_name, _)| *display_name)
            .unwrap_or_default()
    }
}

/// Run the handler for a request. Exactly one handler runs.
pub async fn dispatch(state: &AppState, request: &IntentRequest) -> FulfillmentReply {
    let intent = match Intent::lookup(&request.intent_name) {
        Some(intent) => intent,
        None => {
            info!(intent = %request.intent_name, "No handler for intent, using fallback");
            Intent::Fallback
        }
    };

    debug!(?intent, "Dispatching fulfillment");

    match intent {
        Intent::Welcome => FulfillmentReply::text(WELCOME_TEXT),
        Intent::Fallback => FulfillmentReply::text(FALLBACK_TEXT),
        Intent::StoreUserData => {
            let name = request.parameters.get_string("name").unwrap_or_default();
            recorder::record_name(state.users.as_ref(), &name).await
        }
        Intent::BibleVerse => {
            let query = verse_query(&request.parameters);
            verse::resolve_verse(state.verses.as_ref(), &query).await
        }
    }
}

/// Build a verse query from intent parameters.
///
/// A non-blank `bible_verse` selects the free-text form. Otherwise `book`,
/// `chapter` and `verse` together select the structured form. Anything else
/// is an empty reference. Unfilled parameters arrive as empty strings.
pub fn verse_query(parameters: &Parameters) -> VerseQuery {
    if let Some(text) = parameters
        .get_string("bible_verse")
        .filter(|text| !text.trim().is_empty())
    {
        return VerseQuery::reference(text);
    }

    match (
        parameters.get_string("book"),
        parameters.get_u32("chapter"),
        parameters.get_u32("verse"),
    ) {
        (Some(book), Some(chapter), Some(verse)) => VerseQuery::passage(book, chapter, verse),
        _ => VerseQuery::reference(""),
    }
}
