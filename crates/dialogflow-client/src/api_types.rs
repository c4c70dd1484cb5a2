//! Dialogflow ES v2 request and response types.

use serde::{Deserialize, Serialize};

/// Body of a `detectIntent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentRequest {
    /// The input to match.
    pub query_input: QueryInput,
}

impl DetectIntentRequest {
    /// Build a text query.
    pub fn text(text: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            query_input: QueryInput {
                text: TextInput {
                    text: text.into(),
                    language_code: language_code.into(),
                },
            },
        }
    }
}

/// Query input wrapper.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInput {
    /// Text input.
    pub text: TextInput,
}

/// Natural language text input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    /// The user's utterance.
    pub text: String,
    /// Language of the utterance, e.g. "en".
    pub language_code: String,
}

/// Reply of a `detectIntent` call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentResponse {
    /// Unique response ID.
    #[serde(default)]
    pub response_id: Option<String>,

    /// Result of the conversational query.
    #[serde(default)]
    pub query_result: Option<QueryResult>,
}

impl DetectIntentResponse {
    /// Fulfillment text, empty when the agent produced none.
    pub fn fulfillment_text(&self) -> &str {
        self.query_result
            .as_ref()
            .and_then(|r| r.fulfillment_text.as_deref())
            .unwrap_or_default()
    }
}

/// The matched intent and its fulfillment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Original query text.
    #[serde(default)]
    pub query_text: Option<String>,

    /// Text to send back to the user.
    #[serde(default)]
    pub fulfillment_text: Option<String>,

    /// Matched intent.
    #[serde(default)]
    pub intent: Option<MatchedIntent>,
}

/// The intent Dialogflow matched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedIntent {
    /// Intent display name.
    #[serde(default)]
    pub display_name: String,
}

/// Google API error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorBody,
}

/// Google API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}
