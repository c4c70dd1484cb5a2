//! Fulfillment webhook request and reply types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound fulfillment call from Dialogflow.
///
/// Only `queryResult.intent.displayName` is required; a payload without it
/// is rejected by the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Unique ID of the call.
    #[serde(default)]
    pub response_id: Option<String>,

    /// Session path of the conversation.
    #[serde(default)]
    pub session: Option<String>,

    /// The matched intent and its parameters.
    pub query_result: QueryResult,
}

/// Query result section of a fulfillment call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// The user's utterance.
    #[serde(default)]
    pub query_text: Option<String>,

    /// Matched intent.
    pub intent: IntentRef,

    /// Extracted parameters.
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}

/// Reference to the matched intent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRef {
    /// Intent display name, the dispatch key.
    pub display_name: String,
}

/// Reply to a fulfillment call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Text shown or spoken to the user.
    pub fulfillment_text: String,

    /// Identifies this webhook, when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Decoded fulfillment request handed to the dispatcher.
#[derive(Debug, Clone)]
pub struct IntentRequest {
    /// Intent display name.
    pub intent_name: String,
    /// Intent parameters.
    pub parameters: Parameters,
}

impl IntentRequest {
    /// Create a request from a name and parameter object.
    pub fn new(intent_name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            intent_name: intent_name.into(),
            parameters: Parameters::new(parameters),
        }
    }
}

impl From<WebhookRequest> for IntentRequest {
    fn from(request: WebhookRequest) -> Self {
        let QueryResult {
            intent, parameters, ..
        } = request.query_result;
        Self::new(intent.display_name, parameters.unwrap_or_default())
    }
}

/// Intent parameters with lenient accessors.
///
/// Dialogflow sends `@sys.number` values as JSON numbers (often floats such
/// as `3.0`) and everything else as strings; the accessors accept both.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: Map<String, Value>,
}

impl Parameters {
    /// Wrap a parameter object.
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Get a parameter as a string. Numbers are rendered without a
    /// fractional part when they are whole.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(match whole_number(n) {
                Some(whole) => whole.to_string(),
                None => n.to_string(),
            }),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Get a parameter as a positive integer.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        match self.values.get(key)? {
            Value::Number(n) => whole_number(n).and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn whole_number(n: &serde_json::Number) -> Option<u64> {
    if let Some(v) = n.as_u64() {
        return Some(v);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64)
}

/// Text reply produced by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulfillmentReply {
    /// Reply text.
    pub text: String,
}

impl FulfillmentReply {
    /// Create a reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Convert to the wire reply.
    pub fn into_response(self, source: Option<String>) -> WebhookResponse {
        WebhookResponse {
            fulfillment_text: self.text,
            source,
        }
    }
}
