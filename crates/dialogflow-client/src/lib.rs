//! Dialogflow ES client.
//!
//! Sends user text to an agent's `detectIntent` endpoint and returns the
//! fulfillment text of the matched intent. One session per end user: the
//! caller supplies the session ID (for Messenger, the sender's page-scoped
//! ID) and the session path is built per call.

mod api_types;
mod client;
mod config;
mod error;

pub use api_types::{
    DetectIntentRequest, DetectIntentResponse, MatchedIntent, QueryInput, QueryResult, TextInput,
};
pub use client::DialogflowClient;
pub use config::{DialogflowConfig, DialogflowConfigBuilder};
pub use error::DialogflowError;
