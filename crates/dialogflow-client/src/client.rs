//! Dialogflow `detectIntent` client.

use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiErrorResponse, DetectIntentRequest, DetectIntentResponse};
use crate::config::DialogflowConfig;
use crate::error::DialogflowError;

/// Client for a single Dialogflow ES agent.
///
/// Built once at startup and shared; only the session path varies per call.
#[derive(Clone)]
pub struct DialogflowClient {
    http: Client,
    config: DialogflowConfig,
}

impl DialogflowClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DialogflowConfig) -> Result<Self, DialogflowError> {
        if config.project_id.trim().is_empty() {
            return Err(DialogflowError::Configuration(
                "project_id is empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DialogflowError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        debug!(project = %config.project_id, "DialogflowClient initialized");

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`DialogflowConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, DialogflowError> {
        Self::new(DialogflowConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &DialogflowConfig {
        &self.config
    }

    /// Send a text query in the given session.
    pub async fn detect_intent(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<DetectIntentResponse, DialogflowError> {
        let url = self.config.detect_intent_url(session_id);
        let request = DetectIntentRequest::text(text, &self.config.language_code);

        debug!(session = %session_id, "Sending detectIntent request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            let message = match serde_json::from_str::<ApiErrorResponse>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => error_text,
            };

            return Err(DialogflowError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let detected: DetectIntentResponse = serde_json::from_slice(&body)?;

        if detected.fulfillment_text().is_empty() {
            warn!(session = %session_id, "detectIntent returned no fulfillment text");
        }

        Ok(detected)
    }

    /// Send a text query and return only the fulfillment text.
    pub async fn fulfillment_text(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<String, DialogflowError> {
        let response = self.detect_intent(session_id, text).await?;
        Ok(response.fulfillment_text().to_string())
    }
}

impl std::fmt::Debug for DialogflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogflowClient")
            .field("api_url", &self.config.api_url)
            .field("project_id", &self.config.project_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_project_rejected() {
        let result = DialogflowClient::new(DialogflowConfig::default());
        assert!(matches!(result, Err(DialogflowError::Configuration(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = DialogflowConfig::builder()
            .project_id("hopebot")
            .access_token("secret-token")
            .build();
        let client = DialogflowClient::new(config).unwrap();

        let debug = format!("{:?}", client);
        assert!(debug.contains("hopebot"));
        assert!(!debug.contains("secret-token"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_http_error() {
        let config = DialogflowConfig::builder()
            .api_url("http://127.0.0.1:9")
            .project_id("hopebot")
            .access_token("token")
            .build();
        let client = DialogflowClient::new(config).unwrap();

        let result = client.detect_intent("session", "hello").await;
        assert!(matches!(result, Err(DialogflowError::Http(_))));
    }

    #[tokio::test]
    #[ignore] // Requires network and DIALOGFLOW_* credentials
    async fn test_detect_intent_live() {
        let _ = dotenvy::dotenv();
        let _ = tracing_subscriber::fmt::try_init();

        let client = DialogflowClient::from_env().unwrap();
        let text = client.fulfillment_text("hopebot-test", "hi").await.unwrap();
        assert!(!text.is_empty());
    }
}
