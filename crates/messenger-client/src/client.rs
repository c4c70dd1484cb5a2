//! Messenger Send API client.

use reqwest::Client;
use tracing::debug;

use crate::config::MessengerConfig;
use crate::error::MessengerError;
use crate::types::{GraphErrorResponse, SendRequest, SendResult};

/// Client for the Messenger Send API.
#[derive(Clone)]
pub struct MessengerClient {
    http: Client,
    config: MessengerConfig,
}

impl MessengerClient {
    /// Create a new client.
    pub fn new(config: MessengerConfig) -> Result<Self, MessengerError> {
        if config.page_access_token.trim().is_empty() {
            return Err(MessengerError::Config(
                "page access token is empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(MessengerError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`MessengerConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, MessengerError> {
        Self::new(MessengerConfig::from_env()?)
    }

    /// Send a message using the full [`SendRequest`] structure.
    pub async fn send(&self, request: &SendRequest) -> Result<SendResult, MessengerError> {
        let url = self.config.messages_url();
        debug!(recipient = %request.recipient.id, "Send API call: {}", url);

        let response = self
            .http
            .post(&url)
            .query(&[("access_token", self.config.page_access_token.as_str())])
            .json(request)
            .send()
            .await
            .map_err(MessengerError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<GraphErrorResponse>(&body) {
                Ok(parsed) => MessengerError::Api {
                    code: parsed.error.code,
                    message: parsed.error.message,
                },
                Err(_) => MessengerError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        response.json().await.map_err(MessengerError::Http)
    }

    /// Send a text reply to a page-scoped user ID.
    pub async fn send_text(
        &self,
        recipient_id: &str,
        text: &str,
    ) -> Result<SendResult, MessengerError> {
        self.send(&SendRequest::text(recipient_id, text)).await
    }

    /// Get the configuration.
    pub fn config(&self) -> &MessengerConfig {
        &self.config
    }
}

impl std::fmt::Debug for MessengerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessengerClient")
            .field("graph_url", &self.config.graph_url)
            .field("api_version", &self.config.api_version)
            .finish_non_exhaustive()
    }
}
