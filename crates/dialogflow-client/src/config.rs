//! Configuration for DialogflowClient.

use std::env;
use std::time::Duration;

use crate::error::DialogflowError;

/// Configuration for [`crate::DialogflowClient`].
#[derive(Debug, Clone)]
pub struct DialogflowConfig {
    /// Dialogflow API URL.
    pub api_url: String,

    /// Google Cloud project that owns the agent.
    pub project_id: String,

    /// OAuth access token for the agent's service account.
    pub access_token: String,

    /// Language code sent with every query.
    pub language_code: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for DialogflowConfig {
    fn default() -> Self {
        Self {
            api_url: "https://dialogflow.googleapis.com".to_string(),
            project_id: String::new(),
            access_token: String::new(),
            language_code: "en".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl DialogflowConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `DIALOGFLOW_PROJECT_ID` - Project that owns the agent
    /// - `DIALOGFLOW_ACCESS_TOKEN` - OAuth bearer token
    ///
    /// Optional environment variables:
    /// - `DIALOGFLOW_API_URL` - API URL (default: https://dialogflow.googleapis.com)
    /// - `DIALOGFLOW_LANGUAGE_CODE` - Query language (default: en)
    pub fn from_env() -> Result<Self, DialogflowError> {
        let project_id = required("DIALOGFLOW_PROJECT_ID")?;
        let access_token = required("DIALOGFLOW_ACCESS_TOKEN")?;

        let api_url = env::var("DIALOGFLOW_API_URL")
            .unwrap_or_else(|_| "https://dialogflow.googleapis.com".to_string());

        let language_code =
            env::var("DIALOGFLOW_LANGUAGE_CODE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            api_url,
            project_id,
            access_token,
            language_code,
            ..Default::default()
        })
    }

    /// Create a new config builder.
    pub fn builder() -> DialogflowConfigBuilder {
        DialogflowConfigBuilder::default()
    }

    /// Session path for a session ID.
    pub fn session_path(&self, session_id: &str) -> String {
        format!(
            "projects/{}/agent/sessions/{}",
            self.project_id,
            urlencoding::encode(session_id)
        )
    }

    /// Full `detectIntent` URL for a session ID.
    pub fn detect_intent_url(&self, session_id: &str) -> String {
        format!(
            "{}/v2/{}:detectIntent",
            self.api_url.trim_end_matches('/'),
            self.session_path(session_id)
        )
    }
}

fn required(name: &str) -> Result<String, DialogflowError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DialogflowError::Configuration(format!("{} not set", name)))
}

/// Builder for DialogflowConfig.
#[derive(Debug, Default)]
pub struct DialogflowConfigBuilder {
    config: DialogflowConfig,
}

impl DialogflowConfigBuilder {
    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the project ID.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.config.project_id = project_id.into();
        self
    }

    /// Set the access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = token.into();
        self
    }

    /// Set the language code.
    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.config.language_code = code.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> DialogflowConfig {
        self.config
    }
}
