//! Configuration types for messenger-client.

use std::env;
use std::time::Duration;

use crate::error::MessengerError;

/// Default Graph API base URL.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// Default Graph API version.
pub const DEFAULT_API_VERSION: &str = "v18.0";

/// Configuration for talking to the Messenger Platform.
#[derive(Debug, Clone)]
pub struct MessengerConfig {
    /// Base URL of the Graph API (e.g., "https://graph.facebook.com").
    pub graph_url: String,
    /// Graph API version path segment (e.g., "v18.0").
    pub api_version: String,
    /// Page access token, sent as the `access_token` query parameter.
    pub page_access_token: String,
    /// Request timeout for Send API calls.
    pub timeout: Duration,
}

impl MessengerConfig {
    /// Create a new configuration with the given page access token.
    pub fn new(page_access_token: impl Into<String>) -> Self {
        Self {
            page_access_token: page_access_token.into(),
            ..Default::default()
        }
    }

    /// Point the client at a different Graph API host.
    pub fn with_graph_url(mut self, graph_url: impl Into<String>) -> Self {
        self.graph_url = graph_url.into();
        self
    }

    /// Use a different Graph API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MESSENGER_PAGE_ACCESS_TOKEN` - Page access token
    ///
    /// Optional environment variables:
    /// - `MESSENGER_GRAPH_URL` - Graph API URL (default: https://graph.facebook.com)
    /// - `MESSENGER_API_VERSION` - Graph API version (default: v18.0)
    pub fn from_env() -> Result<Self, MessengerError> {
        let page_access_token = env::var("MESSENGER_PAGE_ACCESS_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                MessengerError::Config("MESSENGER_PAGE_ACCESS_TOKEN not set".to_string())
            })?;

        let graph_url =
            env::var("MESSENGER_GRAPH_URL").unwrap_or_else(|_| DEFAULT_GRAPH_URL.to_string());

        let api_version =
            env::var("MESSENGER_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            graph_url,
            api_version,
            page_access_token,
            ..Default::default()
        })
    }

    /// Get the Send API endpoint URL (without the access token).
    pub fn messages_url(&self) -> String {
        format!(
            "{}/{}/me/messages",
            self.graph_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            page_access_token: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}
