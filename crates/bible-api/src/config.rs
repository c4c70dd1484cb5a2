//! Configuration for the verse lookup client.

use std::env;
use std::time::Duration;

/// Default service URL.
pub const DEFAULT_API_URL: &str = "https://bible-api.com";

/// Translation shown when the service does not name one.
pub const DEFAULT_TRANSLATION: &str = "NIV";

/// Configuration for [`crate::BibleClient`].
#[derive(Debug, Clone)]
pub struct BibleConfig {
    /// Base URL of the lookup service.
    pub api_url: String,

    /// Translation ID requested from the service (e.g. "kjv", "web").
    /// `None` lets the service pick its default.
    pub translation: Option<String>,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for BibleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            translation: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl BibleConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIBLE_API_URL` - Service URL (default: https://bible-api.com)
    /// - `BIBLE_TRANSLATION` - Translation ID to request (default: service default)
    pub fn from_env() -> Self {
        let api_url = env::var("BIBLE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let translation = env::var("BIBLE_TRANSLATION")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            api_url,
            translation,
            ..Default::default()
        }
    }

    /// Create a new config builder.
    pub fn builder() -> BibleConfigBuilder {
        BibleConfigBuilder::default()
    }
}

/// Builder for BibleConfig.
#[derive(Debug, Default)]
pub struct BibleConfigBuilder {
    config: BibleConfig,
}

impl BibleConfigBuilder {
    /// Set the service URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the translation ID.
    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.config.translation = Some(translation.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> BibleConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BibleConfig::default();
        assert_eq!(config.api_url, "https://bible-api.com");
        assert!(config.translation.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_all_options() {
        let config = BibleConfig::builder()
            .api_url("http://localhost:7000")
            .translation("kjv")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.api_url, "http://localhost:7000");
        assert_eq!(config.translation.as_deref(), Some("kjv"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_env_scenarios() {
        env::remove_var("BIBLE_API_URL");
        env::remove_var("BIBLE_TRANSLATION");
        let config = BibleConfig::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.translation.is_none());

        env::set_var("BIBLE_API_URL", "http://bible.test");
        env::set_var("BIBLE_TRANSLATION", " web ");
        let config = BibleConfig::from_env();
        assert_eq!(config.api_url, "http://bible.test");
        assert_eq!(config.translation.as_deref(), Some("web"));

        env::remove_var("BIBLE_API_URL");
        env::remove_var("BIBLE_TRANSLATION");
    }
}
