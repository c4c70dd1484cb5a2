//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Default bind address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Default SQLite database URL.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:hopebot.db?mode=rwc";

/// Webhook server configuration.
///
/// Client credentials (Dialogflow, Messenger Send API, Bible API) are read
/// by the client crates themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Token expected in the Messenger subscription handshake.
    pub verify_token: String,
    /// Optional `source` reported in fulfillment replies.
    pub source: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `WEBHOOK_ADDR` | Server bind address | `0.0.0.0:3000` |
    /// | `PORT` | Overrides the port of the bind address | (unset) |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:hopebot.db?mode=rwc` |
    /// | `MESSENGER_VERIFY_TOKEN` | Handshake verify token | (required) |
    /// | `FULFILLMENT_SOURCE` | `source` field of fulfillment replies | (unset) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut addr: SocketAddr = var("WEBHOOK_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        if let Some(port) = var("PORT") {
            let port = port.trim().parse().map_err(|_| ConfigError::InvalidPort)?;
            addr.set_port(port);
        }

        let database_url =
            var("SQLITE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let verify_token = var("MESSENGER_VERIFY_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVerifyToken)?;

        let source = var("FULFILLMENT_SOURCE").filter(|v| !v.trim().is_empty());

        Ok(Self {
            addr,
            database_url,
            verify_token,
            source,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid WEBHOOK_ADDR format")]
    InvalidAddr,

    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("MESSENGER_VERIFY_TOKEN environment variable is required")]
    MissingVerifyToken,
}
