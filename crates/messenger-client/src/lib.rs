//! Messenger Platform client library.
//!
//! This crate provides a Rust client for the parts of the Messenger
//! Platform a page bot needs:
//!
//! - Sending text replies through the Send API
//! - Decoding inbound webhook batches
//! - Checking the webhook subscription handshake
//!
//! # Example
//!
//! ```no_run
//! use messenger_client::{MessengerClient, MessengerConfig};
//!
//! # async fn example() -> Result<(), messenger_client::MessengerError> {
//! let config = MessengerConfig::new("page-access-token");
//! let client = MessengerClient::new(config)?;
//!
//! let result = client.send_text("1234567890", "Hello!").await?;
//! println!("Sent message {}", result.message_id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod verify;

pub use client::MessengerClient;
pub use config::MessengerConfig;
pub use error::MessengerError;
pub use types::*;
pub use verify::{verify_subscription, SubscriptionQuery, SUBSCRIBE_MODE};
