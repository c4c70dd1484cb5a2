//! Client for the bible-api.com verse lookup service.
//!
//! Free API, no key required. A lookup is keyed either by a free-text
//! reference ("John 3:16") or by a structured book/chapter/verse triple.
//!
//! # Example
//!
//! ```no_run
//! use bible_api::{BibleClient, BibleConfig, VerseQuery};
//!
//! # async fn example() -> Result<(), bible_api::BibleError> {
//! let client = BibleClient::new(BibleConfig::default())?;
//! let query = VerseQuery::reference("John 3:16");
//! let reply = client.lookup(&query).await?;
//!
//! if let Some(verse) = reply.into_result(&query) {
//!     println!("{}", verse);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::BibleClient;
pub use config::{BibleConfig, BibleConfigBuilder, DEFAULT_API_URL, DEFAULT_TRANSLATION};
pub use error::BibleError;
pub use types::{VerseQuery, VerseResponse, VerseResult};
