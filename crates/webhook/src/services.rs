//! Seams between the handlers and the outside world.
//!
//! Each trait covers exactly the call a handler makes. The real clients
//! implement them here; tests swap in mocks.

use async_trait::async_trait;
use bible_api::{BibleClient, BibleError, VerseQuery, VerseResponse};
use database::{user, Database, DatabaseError};
use dialogflow_client::{DialogflowClient, DialogflowError};
use messenger_client::{MessengerClient, MessengerError};

/// Looks up Bible verses.
#[async_trait]
pub trait VerseLookup: Send + Sync {
    /// Fetch the raw reply for a query. One attempt, no retries.
    async fn lookup(&self, query: &VerseQuery) -> Result<VerseResponse, BibleError>;
}

/// Persists submitted names.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a record and return its ID.
    async fn record_user(&self, name: &str) -> Result<i64, DatabaseError>;

    /// Count stored records.
    async fn count_users(&self) -> Result<i64, DatabaseError>;
}

/// Conversational AI that turns user text into a reply.
#[async_trait]
pub trait IntentDetector: Send + Sync {
    /// Detect the intent of `text` within a session and return the
    /// fulfillment text (possibly empty).
    async fn detect(&self, session_id: &str, text: &str) -> Result<String, DialogflowError>;
}

/// Delivers text to a messaging platform user.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `text` to the user identified by `recipient_id`.
    async fn deliver(&self, recipient_id: &str, text: &str) -> Result<(), MessengerError>;
}

#[async_trait]
impl VerseLookup for BibleClient {
    async fn lookup(&self, query: &VerseQuery) -> Result<VerseResponse, BibleError> {
        BibleClient::lookup(self, query).await
    }
}

#[async_trait]
impl UserStore for Database {
    async fn record_user(&self, name: &str) -> Result<i64, DatabaseError> {
        user::add_user(self.pool(), name).await
    }

    async fn count_users(&self) -> Result<i64, DatabaseError> {
        user::count_users(self.pool()).await
    }
}

#[async_trait]
impl IntentDetector for DialogflowClient {
    async fn detect(&self, session_id: &str, text: &str) -> Result<String, DialogflowError> {
        self.fulfillment_text(session_id, text).await
    }
}

#[async_trait]
impl MessageSender for MessengerClient {
    async fn deliver(&self, recipient_id: &str, text: &str) -> Result<(), MessengerError> {
        let result = self.send_text(recipient_id, text).await?;
        tracing::debug!(
            recipient = %recipient_id,
            message_id = %result.message_id,
            "Message delivered"
        );
        Ok(())
    }
}
