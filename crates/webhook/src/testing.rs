//! In-crate test doubles for the service traits.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bible_api::{BibleError, VerseQuery, VerseResponse};
use database::DatabaseError;
use dialogflow_client::DialogflowError;
use messenger_client::MessengerError;

use crate::services::{IntentDetector, MessageSender, UserStore, VerseLookup};
use crate::state::AppState;

pub(crate) const VERIFY_TOKEN: &str = "hope-verify";

/// Verse lookup with a canned reply.
#[derive(Default)]
pub(crate) struct MockVerses {
    reply: Option<VerseResponse>,
    pub(crate) calls: AtomicUsize,
    pub(crate) queries: Mutex<Vec<VerseQuery>>,
}

impl MockVerses {
    pub(crate) fn replying(reference: &str, translation: Option<&str>, text: Option<&str>) -> Self {
        Self {
            reply: Some(VerseResponse {
                reference: Some(reference.to_string()),
                translation_name: translation.map(str::to_string),
                text: text.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    /// Every lookup fails with a 503.
    pub(crate) fn failing() -> Self {
        Self::default()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerseLookup for MockVerses {
    async fn lookup(&self, query: &VerseQuery) -> Result<VerseResponse, BibleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        self.reply.clone().ok_or(BibleError::Status {
            status: 503,
            message: "unavailable".to_string(),
        })
    }
}

/// User store that remembers names in memory.
#[derive(Default)]
pub(crate) struct MockUsers {
    fail: bool,
    pub(crate) names: Mutex<Vec<String>>,
}

impl MockUsers {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for MockUsers {
    async fn record_user(&self, name: &str) -> Result<i64, DatabaseError> {
        if self.fail {
            return Err(DatabaseError::NotFound {
                entity: "users table",
                id: "main".to_string(),
            });
        }
        let mut names = self.names.lock().unwrap();
        names.push(name.to_string());
        Ok(names.len() as i64)
    }

    async fn count_users(&self) -> Result<i64, DatabaseError> {
        if self.fail {
            return Err(DatabaseError::NotFound {
                entity: "users table",
                id: "main".to_string(),
            });
        }
        Ok(self.names.lock().unwrap().len() as i64)
    }
}

/// Detector that answers `reply to: <text>`, failing for chosen sessions.
#[derive(Default)]
pub(crate) struct MockDetector {
    failing_sessions: HashSet<String>,
    empty_reply: bool,
    hang: bool,
    pub(crate) sessions: Mutex<Vec<String>>,
}

impl MockDetector {
    pub(crate) fn failing_for(sessions: &[&str]) -> Self {
        Self {
            failing_sessions: sessions.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            empty_reply: true,
            ..Default::default()
        }
    }

    /// Never completes a detection.
    pub(crate) fn hanging() -> Self {
        Self {
            hang: true,
            ..Default::default()
        }
    }

    pub(crate) fn sessions(&self) -> Vec<String> {
        self.sessions.lock().unwrap().clone()
    }
}

#[async_trait]
impl IntentDetector for MockDetector {
    async fn detect(&self, session_id: &str, text: &str) -> Result<String, DialogflowError> {
        self.sessions.lock().unwrap().push(session_id.to_string());
        if self.hang {
            std::future::pending::<()>().await;
        }
        if self.failing_sessions.contains(session_id) {
            return Err(DialogflowError::Api {
                status: 500,
                message: "internal".to_string(),
            });
        }
        if self.empty_reply {
            return Ok(String::new());
        }
        Ok(format!("reply to: {}", text))
    }
}

/// Sender that records deliveries, failing for chosen recipients.
#[derive(Default)]
pub(crate) struct MockSender {
    failing_recipients: HashSet<String>,
    pub(crate) sent: Mutex<Vec<(String, String)>>,
}

impl MockSender {
    pub(crate) fn failing_for(recipients: &[&str]) -> Self {
        Self {
            failing_recipients: recipients.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for MockSender {
    async fn deliver(&self, recipient_id: &str, text: &str) -> Result<(), MessengerError> {
        if self.failing_recipients.contains(recipient_id) {
            return Err(MessengerError::Api {
                code: 551,
                message: "This person isn't available right now.".to_string(),
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient_id.to_string(), text.to_string()));
        Ok(())
    }
}

/// Handles to the mocks behind a test [`AppState`].
pub(crate) struct Harness {
    pub(crate) verses: Arc<MockVerses>,
    pub(crate) users: Arc<MockUsers>,
    pub(crate) detector: Arc<MockDetector>,
    pub(crate) sender: Arc<MockSender>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::with(
            MockVerses::replying("John 3:16", Some("KJV"), Some(" For God so loved... ")),
            MockUsers::default(),
            MockDetector::default(),
            MockSender::default(),
        )
    }

    pub(crate) fn with(
        verses: MockVerses,
        users: MockUsers,
        detector: MockDetector,
        sender: MockSender,
    ) -> Self {
        Self {
            verses: Arc::new(verses),
            users: Arc::new(users),
            detector: Arc::new(detector),
            sender: Arc::new(sender),
        }
    }

    pub(crate) fn state(&self) -> AppState {
        AppState::new(
            self.verses.clone(),
            self.users.clone(),
            self.detector.clone(),
            self.sender.clone(),
            VERIFY_TOKEN,
        )
    }
}
