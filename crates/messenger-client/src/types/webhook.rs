//! Inbound webhook payloads.

use serde::{Deserialize, Serialize};

/// The `object` value Messenger uses for page subscriptions.
pub const PAGE_OBJECT: &str = "page";

/// A batch of webhook events delivered in one POST.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookBatch {
    /// Subscription object type (`"page"` for Messenger).
    #[serde(default)]
    pub object: String,

    /// Entries, one per page.
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

impl WebhookBatch {
    /// Whether this batch comes from a page subscription.
    pub fn is_page(&self) -> bool {
        self.object == PAGE_OBJECT
    }

    /// Iterate over every messaging event across all entries.
    pub fn messaging_events(&self) -> impl Iterator<Item = &MessagingEvent> {
        self.entry.iter().flat_map(|entry| entry.messaging.iter())
    }

    /// Consume the batch, yielding the text messages it carries.
    pub fn into_text_messages(self) -> Vec<TextMessage> {
        self.entry
            .into_iter()
            .flat_map(|entry| entry.messaging)
            .filter_map(MessagingEvent::into_text_message)
            .collect()
    }
}

/// One entry of a webhook batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookEntry {
    /// Page ID.
    #[serde(default)]
    pub id: Option<String>,

    /// Entry time (milliseconds since epoch).
    #[serde(default)]
    pub time: Option<u64>,

    /// Messaging events for this page.
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

/// A single messaging event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagingEvent {
    /// The user who triggered the event.
    #[serde(default)]
    pub sender: Option<Participant>,

    /// The page that received the event.
    #[serde(default)]
    pub recipient: Option<Participant>,

    /// Event timestamp.
    #[serde(default)]
    pub timestamp: Option<u64>,

    /// Message content, absent for deliveries, reads, postbacks, etc.
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

impl MessagingEvent {
    /// Convert to a text message if the event has both a sender ID and text.
    pub fn into_text_message(self) -> Option<TextMessage> {
        let sender_id = self.sender?.id;
        if sender_id.trim().is_empty() {
            return None;
        }
        let text = self.message?.text?;
        Some(TextMessage { sender_id, text })
    }
}

/// A sender or recipient reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Participant {
    /// Page-scoped ID. Empty when Messenger omitted it.
    #[serde(default)]
    pub id: String,
}

/// Incoming message content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Message ID.
    #[serde(default)]
    pub mid: Option<String>,

    /// Message text, absent for attachment-only messages.
    #[serde(default)]
    pub text: Option<String>,
}

/// A text message extracted from a webhook batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    /// Page-scoped sender ID.
    pub sender_id: String,
    /// Message text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> WebhookBatch {
        serde_json::from_value(serde_json::json!({
            "object": "page",
            "entry": [
                {
                    "id": "page-1",
                    "time": 1700000000000u64,
                    "messaging": [
                        { "sender": { "id": "u1" }, "recipient": { "id": "page-1" }, "message": { "mid": "m1", "text": "hello" } },
                        { "sender": { "id": "u2" }, "recipient": { "id": "page-1" }, "delivery": { "watermark": 1 } }
                    ]
                },
                {
                    "id": "page-1",
                    "messaging": [
                        { "sender": { "id": "u3" }, "message": { "mid": "m2", "attachments": [] } },
                        { "sender": { "id": "u4" }, "message": { "text": "pray for me" } }
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_batch_is_page() {
        let batch = sample_batch();
        assert!(batch.is_page());

        let other = WebhookBatch {
            object: "instagram".to_string(),
            entry: Vec::new(),
        };
        assert!(!other.is_page());
    }

    #[test]
    fn test_messaging_events_flattened() {
        let batch = sample_batch();
        assert_eq!(batch.messaging_events().count(), 4);
    }

    #[test]
    fn test_text_messages_skip_non_text_events() {
        let messages = sample_batch().into_text_messages();
        assert_eq!(
            messages,
            vec![
                TextMessage {
                    sender_id: "u1".to_string(),
                    text: "hello".to_string()
                },
                TextMessage {
                    sender_id: "u4".to_string(),
                    text: "pray for me".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_events_without_sender_id_are_skipped() {
        let batch: WebhookBatch = serde_json::from_value(serde_json::json!({
            "object": "page",
            "entry": [ { "messaging": [
                { "sender": {}, "message": { "text": "no id" } },
                { "sender": { "id": "" }, "message": { "text": "empty id" } },
                { "message": { "text": "no sender" } },
                { "sender": { "id": "u2" }, "message": { "text": "second" } }
            ] } ]
        }))
        .unwrap();

        assert_eq!(batch.messaging_events().count(), 4);
        assert_eq!(
            batch.into_text_messages(),
            vec![TextMessage {
                sender_id: "u2".to_string(),
                text: "second".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let batch: WebhookBatch = serde_json::from_str("{}").unwrap();
        assert!(!batch.is_page());
        assert!(batch.entry.is_empty());
    }
}
