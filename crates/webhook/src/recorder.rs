//! User-data recorder.

use tracing::{error, info};

use crate::fulfillment::FulfillmentReply;
use crate::services::UserStore;

/// Reply when the record could not be stored.
pub const SAVE_ERROR_TEXT: &str =
    "Sorry, I couldn't save your data right now. Please try again later.";

/// Append `name` to the store and report the outcome as reply text.
///
/// The name is not validated; an empty name is stored like any other.
pub async fn record_name(users: &dyn UserStore, name: &str) -> FulfillmentReply {
    match users.record_user(name).await {
        Ok(id) => {
            info!(id, "Saved user data");
            FulfillmentReply::text(format!("Thanks {}, your data has been saved!", name))
        }
        Err(err) => {
            error!(error = %err, "Error saving user data");
            FulfillmentReply::text(SAVE_ERROR_TEXT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockUsers;

    #[tokio::test]
    async fn test_name_is_recorded_and_thanked() {
        let users = MockUsers::default();

        let reply = record_name(&users, "Miriam").await;
        assert_eq!(reply.text, "Thanks Miriam, your data has been saved!");
        assert_eq!(users.names(), vec!["Miriam".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_name_still_recorded() {
        let users = MockUsers::default();

        let reply = record_name(&users, "").await;
        assert_eq!(reply.text, "Thanks , your data has been saved!");
        assert_eq!(users.names(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_store_failure_is_swallowed() {
        let users = MockUsers::failing();

        let reply = record_name(&users, "Miriam").await;
        assert_eq!(reply.text, SAVE_ERROR_TEXT);
        assert!(users.names().is_empty());
    }
}
