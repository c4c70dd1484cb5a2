//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A name submitted by a user through the fulfillment webhook.
///
/// Records are append-only: the same name may appear any number of times,
/// and nothing updates or deletes a row once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Name as submitted (may be empty).
    pub name: String,
    /// Creation timestamp.
    pub created_at: String,
}
