//! Append-only user record operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::UserRecord;

/// Append a new user record and return its ID.
///
/// No validation is applied; an empty name is stored as-is.
pub async fn add_user(pool: &SqlitePool, name: &str) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (name)
        VALUES (?)
        "#,
    )
    .bind(name)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a user record by ID.
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<UserRecord> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, name, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: id.to_string(),
    })
}

/// List all user records in insertion order.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserRecord>> {
    let users = sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, name, created_at
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Count total user records.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
