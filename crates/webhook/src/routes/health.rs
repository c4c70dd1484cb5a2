//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub users: i64,
}

/// Health check endpoint. Touches the store so a broken database shows up.
pub async fn health(State(state): State<AppState>) -> Result<Json<Health>> {
    let users = state.users.count_users().await?;
    Ok(Json(Health {
        status: "ok".to_string(),
        users,
    }))
}
