//! HopeBot webhook server binary.
//!
//! Builds every client once, then serves the fulfillment and Messenger
//! webhooks until interrupted.

use std::sync::Arc;

use bible_api::{BibleClient, BibleConfig};
use database::Database;
use dialogflow_client::DialogflowClient;
use hopebot_webhook::{AppState, Config};
use messenger_client::MessengerClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing credentials stop the process here, before anything is served.
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting HopeBot webhook server");

    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    let bible = BibleClient::new(BibleConfig::from_env())?;
    info!(api_url = %bible.config().api_url, "Bible API client ready");

    let dialogflow = DialogflowClient::from_env()?;
    info!(project = %dialogflow.config().project_id, "Dialogflow client ready");

    let messenger = MessengerClient::from_env()?;

    let state = AppState::new(
        Arc::new(bible),
        Arc::new(db.clone()),
        Arc::new(dialogflow),
        Arc::new(messenger),
        config.verify_token.clone(),
    )
    .with_source(config.source.clone());

    let app = hopebot_webhook::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Webhook server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Webhook server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
