//! HopeBot webhook server.
//!
//! Two inbound surfaces share one axum router:
//!
//! - `POST /webhook` receives Dialogflow fulfillment calls. The intent
//!   dispatcher picks one handler per call (welcome, fallback, user-data
//!   recorder or Bible verse resolver) and always answers with a
//!   `fulfillmentText`, degrading to an apology when a dependency fails.
//! - `GET`/`POST /messenger` implements the Messenger webhook: the
//!   subscription handshake, and a relay that forwards each user message to
//!   Dialogflow and sends the reply back through the Send API.
//!
//! External systems sit behind the traits in [`services`] so every handler
//! can be exercised without the network.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod fulfillment;
pub mod recorder;
pub mod relay;
pub mod routes;
pub mod services;
pub mod state;
pub mod verse;

#[cfg(test)]
pub(crate) mod testing;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use state::AppState;

/// Build the application with state and request tracing attached.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
