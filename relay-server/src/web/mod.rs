//! Web server module for the inbound webhook surface.
//!
//! This module provides a thin web server that:
//! - Receives Alertmanager webhooks and plain `{"text": ...}` bodies
//! - Derives a chat message from the payload
//! - Forwards it to the Telegram Bot API
//! - Answers with a short plain-text status

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{alert_webhook, health, AppState, HealthResponse};

/// Creates the relay router with all routes configured.
///
/// Shared between the binary and the handler tests so both drive the
/// same routes and layers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/alert", post(alert_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
