//! Webhook endpoint handlers.
//!
//! The relay is deliberately small. A request is handled inline:
//! 1. Decode the payload (batch or plain text)
//! 2. Derive the message text
//! 3. Check Telegram configuration
//! 4. Forward to the Bot API and answer with a short plain-text body
//!
//! There is no queue behind this server; the caller waits for Telegram.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::message::build_message;
use crate::payload::WebhookPayload;
use crate::telegram::{OutboundMessage, TelegramClient};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(config: Config, telegram: TelegramClient) -> Self {
        Self {
            config: Arc::new(config),
            telegram,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Alert Webhook
// =============================================================================

/// Alert webhook endpoint.
///
/// Accepts an Alertmanager batch or a plain `{"text": ...}` body on the
/// same route, forwards the derived message to Telegram, and answers
/// `OK` once Telegram accepts it. All failures map onto [`RelayError`].
pub async fn alert_webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookPayload>, JsonRejection>,
) -> Result<&'static str, RelayError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "webhook_decode_failed");
        RelayError::InvalidPayload(rejection.body_text())
    })?;

    let text = build_message(payload)?;

    // Config is read at startup, but missing values fail the request,
    // not the process.
    let token = state.config.bot_token.as_deref().ok_or_else(|| {
        error!(var = "BOT_TOKEN", "telegram_config_missing");
        RelayError::MissingConfig("BOT_TOKEN")
    })?;
    let chat_id = state.config.chat_id.as_deref().ok_or_else(|| {
        error!(var = "CHAT_ID", "telegram_config_missing");
        RelayError::MissingConfig("CHAT_ID")
    })?;

    let message = OutboundMessage {
        chat_id: chat_id.to_string(),
        text,
    };

    state.telegram.send_message(token, &message).await?;

    info!(chat_id = %message.chat_id, "webhook_relayed");

    Ok("OK")
}
