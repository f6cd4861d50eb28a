//! Telegram Bot API client for outbound message delivery.
//!
//! One call per inbound webhook: POST the derived text to the
//! `sendMessage` endpoint and map the reply onto the relay's error
//! taxonomy. No retries, no queueing.

use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Characters of message text included in send logs.
const SEND_PREVIEW_CHARS: usize = 100;

/// Characters of the API reply body included in response logs.
const RESPONSE_PREVIEW_CHARS: usize = 200;

/// JSON body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    /// Destination chat identifier
    pub chat_id: String,
    /// Message text
    pub text: String,
}

/// Failure modes of a single send attempt.
#[derive(Debug, Error)]
pub enum SendError {
    /// The call produced no HTTP response (connect, DNS, timeout)
    #[error("telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Telegram answered with a non-success status
    #[error("telegram api returned status {status}")]
    Api {
        /// Upstream status code
        status: StatusCode,
        /// Upstream response body, kept for logging
        body: String,
    },
}

/// Thin client over the Bot API `sendMessage` endpoint.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    api_base: String,
}

impl TelegramClient {
    /// Create a client against the given API base URL.
    pub fn new(api_base: String, timeout_ms: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_base })
    }

    /// Send one message, logging the attempt and the reply.
    ///
    /// Success is any 2xx from Telegram. Everything else is an error for
    /// the caller to surface; upstream 4xx and 5xx are not distinguished.
    pub async fn send_message(
        &self,
        token: &str,
        message: &OutboundMessage,
    ) -> Result<(), SendError> {
        // Bot tokens are digits, a colon, and base64 characters; safe to
        // splice into the path unescaped.
        let url = format!("{}/bot{}/sendMessage", self.api_base, token);

        info!(
            chat_id = %message.chat_id,
            text_length = message.text.len(),
            text_preview = truncate_chars(&message.text, SEND_PREVIEW_CHARS),
            "telegram_send_start"
        );

        let response = match self.client.post(&url).json(message).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    error!(error = %e, "telegram_send_timeout");
                } else {
                    error!(error = %e, "telegram_send_failed");
                }
                return Err(SendError::Transport(e));
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        info!(
            status = status.as_u16(),
            body_preview = truncate_chars(&body, RESPONSE_PREVIEW_CHARS),
            "telegram_response"
        );

        if status.is_success() {
            info!(chat_id = %message.chat_id, "telegram_send_complete");
            Ok(())
        } else {
            error!(status = status.as_u16(), body = %body, "telegram_api_error");
            Err(SendError::Api { status, body })
        }
    }
}

/// Truncate to a character count without splitting multi-byte text.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
