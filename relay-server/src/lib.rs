//! Gramline - Alertmanager-to-Telegram webhook relay.
//!
//! This library provides the modules behind the `gramline-web` binary:
//! a thin web server that accepts alerting webhooks, derives a chat
//! message, and forwards it to the Telegram Bot API.
//!
//! ## Architecture
//!
//! ```text
//! Alertmanager → Web Server → message derivation → Telegram sendMessage
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod payload;
pub mod telegram;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::RelayError;
pub use message::build_message;
pub use payload::{Alert, AlertBatch, SimpleText, WebhookPayload};
pub use telegram::{OutboundMessage, SendError, TelegramClient};
pub use web::AppState;
