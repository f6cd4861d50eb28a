//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables once at startup.

use std::env;

/// Default base URL of the Telegram Bot API.
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token. Secret; missing values fail requests, not startup.
    pub bot_token: Option<String>,

    /// Destination Telegram chat identifier
    pub chat_id: Option<String>,

    /// Port for the web server to listen on
    pub port: u16,

    /// Base URL of the Telegram Bot API (overridable for testing)
    pub telegram_api_base: String,

    /// Outbound HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            bot_token: read_non_empty("BOT_TOKEN"),

            chat_id: read_non_empty("CHAT_ID"),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            telegram_api_base: env::var("TELEGRAM_API_BASE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

/// Read an environment variable, treating unset and empty the same.
fn read_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
