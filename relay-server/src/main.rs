//! Gramline Web Server - Alertmanager-to-Telegram webhook relay.
//!
//! This binary provides a thin web server that:
//! - Receives Alertmanager webhooks and plain `{"text": ...}` bodies
//! - Derives a chat message from the payload
//! - Forwards it to the Telegram Bot API
//! - Answers with a short plain-text status

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gramline::web::{create_router, AppState};
use gramline::{Config, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("relay_starting");

    // Load configuration; token and chat id are only required per request
    let config = Config::from_env();
    info!(
        port = config.port,
        bot_token_configured = config.bot_token.is_some(),
        chat_id_configured = config.chat_id.is_some(),
        api_base = %config.telegram_api_base,
        timeout_ms = config.request_timeout_ms,
        "config_loaded"
    );

    // Create the outbound Telegram client
    let telegram = TelegramClient::new(
        config.telegram_api_base.clone(),
        config.request_timeout_ms,
    )
    .context("Failed to create Telegram client")?;

    // Create application state
    let port = config.port;
    let state = AppState::new(config, telegram);

    // Build the router
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "relay_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("relay_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("relay_shutting_down");
}
