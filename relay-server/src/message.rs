//! Message derivation from inbound payloads.
//!
//! This module turns a decoded webhook payload into the text forwarded
//! to Telegram. Alert batches get a status prefix line; plain text goes
//! through verbatim.

use tracing::{info, warn};

use crate::error::RelayError;
use crate::payload::{AlertBatch, SimpleText, WebhookPayload};

/// Prefix line for firing (or unrecognized status) batches.
const FIRING_PREFIX: &str = "🚨 FIRING";

/// Prefix line for resolved batches.
const RESOLVED_PREFIX: &str = "✅ RESOLVED";

/// Stand-in alert name when the labels carry none.
const FALLBACK_ALERT_NAME: &str = "UnknownAlert";

/// Derive the outbound message text for a payload.
pub fn build_message(payload: WebhookPayload) -> Result<String, RelayError> {
    match payload {
        WebhookPayload::Batch(batch) => render_batch(batch),
        WebhookPayload::Text(simple) => render_text(simple),
    }
}

/// Render an alert batch into a prefixed message.
///
/// Only the first alert is consulted. The body prefers the `summary`
/// annotation, then `description`, then a line synthesized from the
/// `alertname` label; empty strings count as absent. The batch-level
/// status decides the prefix, not the alert's own.
fn render_batch(batch: AlertBatch) -> Result<String, RelayError> {
    let alert_count = batch.alerts.len();

    let mut alert = match batch.alerts.into_iter().next() {
        Some(alert) => alert,
        None => {
            warn!(receiver = %batch.receiver, "alert_batch_empty");
            return Err(RelayError::EmptyBatch);
        }
    };

    let summary = alert.annotations.remove("summary").filter(|s| !s.is_empty());
    let description = alert
        .annotations
        .remove("description")
        .filter(|s| !s.is_empty());

    let (body, body_source) = if let Some(summary) = summary {
        (summary, "summary")
    } else if let Some(description) = description {
        (description, "description")
    } else {
        let name = alert
            .labels
            .get("alertname")
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_ALERT_NAME);
        (format!("🚨 Alert: {}", name), "alertname")
    };

    let message = if batch.status == "resolved" {
        format!("{}\n{}", RESOLVED_PREFIX, body)
    } else {
        format!("{}\n{}", FIRING_PREFIX, body)
    };

    info!(
        status = %batch.status,
        alert_count = alert_count,
        body_source = body_source,
        "alert_message_built"
    );

    Ok(message)
}

/// Render a plain-text payload. The text is forwarded verbatim.
fn render_text(simple: SimpleText) -> Result<String, RelayError> {
    if simple.text.is_empty() {
        warn!("text_payload_empty");
        return Err(RelayError::EmptyText);
    }

    info!(text_length = simple.text.len(), "text_message_built");

    Ok(simple.text)
}
