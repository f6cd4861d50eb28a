//! Inbound webhook payload types.
//!
//! This module defines the two payload shapes accepted on the `/alert`
//! endpoint:
//! - Alertmanager webhook batches (the `alerts` array marks this shape)
//! - Plain `{"text": ...}` messages (the `text` field marks this shape)

use std::collections::HashMap;

use serde::Deserialize;

/// A payload accepted by the alert webhook endpoint.
///
/// Untagged because the senders own the wire format: Alertmanager posts
/// its fixed schema and cannot add a discriminator field. The shape is
/// decided structurally by the required field of each variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    /// Alertmanager-style alert batch
    Batch(AlertBatch),
    /// Plain text message
    Text(SimpleText),
}

/// Alertmanager webhook batch.
///
/// Field names match Alertmanager's JSON. `alerts` is required so that a
/// body without it falls through to [`SimpleText`] instead of matching
/// here as an empty batch. Unknown fields (groupKey, externalURL, ...)
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertBatch {
    /// Receiver name configured in Alertmanager
    #[serde(default)]
    pub receiver: String,
    /// Batch-level status ("firing" or "resolved"); drives the message prefix
    #[serde(default)]
    pub status: String,
    /// Grouped alerts; only the first is rendered
    pub alerts: Vec<Alert>,
}

/// A single alert within a batch.
#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    /// Per-alert status; decoded but the batch-level status decides the prefix
    #[serde(default)]
    pub status: String,
    /// Prometheus labels (alertname, severity, ...)
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Free-form annotations (summary, description, ...)
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

/// Plain text payload forwarded verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleText {
    /// Message text
    pub text: String,
}
