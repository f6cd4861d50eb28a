//! Relay error types and their HTTP response mapping.
//!
//! Every failure surfaces as a single status code plus a short
//! plain-text body. Nothing here terminates the process; only a failed
//! port bind at startup is fatal.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::telegram::SendError;

/// Error type for webhook request handling.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The body was not valid JSON for either accepted shape.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// An alert batch arrived with no alerts.
    #[error("no alerts in payload")]
    EmptyBatch,

    /// A text payload arrived with an empty message.
    #[error("empty text in payload")]
    EmptyText,

    /// A required configuration variable is unset.
    #[error("{0} is not configured")]
    MissingConfig(&'static str),

    /// The outbound Telegram call failed.
    #[error(transparent)]
    Send(#[from] SendError),
}

impl RelayError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidPayload(_) | RelayError::EmptyBatch | RelayError::EmptyText => {
                StatusCode::BAD_REQUEST
            }
            RelayError::MissingConfig(_) | RelayError::Send(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the plain-text response body for this error.
    ///
    /// Bodies are deliberately short and stable; callers script against
    /// them. Upstream detail stays in the logs.
    pub fn response_body(&self) -> String {
        match self {
            RelayError::InvalidPayload(_) => "Invalid JSON".to_string(),
            RelayError::EmptyBatch => "No alerts".to_string(),
            RelayError::EmptyText => "Empty text".to_string(),
            RelayError::MissingConfig(var) => format!("{} not configured", var),
            RelayError::Send(SendError::Transport(_)) => "Failed to send".to_string(),
            RelayError::Send(SendError::Api { .. }) => "Telegram API error".to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, self.response_body()).into_response()
    }
}
