//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while running a command.
///
/// The display text of a variant is what the chat user sees after `error: `,
/// so [`AppError::Command`] renders its message verbatim.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Command(String),

    #[error("Search error: {0}")]
    Search(#[from] heimdall_client::HeimdallError),

    #[error("Messenger error: {0}")]
    Messenger(#[from] messenger_client::MessengerError),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl AppError {
    /// User-facing command failure.
    pub fn command(message: impl Into<String>) -> Self {
        AppError::Command(message.into())
    }
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;

/// Errors returned by the webhook HTTP endpoints.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Couldn't validate the request signature")]
    Authentication,

    #[error("Subscription verification failed")]
    VerificationFailed,

    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::Authentication | RelayError::VerificationFailed => {
                StatusCode::FORBIDDEN.into_response()
            }
            RelayError::InvalidPayload(_) => {
                let body = ErrorResponse {
                    error: self.to_string(),
                    code: "INVALID_PAYLOAD".to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::InvalidPayload(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_displays_message_verbatim() {
        assert_eq!(AppError::command("bad arg").to_string(), "bad arg");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RelayError::Authentication.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            RelayError::VerificationFailed.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            RelayError::InvalidPayload("eof".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
