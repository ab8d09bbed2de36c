//! Heimdall client errors.

use thiserror::Error;

/// Errors that can occur while searching assets.
#[derive(Error, Debug)]
pub enum HeimdallError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid search query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
