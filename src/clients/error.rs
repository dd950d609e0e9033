//! Error types for the order backend client.

use thiserror::Error;

/// Errors that can occur while talking to the order backend.
///
/// The screen never distinguishes between these: any of them is a plain
/// "failed" outcome. They exist so the failure can be logged with context.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status code.
    #[error("Backend responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
