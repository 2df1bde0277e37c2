//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            SdkError::Connection(e.to_string())
        } else if e.is_decode() {
            SdkError::Transport(format!("Failed to decode response: {}", e))
        } else {
            SdkError::Transport(e.to_string())
        }
    }
}

impl SdkError {
    /// Classify a non-success HTTP response
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => SdkError::Validation(message),
            404 => SdkError::NotFound(message),
            _ => SdkError::Api { status, message },
        }
    }
}
