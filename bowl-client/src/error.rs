//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response; `message` is the backend's own wording when
    /// the body carried one
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match any known shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Required configuration missing
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
