//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Structured API error
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Non-success status without a structured body
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Success body that does not decode into the expected type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body returned by the API (`{ "message": ..., "errors": ... }`)
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub message: String,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

/// Map a non-success status and its body text to a [`ClientError`]
pub(crate) fn error_from_status(status: u16, text: String) -> ClientError {
    match status {
        404 => ClientError::NotFound(text),
        400 => ClientError::Validation(text),
        _ => match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(api_err) => ClientError::Api {
                status,
                message: api_err.message,
                details: api_err.errors,
            },
            Err(_) => ClientError::Status { status, body: text },
        },
    }
}
