//! Error types for the VISS client.

use thiserror::Error;

/// Result type alias using VissError.
pub type VissResult<T> = Result<T, VissError>;

/// Errors raised while driving the VISS API.
#[derive(Debug, Error)]
pub enum VissError {
    #[error("HTTP transport failure: {0}")]
    Transport(String),

    #[error("Malformed VISS response: {0}")]
    MalformedResponse(String),

    #[error("Field '{field}' is mandatory but not found in node {node}")]
    MissingField { field: String, node: String },

    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Invalid temporal extent: {0}")]
    InvalidTemporalExtent(String),
}

// Conversion from common error types
impl From<serde_json::Error> for VissError {
    fn from(err: serde_json::Error) -> Self {
        VissError::MalformedResponse(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for VissError {
    fn from(err: reqwest::Error) -> Self {
        VissError::Transport(err.to_string())
    }
}
