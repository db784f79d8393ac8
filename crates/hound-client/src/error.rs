//! Client error types.

use hound_models::{SchemaError, SelectorParseError};
use thiserror::Error;

/// Result type for client operations.
pub type HoundResult<T> = Result<T, HoundError>;

/// Message returned for HTTP 401.
pub const BAD_API_KEY_MESSAGE: &str = "Bad API key for Sighthound";

/// Errors that can occur while talking to the Sighthound API.
#[derive(Debug, Error)]
pub enum HoundError {
    /// Invalid or missing setting. For a rejected selector, `value` holds the
    /// offending input and `allowed` the accepted set.
    #[error("{message}")]
    Configuration {
        message: String,
        value: Option<String>,
        allowed: &'static [&'static str],
    },

    #[error("{}", BAD_API_KEY_MESSAGE)]
    Authentication,

    #[error("Request failed with status {status}: {reason}")]
    Request { status: u16, reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl HoundError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
            value: None,
            allowed: &[],
        }
    }

    /// Map a non-200 status to its error.
    pub fn from_http_status(status: u16, reason: impl Into<String>) -> Self {
        match status {
            401 => Self::Authentication,
            _ => Self::Request {
                status,
                reason: reason.into(),
            },
        }
    }

    /// HTTP status behind this error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            HoundError::Authentication => Some(401),
            HoundError::Request { status, .. } => Some(*status),
            HoundError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HoundError::Transport(e) if e.is_timeout())
    }
}

impl From<SelectorParseError> for HoundError {
    fn from(err: SelectorParseError) -> Self {
        Self::Configuration {
            message: err.to_string(),
            value: Some(err.value),
            allowed: err.allowed,
        }
    }
}
