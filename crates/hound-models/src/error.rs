//! Response schema errors.

use thiserror::Error;

/// Result type for parsing and extraction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// The response JSON did not have the shape an operation needs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Response is missing `{0}`")]
    MissingField(String),

    #[error("Object {index} ({kind}) is missing `{path}`")]
    MissingObjectField {
        index: usize,
        kind: String,
        path: String,
    },

    #[error("Object {index} ({kind}) is malformed: {reason}")]
    MalformedObject {
        index: usize,
        kind: String,
        reason: String,
    },

    #[error("Response is malformed: {0}")]
    Malformed(String),
}

impl SchemaError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
