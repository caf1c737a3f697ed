//! Error types for the text trimmer node.
//!
//! All errors are represented by the `TrimmerError` enum,
//! which provides specific variants for different error categories.

use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all text trimmer operations.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum TrimmerError {
    /// Configuration parsing or validation errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML, etc.).
    #[error("{0}")]
    Convert(String),

    /// Persisted data that does not match the node schema.
    #[error("schema violation: {0}")]
    Schema(String),

    /// Form validation failures that block a save.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Form field access errors.
    #[error("{0}")]
    Field(String),

    /// Node configuration errors.
    #[error("{0}")]
    Node(String),

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<TrimmerError> for String {
    fn from(val: TrimmerError) -> Self {
        val.to_string()
    }
}

impl From<std::io::Error> for TrimmerError {
    fn from(error: std::io::Error) -> Self {
        TrimmerError::IoError(error.to_string())
    }
}

impl From<TrimmerError> for std::io::Error {
    fn from(val: TrimmerError) -> Self {
        #[allow(clippy::io_other_error)]
        std::io::Error::new(ErrorKind::Other, val.to_string())
    }
}

impl From<serde_json::Error> for TrimmerError {
    fn from(error: serde_json::Error) -> Self {
        TrimmerError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for TrimmerError {
    fn from(error: toml::de::Error) -> Self {
        TrimmerError::Config(error.to_string())
    }
}

impl From<jsonschema::ValidationError<'_>> for TrimmerError {
    fn from(error: jsonschema::ValidationError<'_>) -> Self {
        TrimmerError::Convert(error.to_string())
    }
}
