//! Error types for schema conversion.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Target;

/// Errors during schema conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    // Conversion errors (exit code 2)
    #[error("unrecognized type \"{name}\" encountered at {path}")]
    UnknownType { name: String, path: String },

    #[error("{target} cannot express the schema at {path}: {reason}")]
    UnsupportedType {
        target: Target,
        path: String,
        reason: String,
    },

    #[error("invalid schema at {path}: {message}")]
    InvalidSchema { path: String, message: String },

    #[error("invalid definitions: {message}")]
    InvalidDefinitions { message: String },

    #[error("converted schema is not valid: {message}")]
    InvalidOutput { message: String },
}

impl ConvertError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::FileNotFound { .. } | ConvertError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            ConvertError::NetworkError { .. } => 3,
            _ => 2,
        }
    }

    pub(crate) fn invalid_schema(path: &str, message: impl Into<String>) -> Self {
        ConvertError::InvalidSchema {
            path: display_path(path),
            message: message.into(),
        }
    }
}

/// Root pointer is shown as `/` rather than an empty string.
pub(crate) fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
