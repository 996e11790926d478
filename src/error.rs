//! Error types for apidefaults
//!
//! The defaulting core never fails. These errors cover the edges around it:
//! loading policy configuration, decoding manifests and parsing quantities.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for apidefaults operations
pub type DefaultsResult<T> = Result<T, DefaultsError>;

/// Main error type for apidefaults operations
#[derive(Error, Debug)]
pub enum DefaultsError {
    /// Policy config file could not be parsed
    #[error("invalid policy config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Resource quantity string could not be parsed
    #[error("invalid quantity '{input}': {reason}")]
    InvalidQuantity { input: String, reason: String },

    /// Manifest names a kind this crate does not model
    #[error("unknown object kind '{kind}'")]
    UnknownKind { kind: String },

    /// Manifest sets a field the object model cannot hold
    #[error("{kind} field '{path}' is not supported")]
    UnsupportedField { kind: String, path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
