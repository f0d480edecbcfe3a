//! Error types for liftplan-core.
//!
//! One thiserror enum per failure domain, folded into [`CoreError`] at the
//! crate boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for liftplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Workout document import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Interval XML codec errors
    #[error("Interval format error: {0}")]
    Interval(#[from] IntervalError),

    /// Session snapshot errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while decoding an export/import document.
///
/// Every variant leaves the caller's store untouched: a rejected document
/// never mutates state.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The payload is not parseable JSON at all
    #[error("not a valid JSON document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document has no array-typed `cards` field
    #[error("document has no card array")]
    CardsNotAnArray,

    /// A card does not match any block shape
    #[error("card {index} does not match any block shape: {source}")]
    MalformedCard {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures in the interval XML codec.
#[derive(Error, Debug)]
pub enum IntervalError {
    /// XML reading/writing failed
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Writer IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally unusable document
    #[error("malformed interval document: {0}")]
    Malformed(String),

    /// Writer produced non-UTF8 output
    #[error("interval document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failures around the persisted session snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Could not read or write the snapshot file
    #[error("snapshot IO failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store shape could not be serialized
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
