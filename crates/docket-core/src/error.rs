//! Core error types for docket-core.
//!
//! This module defines the error hierarchy using thiserror. Every failure
//! is local and recoverable: a returned error means the single operation
//! did not take effect, never that the store is in a partial state.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for docket-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors (rejected before any mutation)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Store lookup errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors.
///
/// Raised before a store mutation is applied; the caller must not assume
/// partial insertion.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is empty or missing
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Invalid time range
    #[error("Invalid time range: end ({end}) must not precede start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// An id already exists in the store
    #[error("Duplicate id '{0}'")]
    DuplicateId(String),
}

/// Store lookup errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No entity with the given id
    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
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

    /// Failed to resolve the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
