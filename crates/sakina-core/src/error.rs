//! Core error types for sakina-core.
//!
//! Storage faults inside the rotation path are recovered locally and only
//! reported through [`crate::diagnostics`]; the variants here are what the
//! remaining fallible operations (configuration, catalog preconditions,
//! quota policy, journal input) return to callers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sakina-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The caller's daily allowance is used up
    #[error("Daily limit of {limit} reached")]
    QuotaExhausted { limit: u32 },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a [`crate::storage::KeyValueStore`] backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write would exceed the store's capacity
    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// The store cannot be used at all (disabled, closed, poisoned)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Store is locked")]
    Locked,
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Input longer than allowed
    #[error("'{field}' is {len} characters, maximum is {max}")]
    TooLong { field: String, len: usize, max: usize },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg)
                if e.code == rusqlite::ErrorCode::DatabaseLocked
                    || e.code == rusqlite::ErrorCode::DatabaseBusy =>
            {
                StoreError::Locked
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_convert_into_core_errors() {
        let err: CoreError = StoreError::Unavailable("disabled".into()).into();
        assert!(matches!(err, CoreError::Storage(StoreError::Unavailable(_))));
        assert_eq!(err.to_string(), "Storage error: Storage unavailable: disabled");
    }

    #[test]
    fn open_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sakina.db");
        let err = match crate::storage::SqliteStore::open_at(&path) {
            Err(e) => CoreError::from(e),
            Ok(_) => panic!("opened a database in a missing directory"),
        };
        assert!(matches!(err, CoreError::Storage(StoreError::OpenFailed { .. })));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn quota_exhausted_message() {
        let err = CoreError::QuotaExhausted { limit: 3 };
        assert_eq!(err.to_string(), "Daily limit of 3 reached");
    }
}
