//! Persistence for rotation state.
//!
//! The core never reaches for ambient global storage. Every component takes a
//! [`KeyValueStore`] by reference, so the same code runs against SQLite on
//! disk, an in-memory map in tests, or whatever the embedder provides.

mod config;
pub mod memory;
pub mod sqlite;

pub use config::{Config, OffsetConfig, QuotaConfig, RotationConfig};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::PathBuf;

use crate::error::{ConfigError, StoreError};

/// Minimal string key-value persistence.
///
/// Methods take `&self`; backends that need mutation use interior
/// mutability. Read-modify-write sequences built on top of this trait are
/// not atomic across processes sharing one store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `SAKINA_DATA_DIR` wins when set. Otherwise `~/.config/sakina/`, or
/// `~/.config/sakina-dev/` when `SAKINA_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("SAKINA_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("SAKINA_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("sakina-dev")
            } else {
                base_dir.join("sakina")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
