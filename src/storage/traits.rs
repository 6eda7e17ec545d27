//! Settings store trait and common types.

use std::sync::Arc;

use crate::error::{NewsvoteError, Result};

/// A key-value store for string settings.
pub trait SettingsStore: Send + Sync + std::fmt::Debug {
    /// Read a setting. Absent keys yield `None`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a setting, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a setting. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a setting exists.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.as_ref().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.as_ref().remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        self.as_ref().contains(key)
    }
}

/// Error types specific to settings storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The key cannot be used by this back end.
    InvalidKey(String),

    /// I/O error.
    IoError(String),

    /// A stored value is not valid UTF-8.
    InvalidValue(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::InvalidKey(key) => write!(f, "Invalid settings key: {key:?}"),
            StorageError::IoError(msg) => write!(f, "I/O error: {msg}"),
            StorageError::InvalidValue(key) => write!(f, "Invalid value for settings key: {key}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for NewsvoteError {
    fn from(err: StorageError) -> Self {
        NewsvoteError::storage(err.to_string())
    }
}
