//! In-memory settings store for testing and caching.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;
use crate::storage::traits::SettingsStore;

/// An in-memory settings store.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored settings.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Remove every setting.
    pub fn clear(&self) {
        self.values.write().clear();
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }
}
