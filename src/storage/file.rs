//! File-based settings store.
//!
//! Every setting lives in its own file named after the key inside one
//! directory. Writes go to a hidden temporary file first and are renamed into
//! place, so readers never observe a half-written value.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{NewsvoteError, Result};
use crate::storage::traits::{SettingsStore, StorageError};

/// A directory-backed settings store.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    /// The root directory for settings.
    directory: PathBuf,
}

impl FileSettingsStore {
    /// Open a settings directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)
                .map_err(|e| NewsvoteError::storage(format!("Failed to create directory: {e}")))?;
        }

        if !directory.is_dir() {
            return Err(NewsvoteError::storage(format!(
                "Path is not a directory: {}",
                directory.display()
            )));
        }

        Ok(FileSettingsStore { directory })
    }

    /// The settings directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Keys are plain file names: ASCII letters, digits, `_`, `-` and `.`,
    /// not starting with `.`.
    fn validate_key(key: &str) -> std::result::Result<(), StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if valid {
            Ok(())
        } else {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }

    fn key_path(&self, key: &str) -> std::result::Result<PathBuf, StorageError> {
        Self::validate_key(key)?;
        Ok(self.directory.join(key))
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StorageError::InvalidValue(key.to_string()).into()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e.to_string()).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let temp_path = self.directory.join(format!(".{key}.tmp"));

        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::IoError(format!("Failed to write setting {key}: {e}")).into()
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(e.to_string()).into()),
        }
    }
}
