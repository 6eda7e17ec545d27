//! Settings storage.
//!
//! The classifier persists its trained state as string blobs in a simple
//! key-value settings store. Two back ends are provided:
//!
//! - [`MemorySettingsStore`]: in-memory, for tests and short-lived processes
//! - [`FileSettingsStore`]: one file per key inside a directory
//!
//! # Example
//!
//! ```
//! use newsvote::storage::{MemorySettingsStore, SettingsStore};
//!
//! let store = MemorySettingsStore::new();
//! store.set("classifier_counts", "{}").unwrap();
//! assert_eq!(store.get("classifier_counts").unwrap().as_deref(), Some("{}"));
//! assert_eq!(store.get("missing").unwrap(), None);
//! ```

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileSettingsStore;
pub use memory::MemorySettingsStore;
pub use traits::{SettingsStore, StorageError};
