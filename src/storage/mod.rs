//! Key-value persistence for region contents and the work-zone view.
//!
//! The engine only needs `get`/`set`/`remove` on string values. Two backends are
//! provided: `MemoryStore` for tests and embedding, and `FileStore`, which keeps
//! the map in a JSON file and rewrites it atomically on every change.
//!
//! ## Error Handling
//!
//! Backends report failures as `StorageError`. The `persisted` helpers never fail
//! a load: absent keys and malformed values are logged and read as empty state.

mod file;
mod memory;
mod persisted;

pub use file::*;
pub use memory::*;
pub use persisted::*;

use crate::error::StorageResult;
use std::sync::Arc;

/// String key-value storage shared by both regions.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Handle to a store shared between the editor and its region stores.
pub type SharedStore = Arc<dyn KeyValueStore>;
