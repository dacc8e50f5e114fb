//! Key-value persistence adapters
//!
//! The task store persists its state through an abstract string-valued
//! key-value capability. Adapters are synchronous: a write runs to
//! completion before the next user intent is processed.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;

use crate::Result;

/// Key-value persistence used by the task store
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
