//! # Driven Port: State Store
//!
//! The ledger host exposes exactly two primitives, `get` and `put`, over a
//! flat key/value space. Ordering and atomicity of one invocation's writes
//! are the host's job; contracts reach the store only through this trait and
//! always through a handle passed in by the caller.

use crate::errors::StoreError;

/// Key/value ledger state.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - if the key has been written
    /// * `None` - if it never was
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Apply several writes as one unit.
    ///
    /// The default applies them one by one; adapters that can do better
    /// override it.
    fn put_batch(&self, writes: Vec<(String, Vec<u8>)>) -> Result<(), StoreError> {
        for (key, value) in writes {
            self.put_state(&key, value)?;
        }
        Ok(())
    }
}
