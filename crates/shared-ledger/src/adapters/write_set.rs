//! # Write Set
//!
//! Per-invocation overlay over a `StateStore`. Reads fall through to the
//! underlying store unless the same invocation already wrote the key. Writes
//! are buffered and reach the store in one `put_batch` on [`WriteSet::commit`].
//! Dropping the set without committing discards every buffered write.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::debug;

use crate::errors::StoreError;
use crate::ports::StateStore;

/// Buffered writes for one invocation.
pub struct WriteSet<'a, S: StateStore + ?Sized> {
    inner: &'a S,
    pending: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl<'a, S: StateStore + ?Sized> WriteSet<'a, S> {
    /// Open a write set over `inner`.
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            pending: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of distinct keys written so far.
    pub fn pending_writes(&self) -> usize {
        self.pending.lock().len()
    }

    /// Flush every buffered write to the underlying store.
    ///
    /// Returns the number of keys written.
    pub fn commit(self) -> Result<usize, StoreError> {
        let pending = self.pending.into_inner();
        let count = pending.len();
        if count > 0 {
            self.inner.put_batch(pending.into_iter().collect())?;
        }
        debug!(keys = count, "write set committed");
        Ok(count)
    }

    /// Drop every buffered write.
    pub fn discard(self) {
        let count = self.pending.lock().len();
        debug!(keys = count, "write set discarded");
    }
}

impl<S: StateStore + ?Sized> StateStore for WriteSet<'_, S> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(value) = self.pending.lock().get(key) {
            return Ok(Some(value.clone()));
        }
        self.inner.get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.pending.lock().insert(key.to_string(), value);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
