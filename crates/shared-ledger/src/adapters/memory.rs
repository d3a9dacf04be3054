//! # In-Memory Ledger
//!
//! `StateStore` backed by an ordered map. Used by the host harness and by
//! every test in the workspace.

use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::errors::StoreError;
use crate::ports::StateStore;

/// In-memory key/value ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-populated with `entries`.
    #[must_use]
    pub fn from_entries(entries: BTreeMap<String, Vec<u8>>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Copy of every stored entry, ordered by key.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.entries.read().clone()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StateStore for InMemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn put_batch(&self, writes: Vec<(String, Vec<u8>)>) -> Result<(), StoreError> {
        // One lock for the whole batch: readers see all writes or none.
        let mut entries = self.entries.write();
        for (key, value) in writes {
            entries.insert(key, value);
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
