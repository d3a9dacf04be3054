//! # Snapshot File
//!
//! Persists an [`InMemoryLedger`] as one JSON object mapping each key to its
//! UTF-8 value. Stored records are JSON text, so snapshots stay readable.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::adapters::InMemoryLedger;
use crate::errors::StoreError;

/// A ledger snapshot on disk.
#[derive(Clone, Debug)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Snapshot stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file exists yet.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the snapshot into a fresh ledger.
    pub fn load(&self) -> Result<InMemoryLedger, StoreError> {
        let raw = fs::read(&self.path)?;
        let entries: BTreeMap<String, String> =
            serde_json::from_slice(&raw).map_err(|e| StoreError::Encoding(e.to_string()))?;
        debug!(path = %self.path.display(), keys = entries.len(), "snapshot loaded");
        Ok(InMemoryLedger::from_entries(
            entries
                .into_iter()
                .map(|(k, v)| (k, v.into_bytes()))
                .collect(),
        ))
    }

    /// Write every entry of `ledger` to disk, replacing the file.
    pub fn save(&self, ledger: &InMemoryLedger) -> Result<(), StoreError> {
        let mut entries = BTreeMap::new();
        for (key, value) in ledger.snapshot() {
            let text = String::from_utf8(value)
                .map_err(|_| StoreError::Encoding(format!("value of {key} is not UTF-8")))?;
            entries.insert(key, text);
        }
        let bytes =
            serde_json::to_vec_pretty(&entries).map_err(|e| StoreError::Encoding(e.to_string()))?;

        // Write-then-rename so a crash never leaves a truncated snapshot.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), keys = entries.len(), "snapshot saved");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
