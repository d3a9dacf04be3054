//! # Registry Index
//!
//! Append-only list of known ids stored under a well-known singleton key as
//! `{"<field>": [ids...]}`. The singleton is written at contract init; a
//! missing singleton afterwards means the ledger is corrupt.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{ChaincodeError, StoreError};
use crate::ports::StateStore;
use crate::records;

/// Singleton index location and field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryIndex {
    key: &'static str,
    field: &'static str,
}

/// Every batch id.
pub const BATCH_INDEX: RegistryIndex = RegistryIndex::new("allBatches", "batches");

/// Every donation id.
pub const DONATION_INDEX: RegistryIndex = RegistryIndex::new("allDonations", "donations");

/// Every supplier id, one entry per allocation (duplicates kept).
pub const SUPPLIER_INDEX: RegistryIndex = RegistryIndex::new("allSuppliers", "suppliers");

/// Whether `key` is one of the index singletons and so unusable as a record id.
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    [BATCH_INDEX, DONATION_INDEX, SUPPLIER_INDEX]
        .iter()
        .any(|index| index.key == key)
}

impl RegistryIndex {
    /// Index stored under `key` with its ids in `field`.
    #[must_use]
    pub const fn new(key: &'static str, field: &'static str) -> Self {
        Self { key, field }
    }

    /// Singleton key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Stored form of `ids`.
    pub fn encode(&self, ids: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        let mut object = Map::new();
        object.insert(
            self.field.to_string(),
            Value::Array(ids.iter().cloned().map(Value::String).collect()),
        );
        serde_json::to_vec(&Value::Object(object))
            .map_err(|e| StoreError::Encoding(e.to_string()).into())
    }

    fn corrupt(&self, reason: impl Into<String>) -> ChaincodeError {
        ChaincodeError::CorruptIndex {
            key: self.key.to_string(),
            reason: reason.into(),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, ChaincodeError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| self.corrupt(e.to_string()))?;
        let Value::Object(object) = value else {
            return Err(self.corrupt("not an object"));
        };
        match object.get(self.field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| self.corrupt("non-string id"))
                })
                .collect(),
            Some(_) => Err(self.corrupt(format!("{} is not a list", self.field))),
        }
    }

    /// Write an empty index. Called from contract init.
    pub fn init<S: StateStore + ?Sized>(&self, store: &S) -> Result<(), ChaincodeError> {
        store.put_state(self.key, self.encode(&[])?)?;
        debug!(index = self.key, "registry index initialised");
        Ok(())
    }

    /// Every id, in registration order.
    ///
    /// # Errors
    ///
    /// `CorruptIndex` if the singleton is missing or malformed.
    pub fn list_all<S: StateStore + ?Sized>(&self, store: &S) -> Result<Vec<String>, ChaincodeError> {
        let bytes = store
            .get_state(self.key)?
            .ok_or_else(|| self.corrupt("index singleton missing"))?;
        self.decode(&bytes)
    }

    /// Append `id` and persist.
    pub fn register<S: StateStore + ?Sized>(
        &self,
        store: &S,
        id: &str,
    ) -> Result<(), ChaincodeError> {
        let mut ids = self.list_all(store)?;
        ids.push(id.to_string());
        store.put_state(self.key, self.encode(&ids)?)?;
        debug!(index = self.key, id, entries = ids.len(), "id registered");
        Ok(())
    }

    /// Resolve every id to its record, in registration order.
    ///
    /// # Errors
    ///
    /// `CorruptIndex` if an id has no record.
    pub fn resolve_all<T, S>(&self, store: &S) -> Result<Vec<T>, ChaincodeError>
    where
        T: DeserializeOwned,
        S: StateStore + ?Sized,
    {
        self.list_all(store)?
            .into_iter()
            .map(|id| {
                records::load(store, &id)?
                    .ok_or_else(|| self.corrupt(format!("dangling id {id}")))
            })
            .collect()
    }

    /// Resolved records satisfying `predicate`, in registration order.
    pub fn list_filtered<T, S, F>(&self, store: &S, predicate: F) -> Result<Vec<T>, ChaincodeError>
    where
        T: DeserializeOwned,
        S: StateStore + ?Sized,
        F: Fn(&T) -> bool,
    {
        Ok(self
            .resolve_all(store)?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
