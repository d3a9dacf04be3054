//! # Asset Record Store
//!
//! Typed read/write of single records keyed by id. Records are JSON; field
//! names and order come from each record type's serde derive and are part of
//! the storage contract.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::errors::{ChaincodeError, StoreError};
use crate::ports::StateStore;

/// Encode a record to its stored bytes.
pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, ChaincodeError> {
    serde_json::to_vec(record).map_err(|e| StoreError::Encoding(e.to_string()).into())
}

/// Decode stored bytes read from `key`.
pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, ChaincodeError> {
    serde_json::from_slice(bytes).map_err(|e| ChaincodeError::CorruptRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Read the record under `key`, if any.
pub fn load<T, S>(store: &S, key: &str) -> Result<Option<T>, ChaincodeError>
where
    T: DeserializeOwned,
    S: StateStore + ?Sized,
{
    match store.get_state(key)? {
        Some(bytes) => decode(key, &bytes).map(Some),
        None => Ok(None),
    }
}

/// Read the record under `key`.
///
/// # Errors
///
/// `NotFound` if nothing is stored there.
pub fn require<T, S>(store: &S, key: &str) -> Result<T, ChaincodeError>
where
    T: DeserializeOwned,
    S: StateStore + ?Sized,
{
    load(store, key)?.ok_or_else(|| ChaincodeError::NotFound(key.to_string()))
}

/// Whether anything is stored under `key`.
pub fn exists<S: StateStore + ?Sized>(store: &S, key: &str) -> Result<bool, ChaincodeError> {
    Ok(store.get_state(key)?.is_some())
}

/// Write `record` under `key`.
pub fn save<T, S>(store: &S, key: &str, record: &T) -> Result<(), ChaincodeError>
where
    T: Serialize,
    S: StateStore + ?Sized,
{
    let bytes = encode(record)?;
    debug!(key, bytes = bytes.len(), "record written");
    store.put_state(key, bytes)?;
    Ok(())
}

/// Deserialize a list that legacy writers may have stored as `null`.
pub fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// TESTS
// =============================================================================
