//! # Shared Ledger - Chaincode Foundation
//!
//! Everything the contract crates share: the state store port, write sets,
//! registry indexes, the record codec, roles and the error taxonomy.
//!
//! ## Purpose
//!
//! Contracts run atop a permissioned ledger that exposes only `get(key)` and
//! `put(key, value)`. The host applies one invocation's writes atomically and
//! serializes invocations touching the same keys. This crate models that
//! boundary explicitly: handlers receive a `&dyn StateStore`, and service
//! entry points wrap every invocation in a [`adapters::WriteSet`] that commits
//! on success and discards on failure.
//!
//! ## Persisted Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `allBatches` | `{"batches":[ids]}` |
//! | `allDonations` | `{"donations":[ids]}` |
//! | `allSuppliers` | `{"suppliers":[ids]}` |
//! | any other | JSON record of the asset or supplier with that id |
//!
//! ## Module Structure
//!
//! ```text
//! shared-ledger/
//! ├── domain/      # Roles, argument parsing, transaction ids
//! ├── ports/       # StateStore (driven), Chaincode (driving)
//! ├── adapters/    # InMemoryLedger, SnapshotFile, WriteSet
//! ├── records.rs   # Asset Record Store codec
//! ├── registry.rs  # Registry Index
//! ├── config.rs    # LedgerConfig
//! ├── stats.rs     # Per-contract invocation counters
//! └── errors.rs    # StoreError, ChaincodeError
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod records;
pub mod registry;
pub mod stats;

// Re-exports
pub use adapters::{InMemoryLedger, SnapshotFile, WriteSet};
pub use config::{ConfigError, LedgerConfig, DEFAULT_UNASSIGNED_OWNER};
pub use domain::{
    authorize, checked_total, expect_arity, next_transaction_id, parse_integer, parse_positive,
    transaction_id, Arity, Role, RoleDirectory, TransactionKind,
};
pub use errors::{ChaincodeError, StoreError};
pub use ports::{Chaincode, StateStore};
pub use registry::{is_reserved_key, RegistryIndex, BATCH_INDEX, DONATION_INDEX, SUPPLIER_INDEX};
pub use stats::{InvocationStats, StatsRecorder};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
