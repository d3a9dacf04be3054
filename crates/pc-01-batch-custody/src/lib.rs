//! # PC-01 Batch Custody
//!
//! Tracks custody of physical goods from producer to consumer. A batch is
//! created by the producer, claimed and handed on by the shipper, and sold
//! down item by item by the retailer. Every transition appends one snapshot
//! transaction to the batch's history.
//!
//! ## Transitions
//!
//! | Operation | Role | Effect |
//! |-----------|------|--------|
//! | `createBatch` | Producer | new batch, quality `OK`, registered in `allBatches` |
//! | `claimBatch` | Shipper | owner becomes the shipper |
//! | `transferBatch` | Shipper | owner and signature replaced |
//! | `sellBatchItem` | Retailer | quantity decremented; sold out means unassigned |
//! | `updateBatchQuality` | Shipper | quality set on every batch the shipper holds |
//!
//! ## Queries
//!
//! `getBatch`, `getAllBatches` (certifier sees all), `getAllBatchesDetails`
//! (history and signature stripped), `getNbItems`.
//!
//! ## Module Structure
//!
//! ```text
//! pc-01-batch-custody/
//! ├── domain/         # Batch, BatchTransaction, invariants
//! ├── ports/          # BatchCustodyApi
//! ├── operations.rs   # Name lookup and argument shapes
//! ├── handlers.rs     # Transition handlers
//! ├── queries.rs      # Read-only projections
//! └── service.rs      # BatchCustodyContract (Chaincode)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod handlers;
pub mod operations;
pub mod ports;
pub mod queries;
pub mod service;

/// Contract name used by hosts and in log fields.
pub const CONTRACT_NAME: &str = "custody";

// Re-exports
pub use domain::{Batch, BatchDetailsList, BatchIdList, BatchTransaction, INITIAL_QUALITY};
pub use operations::CustodyOperation;
pub use ports::{BatchCustodyApi, CustodyOutcome};
pub use queries::CustodyQuery;
pub use service::BatchCustodyContract;
