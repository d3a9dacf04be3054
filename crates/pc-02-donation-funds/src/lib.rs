//! # PC-02 Donation Funds
//!
//! Pooled donation funds allocated to suppliers. Donors pledge to a project;
//! a `transfer` draws the requested amount from that project's donations in
//! registration order and credits the supplier with one summary transaction.
//!
//! ## Balances
//!
//! A donation's balance is the signed sum of its transactions. The stored
//! `amount` field is the original pledge and never changes.
//!
//! ## Operations
//!
//! | Operation | Args | Effect |
//! |-----------|------|--------|
//! | `createDonation` | amount, projectId, owner, donationId, date | new donation, CREATE `+amount` |
//! | `transfer` | supplierId, projectId, amount, [details] | withdrawals across donations, supplier summary |
//!
//! ## Module Structure
//!
//! ```text
//! pc-02-donation-funds/
//! ├── domain/         # Donation, Supplier, FundTransaction, invariants
//! ├── algorithms/     # Allocation planning
//! ├── ports/          # DonationFundsApi
//! ├── operations.rs   # Name lookup and argument shapes
//! ├── handlers.rs     # createDonation, allocate
//! ├── queries.rs      # Read-only projections
//! └── service.rs      # DonationFundsContract (Chaincode)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod domain;
pub mod handlers;
pub mod operations;
pub mod ports;
pub mod queries;
pub mod service;

/// Contract name used by hosts and in log fields.
pub const CONTRACT_NAME: &str = "funds";

// Re-exports
pub use algorithms::{plan_allocation, AllocationPlan, Withdrawal};
pub use domain::{Donation, DonationIdList, FundTransaction, Supplier, SupplierIdList};
pub use handlers::{AllocationOutcome, WithdrawalRecord};
pub use operations::FundOperation;
pub use ports::{DonationFundsApi, FundOutcome};
pub use queries::FundQuery;
pub use service::DonationFundsContract;
