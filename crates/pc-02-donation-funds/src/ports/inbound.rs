//! # Driving Port (API - Inbound)

use serde::Serialize;
use shared_ledger::{ChaincodeError, StateStore};

use crate::domain::entities::Donation;
use crate::handlers::AllocationOutcome;
use crate::operations::FundOperation;
use crate::queries::FundQuery;

/// Result of a committed fund operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FundOutcome {
    /// The donation just created.
    Donation(Donation),
    /// What an allocation moved.
    Allocation(AllocationOutcome),
}

/// Donation funds API.
pub trait DonationFundsApi {
    /// Apply one operation atomically.
    fn apply(
        &self,
        store: &dyn StateStore,
        operation: &FundOperation,
    ) -> Result<FundOutcome, ChaincodeError>;

    /// Run one query and encode the result.
    fn run_query(&self, store: &dyn StateStore, query: &FundQuery)
        -> Result<Vec<u8>, ChaincodeError>;
}
