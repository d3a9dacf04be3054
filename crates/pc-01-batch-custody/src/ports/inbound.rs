//! # Driving Port (API - Inbound)
//!
//! Typed entry points for callers that already hold parsed operations. The
//! string-based `Chaincode` entry points parse and then call through here.

use serde::Serialize;
use shared_ledger::{ChaincodeError, StateStore};

use crate::domain::entities::{Batch, BatchIdList};
use crate::operations::CustodyOperation;
use crate::queries::CustodyQuery;

/// Result of a committed custody operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CustodyOutcome {
    /// The single batch the operation wrote.
    Batch(Batch),
    /// Ids of every batch a fan-out operation wrote.
    Batches(BatchIdList),
}

/// Batch custody API.
pub trait BatchCustodyApi {
    /// Apply one operation atomically.
    ///
    /// Either every write of the operation reaches `store` or none does.
    fn apply(
        &self,
        store: &dyn StateStore,
        operation: &CustodyOperation,
    ) -> Result<CustodyOutcome, ChaincodeError>;

    /// Run one query and encode the result.
    fn run_query(
        &self,
        store: &dyn StateStore,
        query: &CustodyQuery,
    ) -> Result<Vec<u8>, ChaincodeError>;
}
