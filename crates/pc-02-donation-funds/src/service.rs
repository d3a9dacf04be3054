//! # Donation Funds Service

use chain_telemetry::log_event;
use shared_ledger::{
    records, Chaincode, ChaincodeError, InvocationStats, StateStore, StatsRecorder, WriteSet,
    DONATION_INDEX, SUPPLIER_INDEX,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::invariants::check_all;
use crate::handlers;
use crate::operations::FundOperation;
use crate::ports::inbound::{DonationFundsApi, FundOutcome};
use crate::queries::{self, FundQuery};
use crate::CONTRACT_NAME;

/// The donation funds contract.
///
/// Holds no configuration: fund operations are not role gated.
#[derive(Debug, Default)]
pub struct DonationFundsContract {
    stats: StatsRecorder,
}

impl DonationFundsContract {
    /// Create a contract.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current invocation counters.
    #[must_use]
    pub fn stats(&self) -> InvocationStats {
        self.stats.snapshot()
    }

    fn dispatch<S: StateStore + ?Sized>(
        store: &S,
        operation: &FundOperation,
    ) -> Result<FundOutcome, ChaincodeError> {
        match operation {
            FundOperation::CreateDonation(op) => {
                let donation = handlers::create_donation(store, op)?;
                debug_assert!(check_all(&donation));
                Ok(FundOutcome::Donation(donation))
            }
            FundOperation::Allocate(op) => handlers::allocate(store, op).map(FundOutcome::Allocation),
        }
    }
}

impl DonationFundsApi for DonationFundsContract {
    fn apply(
        &self,
        store: &dyn StateStore,
        operation: &FundOperation,
    ) -> Result<FundOutcome, ChaincodeError> {
        let writes = WriteSet::new(store);
        match Self::dispatch(&writes, operation) {
            Ok(outcome) => {
                let keys = writes.commit()?;
                self.stats.record_commit(keys);
                info!(operation = operation.name(), keys, "invocation committed");
                Ok(outcome)
            }
            Err(error) => {
                writes.discard();
                Err(error)
            }
        }
    }

    fn run_query(&self, store: &dyn StateStore, query: &FundQuery) -> Result<Vec<u8>, ChaincodeError> {
        self.stats.record_query();
        queries::execute(store, query)
    }
}

impl Chaincode for DonationFundsContract {
    fn name(&self) -> &'static str {
        CONTRACT_NAME
    }

    fn init(&self, store: &dyn StateStore) -> Result<(), ChaincodeError> {
        DONATION_INDEX.init(store)?;
        SUPPLIER_INDEX.init(store)?;
        info!(contract = CONTRACT_NAME, "contract initialised");
        Ok(())
    }

    #[instrument(skip(self, store, args), fields(contract = CONTRACT_NAME, correlation_id = %Uuid::new_v4()))]
    fn invoke(
        &self,
        store: &dyn StateStore,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        let result = FundOperation::parse(function, args)
            .and_then(|operation| self.apply(store, &operation))
            .and_then(|outcome| records::encode(&outcome));

        if let Err(error) = &result {
            self.stats.record_rejection(error);
            log_event!(warn, CONTRACT_NAME, "invocation rejected", code = error.code(), error = %error);
        }
        result
    }

    #[instrument(skip(self, store, args), fields(contract = CONTRACT_NAME))]
    fn query(
        &self,
        store: &dyn StateStore,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        let query = FundQuery::parse(function, args)?;
        let payload = self.run_query(store, &query)?;
        debug!(query = query.name(), bytes = payload.len(), "query served");
        Ok(payload)
    }
}
