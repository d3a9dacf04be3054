//! # Batch Custody Service
//!
//! Hosts call in through `Chaincode`: invocation names are parsed into
//! operations, each operation runs inside its own write set, and the write
//! set commits only when the handler returns `Ok`.

use chain_telemetry::log_event;
use shared_ledger::{
    records, Chaincode, ChaincodeError, InvocationStats, LedgerConfig, StateStore,
    StatsRecorder, WriteSet, BATCH_INDEX,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::entities::BatchIdList;
use crate::domain::invariants::check_all;
use crate::handlers;
use crate::operations::CustodyOperation;
use crate::ports::inbound::{BatchCustodyApi, CustodyOutcome};
use crate::queries::{self, CustodyQuery};
use crate::CONTRACT_NAME;

/// The batch custody contract.
#[derive(Debug, Default)]
pub struct BatchCustodyContract {
    config: LedgerConfig,
    stats: StatsRecorder,
}

impl BatchCustodyContract {
    /// Create a contract with the given identities.
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            stats: StatsRecorder::default(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Current invocation counters.
    #[must_use]
    pub fn stats(&self) -> InvocationStats {
        self.stats.snapshot()
    }

    fn dispatch<S: StateStore + ?Sized>(
        &self,
        store: &S,
        operation: &CustodyOperation,
    ) -> Result<CustodyOutcome, ChaincodeError> {
        let config = &self.config;
        let batch = match operation {
            CustodyOperation::CreateBatch(op) => handlers::create_batch(store, config, op)?,
            CustodyOperation::ClaimBatch(op) => handlers::claim_batch(store, config, op)?,
            CustodyOperation::TransferBatch(op) => handlers::transfer_batch(store, op)?,
            CustodyOperation::SellBatchItem(op) => handlers::sell_batch_item(store, config, op)?,
            CustodyOperation::UpdateBatchQuality(op) => {
                let batches = handlers::update_batch_quality(store, config, op)?;
                return Ok(CustodyOutcome::Batches(BatchIdList { batches }));
            }
        };
        debug_assert!(check_all(&batch, &config.unassigned_owner));
        Ok(CustodyOutcome::Batch(batch))
    }
}

impl BatchCustodyApi for BatchCustodyContract {
    fn apply(
        &self,
        store: &dyn StateStore,
        operation: &CustodyOperation,
    ) -> Result<CustodyOutcome, ChaincodeError> {
        let writes = WriteSet::new(store);
        match self.dispatch(&writes, operation) {
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

    fn run_query(
        &self,
        store: &dyn StateStore,
        query: &CustodyQuery,
    ) -> Result<Vec<u8>, ChaincodeError> {
        self.stats.record_query();
        queries::execute(store, &self.config, query)
    }
}

impl Chaincode for BatchCustodyContract {
    fn name(&self) -> &'static str {
        CONTRACT_NAME
    }

    fn init(&self, store: &dyn StateStore) -> Result<(), ChaincodeError> {
        BATCH_INDEX.init(store)?;
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
        let result = CustodyOperation::parse(function, args, &self.config.roles)
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
        let query = CustodyQuery::parse(function, args)?;
        let payload = self.run_query(store, &query)?;
        debug!(query = query.name(), bytes = payload.len(), "query served");
        Ok(payload)
    }
}

// =============================================================================
// TESTS
// =============================================================================
