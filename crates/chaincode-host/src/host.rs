//! # Chaincode Host
//!
//! One contract over one in-memory ledger loaded from a snapshot file.

use std::sync::Arc;

use shared_ledger::{Chaincode, InMemoryLedger, SnapshotFile};
use tracing::info;

use crate::errors::HostError;
use crate::script::{LineKind, LineResult, ScriptEntry};

/// A contract deployed over a ledger.
pub struct ChaincodeHost {
    contract: Arc<dyn Chaincode>,
    ledger: InMemoryLedger,
}

impl ChaincodeHost {
    /// Deploy `contract` over a fresh ledger, running its init.
    pub fn deploy(contract: Arc<dyn Chaincode>) -> Result<Self, HostError> {
        let ledger = InMemoryLedger::new();
        contract.init(&ledger)?;
        info!(contract = contract.name(), "contract deployed on empty ledger");
        Ok(Self { contract, ledger })
    }

    /// Resume from `snapshot` if it exists, otherwise deploy fresh.
    pub fn open(contract: Arc<dyn Chaincode>, snapshot: &SnapshotFile) -> Result<Self, HostError> {
        if !snapshot.exists() {
            return Self::deploy(contract);
        }
        let ledger = snapshot.load()?;
        info!(
            contract = contract.name(),
            path = %snapshot.path().display(),
            keys = ledger.len(),
            "ledger restored from snapshot"
        );
        Ok(Self { contract, ledger })
    }

    /// Run one scripted call.
    pub fn execute(&self, entry: &ScriptEntry) -> LineResult {
        let call = &entry.call;
        let outcome = match call.kind {
            LineKind::Invoke => self.contract.invoke(&self.ledger, &call.function, &call.args),
            LineKind::Query => self.contract.query(&self.ledger, &call.function, &call.args),
        };
        LineResult::new(entry, outcome)
    }

    /// Run every call in order. Failed calls do not stop the run.
    pub fn run(&self, entries: &[ScriptEntry]) -> Vec<LineResult> {
        entries.iter().map(|entry| self.execute(entry)).collect()
    }

    /// Write the ledger to `snapshot`.
    pub fn save(&self, snapshot: &SnapshotFile) -> Result<(), HostError> {
        snapshot.save(&self.ledger)?;
        Ok(())
    }

    /// The ledger.
    #[must_use]
    pub fn ledger(&self) -> &InMemoryLedger {
        &self.ledger
    }
}
