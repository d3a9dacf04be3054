//! # Contract Registry
//!
//! Deployable contracts keyed by kind. The registry is built once from the
//! ledger configuration; hosts pick one contract per run.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use pc_01_batch_custody::BatchCustodyContract;
use pc_02_donation_funds::DonationFundsContract;
use serde::{Deserialize, Serialize};
use shared_ledger::{Chaincode, LedgerConfig};
use tracing::debug;

/// Which contract a host runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    /// Batch custody.
    Custody,
    /// Donation funds.
    Funds,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custody => f.write_str("custody"),
            Self::Funds => f.write_str("funds"),
        }
    }
}

/// Contracts available to a host.
pub struct ContractRegistry {
    contracts: HashMap<ContractKind, Arc<dyn Chaincode>>,
}

impl ContractRegistry {
    /// Registry with every contract, configured with `config`.
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        let mut contracts: HashMap<ContractKind, Arc<dyn Chaincode>> = HashMap::new();
        contracts.insert(ContractKind::Custody, Arc::new(BatchCustodyContract::new(config)));
        contracts.insert(ContractKind::Funds, Arc::new(DonationFundsContract::new()));
        debug!(contracts = contracts.len(), "contract registry built");
        Self { contracts }
    }

    /// Contract for `kind`.
    #[must_use]
    pub fn get(&self, kind: ContractKind) -> Option<Arc<dyn Chaincode>> {
        self.contracts.get(&kind).cloned()
    }

    /// Registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = ContractKind> + '_ {
        self.contracts.keys().copied()
    }
}

impl Default for ContractRegistry {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}
