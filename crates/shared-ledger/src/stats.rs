//! Per-contract invocation counters.

use parking_lot::RwLock;

use crate::errors::ChaincodeError;

/// Counters for one contract instance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvocationStats {
    /// Invocations whose writes were committed.
    pub committed: u64,
    /// Invocations rejected before or during execution.
    pub rejected: u64,
    /// Rejections caused by caller input (arity, parse, role).
    pub client_errors: u64,
    /// Queries served, successful or not.
    pub queries: u64,
    /// Keys written across all committed invocations.
    pub keys_written: u64,
}

/// Thread-safe holder for [`InvocationStats`].
#[derive(Debug, Default)]
pub struct StatsRecorder {
    inner: RwLock<InvocationStats>,
}

impl StatsRecorder {
    /// Count a committed invocation that wrote `keys` keys.
    pub fn record_commit(&self, keys: usize) {
        let mut stats = self.inner.write();
        stats.committed += 1;
        stats.keys_written += keys as u64;
    }

    /// Count a rejected invocation.
    pub fn record_rejection(&self, error: &ChaincodeError) {
        let mut stats = self.inner.write();
        stats.rejected += 1;
        if error.is_client_error() {
            stats.client_errors += 1;
        }
    }

    /// Count a query.
    pub fn record_query(&self) {
        self.inner.write().queries += 1;
    }

    /// Current counters.
    #[must_use]
    pub fn snapshot(&self) -> InvocationStats {
        self.inner.read().clone()
    }
}
