//! Host error types.

use shared_ledger::{ChaincodeError, ConfigError, StoreError};
use thiserror::Error;

/// Errors that stop the host, as opposed to per-line invocation failures,
/// which are reported in the line's result.
#[derive(Debug, Error)]
pub enum HostError {
    /// Snapshot could not be loaded or saved.
    #[error("state store error: {0}")]
    Store(#[from] StoreError),

    /// Contract init failed.
    #[error("contract init failed: {0}")]
    Init(#[from] ChaincodeError),

    /// Role identities are unusable.
    #[error("invalid ledger configuration: {0}")]
    Config(#[from] ConfigError),

    /// A script line is not a valid invocation.
    #[error("script line {line}: {reason}")]
    Script {
        /// 1-based line number.
        line: usize,
        /// Decoder message.
        reason: String,
    },
}
