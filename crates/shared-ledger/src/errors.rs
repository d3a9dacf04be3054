//! # Error Types
//!
//! Store-level failures and the chaincode error taxonomy shared by every
//! contract crate.

use thiserror::Error;

use crate::domain::roles::Role;

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors raised by a state store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing ledger rejected or failed the operation.
    #[error("ledger backend error: {0}")]
    Backend(String),

    /// Snapshot file could not be read or written.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("encoding error: {0}")]
    Encoding(String),
}

// =============================================================================
// CHAINCODE ERRORS
// =============================================================================

/// Every way an invocation or query can fail.
///
/// The first failing check aborts the invocation. Nothing is written to the
/// underlying store when any of these is returned from a service entry point.
#[derive(Debug, Error)]
pub enum ChaincodeError {
    /// Wrong number of positional arguments.
    #[error("incorrect number of arguments for {operation}: expecting {expected}, got {got}")]
    ArgumentCount {
        /// Operation name as invoked.
        operation: String,
        /// Human readable arity ("6", "3 or 4").
        expected: String,
        /// Arguments actually supplied.
        got: usize,
    },

    /// An argument that must be an integer did not parse or is out of range.
    #[error("invalid {field}: {value:?}")]
    InvalidNumericArgument {
        /// Argument name.
        field: &'static str,
        /// Raw value supplied.
        value: String,
    },

    /// Argument parsed but is not acceptable in the current state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The invoking identity does not hold the required role.
    #[error("{identity:?} is not allowed to {operation} (requires {required})")]
    Unauthorized {
        /// Operation name.
        operation: String,
        /// Identity string presented by the caller.
        identity: String,
        /// Role required by the operation.
        required: Role,
    },

    /// No record stored under the key.
    #[error("record not found: {0}")]
    NotFound(String),

    /// A create targeted an id that is already taken.
    #[error("record already exists: {0}")]
    AlreadyExists(String),

    /// Registry index missing, undecodable, or listing a dangling id.
    #[error("corrupt index {key}: {reason}")]
    CorruptIndex {
        /// Singleton key of the index.
        key: String,
        /// What was wrong.
        reason: String,
    },

    /// A stored record failed to decode.
    #[error("corrupt record {key}: {reason}")]
    CorruptRecord {
        /// Record key.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// Requested allocation is not strictly below the available funds.
    #[error("amount unavailable: requested {requested}, available {available}")]
    AmountUnavailable {
        /// Amount requested.
        requested: i64,
        /// Funds available for the project.
        available: i64,
    },

    /// A sum of stored amounts does not fit in an `i64`.
    #[error("amount overflow while totalling {0}")]
    AmountOverflow(String),

    /// Operation or query name not in the lookup table.
    #[error("received unknown function invocation: {0}")]
    UnknownOperation(String),

    /// Underlying store failure.
    #[error("state store error: {0}")]
    StateStore(#[from] StoreError),
}

impl ChaincodeError {
    /// Stable error code reported to callers.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArgumentCount { .. } => "ArgumentCountError",
            Self::InvalidNumericArgument { .. } => "InvalidNumericArgument",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::Unauthorized { .. } => "Unauthorized",
            Self::NotFound(_) => "NotFound",
            Self::AlreadyExists(_) => "AlreadyExists",
            Self::CorruptIndex { .. } => "CorruptIndex",
            Self::CorruptRecord { .. } => "CorruptRecord",
            Self::AmountUnavailable { .. } => "AmountUnavailable",
            Self::AmountOverflow(_) => "AmountOverflow",
            Self::UnknownOperation(_) => "UnknownOperation",
            Self::StateStore(_) => "StateStoreError",
        }
    }

    /// True when the failure was caused by the caller's input rather than by
    /// ledger state or the store.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ArgumentCount { .. }
                | Self::InvalidNumericArgument { .. }
                | Self::InvalidArgument(_)
                | Self::Unauthorized { .. }
                | Self::UnknownOperation(_)
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
