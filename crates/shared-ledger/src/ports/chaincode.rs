//! # Driving Port: Chaincode
//!
//! What a host can do with a contract: initialise its singleton keys, submit
//! a state-changing invocation, or run a read-only query. The store handle is
//! always an argument; contracts hold configuration, never state.

use crate::errors::ChaincodeError;
use crate::ports::store::StateStore;

/// A deployable contract.
pub trait Chaincode: Send + Sync {
    /// Short contract name used by hosts and logs.
    fn name(&self) -> &'static str;

    /// Write the contract's singleton index keys. Called once per deployment.
    fn init(&self, store: &dyn StateStore) -> Result<(), ChaincodeError>;

    /// Run one state-changing operation.
    ///
    /// Writes reach `store` only if the operation succeeds.
    fn invoke(
        &self,
        store: &dyn StateStore,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError>;

    /// Run one read-only query. Never writes.
    fn query(
        &self,
        store: &dyn StateStore,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError>;
}
