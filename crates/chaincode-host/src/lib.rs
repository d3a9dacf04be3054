//! # Chaincode Host
//!
//! Local harness for the contracts. A host owns one in-memory ledger, backed
//! by a JSON snapshot file, and one deployed contract. Scripts of invoke and
//! query calls are replayed against it in order; each call gets its own
//! result line and failed calls leave the ledger untouched.
//!
//! ```text
//! chaincode-host --contract custody --state ledger.json calls.jsonl
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! chaincode-host/
//! ├── errors.rs    # HostError
//! ├── registry.rs  # ContractKind, ContractRegistry
//! ├── script.rs    # Script lines and result lines
//! ├── host.rs      # ChaincodeHost
//! └── main.rs      # CLI
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod errors;
pub mod host;
pub mod registry;
pub mod script;

pub use errors::HostError;
pub use host::ChaincodeHost;
pub use registry::{ContractKind, ContractRegistry};
pub use script::{parse_script, InvocationLine, LineKind, LineResult, ScriptEntry};
