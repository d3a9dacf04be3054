//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `Chaincode`
//! - **Driven Port (Outbound)**: `StateStore`
//! - No concrete implementations in this module

pub mod chaincode;
pub mod store;

pub use chaincode::*;
pub use store::*;
