//! # Ports Layer
//!
//! The typed driving port of the custody contract. The driven port is
//! `shared_ledger::StateStore`.

pub mod inbound;

pub use inbound::*;
