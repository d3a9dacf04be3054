//! # Domain Layer (Inner Hexagon)
//!
//! Roles, argument shapes and transaction id rules.
//! NO I/O. Nothing here touches a store.

pub mod args;
pub mod history;
pub mod roles;

pub use args::*;
pub use history::*;
pub use roles::*;
