//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete `StateStore` implementations and the per-invocation write set.

pub mod memory;
pub mod snapshot;
pub mod write_set;

pub use memory::*;
pub use snapshot::*;
pub use write_set::*;
