//! # Domain Layer (Inner Hexagon)
//!
//! Donations, suppliers and the rules they obey. NO I/O.

pub mod entities;
pub mod invariants;

pub use entities::*;
pub use invariants::*;
