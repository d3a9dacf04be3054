//! # Algorithms Module
//!
//! Pure fund allocation planning. No store access.

pub mod allocation;

pub use allocation::{available_funds, plan_allocation, AllocationPlan, Withdrawal};
