//! End-to-end contract flows.

pub mod custody_flow;
pub mod funds_flow;
pub mod host_replay;
