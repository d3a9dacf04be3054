//! # Provenance-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Deployed contracts over fresh ledgers
//! │
//! ├── adversarial/      # Calls a hostile client would try
//! │   ├── role_spoofing.rs
//! │   └── ledger_atomicity.rs
//! │
//! └── integration/      # End-to-end contract flows
//!     ├── custody_flow.rs
//!     ├── funds_flow.rs
//!     └── host_replay.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pc-tests
//!
//! # By category
//! cargo test -p pc-tests integration::
//! cargo test -p pc-tests adversarial::
//!
//! # Benchmarks
//! cargo bench -p pc-tests
//! ```

#![allow(dead_code)]

pub mod adversarial;
pub mod integration;
