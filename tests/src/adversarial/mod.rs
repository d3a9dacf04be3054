//! Calls a hostile or careless client would try.

pub mod ledger_atomicity;
pub mod role_spoofing;
