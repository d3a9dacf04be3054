//! # Domain Invariants

use super::entities::{Donation, Supplier};
use shared_ledger::domain::history::is_sequential;

/// Invariant: allocations never overdraw a donation.
#[must_use]
pub fn invariant_balance_non_negative(donation: &Donation) -> bool {
    donation.balance().is_ok_and(|balance| balance >= 0)
}

/// Invariant: donation transaction ids are `<id>T1 .. <id>Tn` in order.
#[must_use]
pub fn invariant_history_sequential(donation: &Donation) -> bool {
    is_sequential(&donation.id, donation.transactions.iter().map(|tx| tx.id.as_str()))
}

/// Invariant: only the CREATE entry adds funds to a donation. Draws from a
/// drained donation are recorded with amount zero.
#[must_use]
pub fn invariant_withdrawals_negative(donation: &Donation) -> bool {
    donation.transactions.iter().skip(1).all(|tx| tx.amount <= 0)
}

/// Invariant: supplier summaries are positive and carry the `S` suffix.
#[must_use]
pub fn invariant_supplier_summaries(supplier: &Supplier) -> bool {
    supplier
        .transactions
        .iter()
        .all(|tx| tx.amount > 0 && tx.id.ends_with('S'))
}

/// Invariant: what left the donations is what the supplier received.
#[must_use]
pub fn invariant_conservation(withdrawn: i64, summary_amount: i64) -> bool {
    withdrawn == summary_amount
}

/// Check all single-donation invariants.
#[must_use]
pub fn check_all(donation: &Donation) -> bool {
    invariant_balance_non_negative(donation)
        && invariant_history_sequential(donation)
        && invariant_withdrawals_negative(donation)
}
