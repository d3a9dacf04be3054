//! # Domain Invariants
//!
//! Rules every stored batch satisfies after any committed transition.

use super::entities::Batch;
use shared_ledger::domain::history::is_sequential;

/// Invariant: quantity never goes negative.
#[must_use]
pub fn invariant_quantity_non_negative(batch: &Batch) -> bool {
    batch.quantity >= 0
}

/// Invariant: transaction ids are `<id>T1 .. <id>Tn` in order.
#[must_use]
pub fn invariant_history_sequential(batch: &Batch) -> bool {
    is_sequential(&batch.id, batch.transactions.iter().map(|tx| tx.id.as_str()))
}

/// Invariant: a sold-out batch belongs to nobody.
#[must_use]
pub fn invariant_sold_out_unassigned(batch: &Batch, unassigned_owner: &str) -> bool {
    batch.quantity != 0 || batch.owner == unassigned_owner
}

/// Invariant: a transition appends exactly one entry and rewrites none.
#[must_use]
pub fn invariant_append_only(before: &Batch, after: &Batch) -> bool {
    after.transactions.len() == before.transactions.len() + 1
        && after.transactions.starts_with(&before.transactions)
}

/// Check all single-record invariants.
#[must_use]
pub fn check_all(batch: &Batch, unassigned_owner: &str) -> bool {
    invariant_quantity_non_negative(batch)
        && invariant_history_sequential(batch)
        && invariant_sold_out_unassigned(batch, unassigned_owner)
}
