//! # Proportional Withdrawal Planning
//!
//! A withdrawal request for a project is satisfied by draining donations of
//! that project in registration order: each donation gives up its whole
//! balance until the one that can cover what is left, which gives up only
//! the remainder.
//!
//! A donation that is already drained still receives a draw of zero while
//! the request is open, so its history shows every allocation it took part
//! in.
//!
//! The request must be strictly below the project's available funds, so a
//! plan that passes the precondition always completes.

use shared_ledger::{checked_total, ChaincodeError};

use crate::domain::entities::Donation;

/// Draw of `amount` (zero or positive) from one donation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    /// Donation drawn from.
    pub donation_id: String,
    /// Amount drawn.
    pub amount: i64,
}

/// Ordered withdrawals satisfying one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationPlan {
    /// Amount requested.
    pub requested: i64,
    /// Project funds available before the plan.
    pub available: i64,
    /// Draws in donation registration order.
    pub withdrawals: Vec<Withdrawal>,
    /// Amount not covered. Zero for a complete plan.
    pub remaining: i64,
}

impl AllocationPlan {
    /// Whether the whole request is covered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Sum of every draw.
    #[must_use]
    pub fn total_withdrawn(&self) -> i64 {
        self.withdrawals.iter().map(|w| w.amount).sum()
    }
}

/// Sum of balances over `donations`.
///
/// # Errors
///
/// `AmountOverflow` if any balance or the total leaves the `i64` range.
pub fn available_funds(donations: &[Donation]) -> Result<i64, ChaincodeError> {
    let balances = donations
        .iter()
        .map(Donation::balance)
        .collect::<Result<Vec<_>, _>>()?;
    checked_total("project funds", balances)
}

/// Plan a withdrawal of `requested` across `donations`, which must already
/// be filtered to one project and be in registration order.
///
/// Drained donations get a zero draw. A negative balance can only come from
/// a hand-edited record and is skipped.
///
/// # Errors
///
/// `AmountUnavailable` unless `available > requested`, `AmountOverflow` if
/// the balances cannot be totalled.
pub fn plan_allocation(donations: &[Donation], requested: i64) -> Result<AllocationPlan, ChaincodeError> {
    let available = available_funds(donations)?;
    if available <= requested {
        return Err(ChaincodeError::AmountUnavailable {
            requested,
            available,
        });
    }

    let mut remaining = requested;
    let mut withdrawals = Vec::new();
    for donation in donations {
        if remaining == 0 {
            break;
        }
        let balance = donation.balance()?;
        if balance < 0 {
            continue;
        }
        let amount = balance.min(remaining);
        withdrawals.push(Withdrawal {
            donation_id: donation.id.clone(),
            amount,
        });
        remaining -= amount;
    }

    Ok(AllocationPlan {
        requested,
        available,
        withdrawals,
        remaining,
    })
}
