//! # Fund Entities
//!
//! A donation's balance is never stored: it is the signed sum of its
//! transaction amounts. Suppliers hold one positive summary transaction per
//! completed allocation.

use serde::{Deserialize, Serialize};
use shared_ledger::records::nullable_vec;
use shared_ledger::{checked_total, next_transaction_id, ChaincodeError, TransactionKind};

// =============================================================================
// FUND TRANSACTION
// =============================================================================

/// One fund movement. Negative amounts are withdrawals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundTransaction {
    /// `<donationId>T<index>`, or the summary id on a supplier.
    #[serde(default)]
    pub id: String,
    /// Caller-supplied date. Empty for allocation entries.
    #[serde(rename = "tdate", default)]
    pub date: String,
    /// Counterparty supplier id. Empty for CREATE.
    #[serde(default)]
    pub destination: String,
    /// Signed amount.
    pub amount: i64,
    /// Project the funds belong to.
    #[serde(rename = "projectID")]
    pub project_id: String,
    /// Movement tag.
    #[serde(rename = "ttype")]
    pub kind: TransactionKind,
    /// Free-form allocation details.
    #[serde(default)]
    pub details: String,
}

// =============================================================================
// DONATION
// =============================================================================

/// A pledge of funds to one project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    /// Primary key.
    pub id: String,
    /// Donor identity.
    pub owner: String,
    /// Amount pledged at creation. Informational; see [`Donation::balance`].
    pub amount: i64,
    /// Project the pledge is for.
    #[serde(rename = "projectID")]
    pub project_id: String,
    /// Append-only movements.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub transactions: Vec<FundTransaction>,
}

impl Donation {
    /// New donation with its CREATE transaction.
    #[must_use]
    pub fn new(id: &str, owner: &str, amount: i64, project_id: &str, date: &str) -> Self {
        let mut donation = Self {
            id: id.to_string(),
            owner: owner.to_string(),
            amount,
            project_id: project_id.to_string(),
            transactions: Vec::new(),
        };
        donation.transactions.push(FundTransaction {
            id: next_transaction_id(id, 0),
            date: date.to_string(),
            destination: String::new(),
            amount,
            project_id: project_id.to_string(),
            kind: TransactionKind::Create,
            details: String::new(),
        });
        donation
    }

    /// Funds still available: the sum of every transaction amount.
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if the stored amounts do not sum within `i64`.
    pub fn balance(&self) -> Result<i64, ChaincodeError> {
        checked_total(&format!("balance of {}", self.id), self.transactions.iter().map(|tx| tx.amount))
    }

    /// Append a withdrawal of `amount` to `supplier_id`. Returns the new
    /// transaction id.
    pub fn withdraw(&mut self, amount: i64, supplier_id: &str, details: &str) -> String {
        let id = next_transaction_id(&self.id, self.transactions.len());
        self.transactions.push(FundTransaction {
            id: id.clone(),
            date: String::new(),
            destination: supplier_id.to_string(),
            amount: -amount,
            project_id: self.project_id.clone(),
            kind: TransactionKind::Transfer,
            details: details.to_string(),
        });
        id
    }
}

// =============================================================================
// SUPPLIER
// =============================================================================

/// A recipient of allocated funds. Created on first allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Primary key.
    pub id: String,
    /// One summary entry per completed allocation.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub transactions: Vec<FundTransaction>,
}

impl Supplier {
    /// Supplier with no history.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            transactions: Vec::new(),
        }
    }

    /// Total received across all summaries.
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if the summaries do not sum within `i64`.
    pub fn received(&self) -> Result<i64, ChaincodeError> {
        checked_total(&format!("receipts of {}", self.id), self.transactions.iter().map(|tx| tx.amount))
    }
}

// =============================================================================
// LISTING PAYLOADS
// =============================================================================

/// `{"donations": [ids]}` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationIdList {
    /// Donation ids in registration order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub donations: Vec<String>,
}

/// `{"suppliers": [ids]}` listing, one entry per allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierIdList {
    /// Supplier ids in allocation order, duplicates kept.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub suppliers: Vec<String>,
}
