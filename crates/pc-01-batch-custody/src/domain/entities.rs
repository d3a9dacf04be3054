//! # Batch Entities
//!
//! A batch is a lot of goods tracked from producer to consumer. Its state is
//! implicit in `owner`, `quantity` and `quality`; every change appends one
//! snapshot transaction.

use serde::{Deserialize, Serialize};
use shared_ledger::records::nullable_vec;
use shared_ledger::{next_transaction_id, TransactionKind};

/// Quality every batch starts with.
pub const INITIAL_QUALITY: &str = "OK";

// =============================================================================
// BATCH
// =============================================================================

/// A tracked batch of goods.
///
/// Field order is the stored JSON order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Primary key.
    pub id: String,
    /// Product type.
    #[serde(rename = "bType")]
    pub batch_type: String,
    /// Current custodian identity, or the unassigned sentinel once sold out.
    pub owner: String,
    /// Items left. Decremented by sales.
    pub quantity: i64,
    /// Last reported quality.
    pub quality: String,
    /// Signature captured on the last transfer.
    pub signature: String,
    /// Append-only history.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub transactions: Vec<BatchTransaction>,
}

impl Batch {
    /// New batch with initial quality and no signature. History is empty
    /// until the caller records the CREATE snapshot.
    #[must_use]
    pub fn new(id: &str, batch_type: &str, owner: &str, quantity: i64) -> Self {
        Self {
            id: id.to_string(),
            batch_type: batch_type.to_string(),
            owner: owner.to_string(),
            quantity,
            quality: INITIAL_QUALITY.to_string(),
            signature: String::new(),
            transactions: Vec::new(),
        }
    }

    /// Append a snapshot of the current state tagged `kind`.
    pub fn record(&mut self, kind: TransactionKind, date: &str, location: &str) {
        let entry = BatchTransaction {
            id: next_transaction_id(&self.id, self.transactions.len()),
            batch_type: self.batch_type.clone(),
            owner: self.owner.clone(),
            quantity: self.quantity,
            quality: self.quality.clone(),
            signature: self.signature.clone(),
            date: date.to_string(),
            location: location.to_string(),
            kind,
        };
        self.transactions.push(entry);
    }

    /// Append a SELL entry. Sales record the buyer and the sold count, not
    /// the batch's own owner and quantity.
    pub fn record_sale(&mut self, sold: i64, buyer: &str, date: &str, location: &str) {
        let entry = BatchTransaction {
            id: next_transaction_id(&self.id, self.transactions.len()),
            batch_type: self.batch_type.clone(),
            owner: buyer.to_string(),
            quantity: sold,
            quality: self.quality.clone(),
            signature: String::new(),
            date: date.to_string(),
            location: location.to_string(),
            kind: TransactionKind::Sell,
        };
        self.transactions.push(entry);
    }

    /// Copy without history or signature, for owner listings.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            signature: String::new(),
            transactions: Vec::new(),
            ..self.clone()
        }
    }

    /// Last transaction, if any.
    #[must_use]
    pub fn last_transaction(&self) -> Option<&BatchTransaction> {
        self.transactions.last()
    }
}

// =============================================================================
// BATCH TRANSACTION
// =============================================================================

/// One history entry: a snapshot of the batch after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTransaction {
    /// `<batchId>T<index>`. Absent on legacy entries.
    #[serde(default)]
    pub id: String,
    /// Product type.
    #[serde(rename = "bType")]
    pub batch_type: String,
    /// Owner after the transition (buyer for sales).
    pub owner: String,
    /// Quantity after the transition (items sold for sales).
    pub quantity: i64,
    /// Quality after the transition.
    pub quality: String,
    /// Signature after the transition.
    pub signature: String,
    /// Caller-supplied date.
    #[serde(rename = "vDate")]
    pub date: String,
    /// Caller-supplied location.
    pub location: String,
    /// Transition tag.
    #[serde(rename = "ttype")]
    pub kind: TransactionKind,
}

// =============================================================================
// LISTING PAYLOADS
// =============================================================================

/// `{"batches": [ids]}` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchIdList {
    /// Batch ids in registration order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub batches: Vec<String>,
}

/// `{"batches": [records]}` listing with history and signature stripped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDetailsList {
    /// Redacted batches in registration order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub batches: Vec<Batch>,
}

// =============================================================================
// TESTS
// =============================================================================
