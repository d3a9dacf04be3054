//! # Transaction History
//!
//! Transaction ids are `<assetId>T<index>` where `index` is the 1-based
//! position in the owning record's own list at append time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction type tag stored in the `ttype` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Record created.
    #[serde(rename = "CREATE")]
    Create,
    /// Batch claimed by a shipper.
    #[serde(rename = "CLAIM")]
    Claim,
    /// Ownership moved, or funds moved to a supplier.
    #[serde(rename = "TRANSFER")]
    Transfer,
    /// Items sold out of a batch.
    #[serde(rename = "SELL")]
    Sell,
    /// Quality reported. Older records spell it with a space.
    #[serde(rename = "UPDATE_QUALITY", alias = "UPDATE QUALITY")]
    UpdateQuality,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Create => "CREATE",
            Self::Claim => "CLAIM",
            Self::Transfer => "TRANSFER",
            Self::Sell => "SELL",
            Self::UpdateQuality => "UPDATE_QUALITY",
        };
        f.write_str(tag)
    }
}

/// Id for the transaction at 1-based `index` of `asset_id`.
#[must_use]
pub fn transaction_id(asset_id: &str, index: usize) -> String {
    format!("{asset_id}T{index}")
}

/// Id for the next transaction appended to a list of `len` entries.
#[must_use]
pub fn next_transaction_id(asset_id: &str, len: usize) -> String {
    transaction_id(asset_id, len + 1)
}

/// Whether `ids` are exactly `<asset_id>T1 .. <asset_id>Tn` in order.
pub fn is_sequential<'a>(asset_id: &str, ids: impl IntoIterator<Item = &'a str>) -> bool {
    ids.into_iter()
        .enumerate()
        .all(|(pos, id)| id == transaction_id(asset_id, pos + 1))
}
