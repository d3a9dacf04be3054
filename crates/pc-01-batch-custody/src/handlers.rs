//! # Transition Handlers
//!
//! The batch state machine. Each handler performs one read-modify-write per
//! batch it touches and appends exactly one transaction to each. Handlers
//! assume the operation was parsed (arity and role already checked) and run
//! against the invocation's write set, so an error after a write leaves the
//! underlying store untouched.

use chain_telemetry::log_asset_event;
use shared_ledger::{
    is_reserved_key, records, ChaincodeError, LedgerConfig, StateStore, TransactionKind,
    BATCH_INDEX,
};

use crate::domain::entities::Batch;
use crate::operations::{ClaimBatch, CreateBatch, SellBatchItem, TransferBatch, UpdateBatchQuality};
use crate::CONTRACT_NAME;

/// Read a batch for mutation.
///
/// # Errors
///
/// `NotFound` if no batch is stored under `id`.
pub fn load_batch<S: StateStore + ?Sized>(store: &S, id: &str) -> Result<Batch, ChaincodeError> {
    if is_reserved_key(id) {
        return Err(ChaincodeError::NotFound(id.to_string()));
    }
    records::require(store, id)
}

fn store_batch<S: StateStore + ?Sized>(store: &S, batch: &Batch) -> Result<(), ChaincodeError> {
    records::save(store, &batch.id, batch)
}

/// Register a new batch owned by the producer.
///
/// # Errors
///
/// `InvalidArgument` for an empty or reserved id, `AlreadyExists` if the id
/// is taken.
pub fn create_batch<S: StateStore + ?Sized>(
    store: &S,
    config: &LedgerConfig,
    op: &CreateBatch,
) -> Result<Batch, ChaincodeError> {
    if op.id.is_empty() || is_reserved_key(&op.id) {
        return Err(ChaincodeError::InvalidArgument(format!(
            "{:?} cannot be used as a batch id",
            op.id
        )));
    }
    if records::exists(store, &op.id)? {
        return Err(ChaincodeError::AlreadyExists(op.id.clone()));
    }

    let owner = config.roles.identity(op.role);
    let mut batch = Batch::new(&op.id, &op.batch_type, owner, op.quantity);
    batch.record(TransactionKind::Create, &op.date, &op.location);

    store_batch(store, &batch)?;
    BATCH_INDEX.register(store, &batch.id)?;

    log_asset_event!(info, CONTRACT_NAME, "batch created", batch.id, quantity = batch.quantity);
    Ok(batch)
}

/// Shipper takes custody of a batch.
pub fn claim_batch<S: StateStore + ?Sized>(
    store: &S,
    config: &LedgerConfig,
    op: &ClaimBatch,
) -> Result<Batch, ChaincodeError> {
    let mut batch = load_batch(store, &op.batch_id)?;
    batch.owner = config.roles.identity(op.role).to_string();
    batch.record(TransactionKind::Claim, &op.date, &op.location);
    store_batch(store, &batch)?;

    log_asset_event!(info, CONTRACT_NAME, "batch claimed", batch.id, owner = %batch.owner);
    Ok(batch)
}

/// Shipper hands a batch to a new owner, recording their signature.
pub fn transfer_batch<S: StateStore + ?Sized>(
    store: &S,
    op: &TransferBatch,
) -> Result<Batch, ChaincodeError> {
    let mut batch = load_batch(store, &op.batch_id)?;
    batch.owner = op.new_owner.clone();
    batch.signature = op.signature.clone();
    batch.record(TransactionKind::Transfer, &op.date, &op.location);
    store_batch(store, &batch)?;

    log_asset_event!(info, CONTRACT_NAME, "batch transferred", batch.id, owner = %batch.owner);
    Ok(batch)
}

/// Retailer sells `op.quantity` items. A batch sold down to zero is handed
/// to the unassigned owner.
///
/// # Errors
///
/// `InvalidArgument` if fewer than `op.quantity` items remain.
pub fn sell_batch_item<S: StateStore + ?Sized>(
    store: &S,
    config: &LedgerConfig,
    op: &SellBatchItem,
) -> Result<Batch, ChaincodeError> {
    let mut batch = load_batch(store, &op.batch_id)?;

    let remaining = batch.quantity - op.quantity;
    if remaining < 0 {
        return Err(ChaincodeError::InvalidArgument(format!(
            "cannot sell {} items from batch {} holding {}",
            op.quantity, batch.id, batch.quantity
        )));
    }

    batch.quantity = remaining;
    if remaining == 0 {
        batch.owner = config.unassigned_owner.clone();
    }
    batch.record_sale(op.quantity, &op.buyer, &op.date, &op.location);
    store_batch(store, &batch)?;

    log_asset_event!(
        info,
        CONTRACT_NAME,
        "batch items sold",
        batch.id,
        sold = op.quantity,
        remaining = remaining
    );
    Ok(batch)
}

/// Set the quality of every batch the invoking shipper holds. Returns the
/// ids touched, in index order.
pub fn update_batch_quality<S: StateStore + ?Sized>(
    store: &S,
    config: &LedgerConfig,
    op: &UpdateBatchQuality,
) -> Result<Vec<String>, ChaincodeError> {
    let shipper = config.roles.identity(op.role);
    let held: Vec<Batch> = BATCH_INDEX.list_filtered(store, |batch: &Batch| batch.owner == shipper)?;

    let mut updated = Vec::with_capacity(held.len());
    for mut batch in held {
        batch.quality = op.quality.clone();
        batch.record(TransactionKind::UpdateQuality, &op.date, &op.location);
        store_batch(store, &batch)?;
        updated.push(batch.id);
    }

    tracing::info!(
        contract = CONTRACT_NAME,
        shipper,
        quality = %op.quality,
        batches = updated.len(),
        "batch quality updated"
    );
    Ok(updated)
}

// =============================================================================
// TESTS
// =============================================================================
