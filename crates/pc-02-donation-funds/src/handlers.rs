//! # Fund Handlers
//!
//! Donation creation and allocation. Allocation touches several records
//! (every drawn donation, the supplier, the supplier index) and relies on
//! the invocation's write set for all-or-nothing application.

use chain_telemetry::log_asset_event;
use serde::Serialize;
use shared_ledger::{
    is_reserved_key, records, ChaincodeError, StateStore, TransactionKind, DONATION_INDEX,
    SUPPLIER_INDEX,
};

use crate::algorithms::allocation::plan_allocation;
use crate::domain::entities::{Donation, FundTransaction, Supplier};
use crate::operations::{Allocate, CreateDonation};
use crate::CONTRACT_NAME;

/// One donation debited by an allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WithdrawalRecord {
    /// Donation debited.
    #[serde(rename = "donationID")]
    pub donation_id: String,
    /// Transaction appended to the donation.
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    /// Amount drawn. Zero for a donation that was already drained.
    pub amount: i64,
}

/// What an allocation did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AllocationOutcome {
    /// Receiving supplier.
    #[serde(rename = "supplierID")]
    pub supplier_id: String,
    /// Project drawn from.
    #[serde(rename = "projectID")]
    pub project_id: String,
    /// Amount requested.
    pub requested: i64,
    /// Funds available before the allocation.
    pub available: i64,
    /// Donations debited, in index order.
    pub withdrawals: Vec<WithdrawalRecord>,
    /// Supplier summary transaction id, absent if the request was not covered.
    #[serde(rename = "summaryID")]
    pub summary_id: Option<String>,
}

fn reject_unusable_id(kind: &str, id: &str) -> Result<(), ChaincodeError> {
    if id.is_empty() || is_reserved_key(id) {
        return Err(ChaincodeError::InvalidArgument(format!(
            "{id:?} cannot be used as a {kind} id"
        )));
    }
    Ok(())
}

/// The donation a planned draw targets. The plan is built from
/// `donations`, so a miss means the index listing changed underneath it.
fn planned_donation<'a>(
    donations: &'a mut [Donation],
    donation_id: &str,
) -> Result<&'a mut Donation, ChaincodeError> {
    donations
        .iter_mut()
        .find(|donation| donation.id == donation_id)
        .ok_or_else(|| ChaincodeError::CorruptIndex {
            key: DONATION_INDEX.key().to_string(),
            reason: format!("planned draw from unlisted donation {donation_id}"),
        })
}

/// Read a donation.
///
/// # Errors
///
/// `NotFound` if `id` is not a registered donation.
pub fn load_donation<S: StateStore + ?Sized>(store: &S, id: &str) -> Result<Donation, ChaincodeError> {
    if is_reserved_key(id) {
        return Err(ChaincodeError::NotFound(id.to_string()));
    }
    records::require(store, id)
}

/// Read a supplier.
///
/// # Errors
///
/// `NotFound` unless `id` has received an allocation.
pub fn load_supplier<S: StateStore + ?Sized>(store: &S, id: &str) -> Result<Supplier, ChaincodeError> {
    if !SUPPLIER_INDEX.list_all(store)?.iter().any(|known| known == id) {
        return Err(ChaincodeError::NotFound(id.to_string()));
    }
    records::require(store, id)
}

/// Record a new donation with its CREATE transaction.
///
/// # Errors
///
/// `InvalidArgument` for an unusable id, `AlreadyExists` if the id is taken.
pub fn create_donation<S: StateStore + ?Sized>(
    store: &S,
    op: &CreateDonation,
) -> Result<Donation, ChaincodeError> {
    reject_unusable_id("donation", &op.donation_id)?;
    if records::exists(store, &op.donation_id)? {
        return Err(ChaincodeError::AlreadyExists(op.donation_id.clone()));
    }

    let donation = Donation::new(&op.donation_id, &op.owner, op.amount, &op.project_id, &op.date);
    records::save(store, &donation.id, &donation)?;
    DONATION_INDEX.register(store, &donation.id)?;

    log_asset_event!(
        info,
        CONTRACT_NAME,
        "donation created",
        donation.id,
        project = %donation.project_id,
        amount = donation.amount
    );
    Ok(donation)
}

/// Move `op.amount` of project funds to a supplier.
///
/// The supplier is upserted and appended to the supplier index on every
/// call, before any donation is debited.
///
/// # Errors
///
/// `AmountUnavailable` unless the project holds strictly more than requested,
/// `AmountOverflow` if the project's balances cannot be totalled.
/// `InvalidArgument` if the supplier id names a donation or an index key.
pub fn allocate<S: StateStore + ?Sized>(
    store: &S,
    op: &Allocate,
) -> Result<AllocationOutcome, ChaincodeError> {
    let mut donations: Vec<Donation> =
        DONATION_INDEX.list_filtered(store, |donation: &Donation| donation.project_id == op.project_id)?;
    let plan = plan_allocation(&donations, op.amount)?;

    reject_unusable_id("supplier", &op.supplier_id)?;
    if DONATION_INDEX.list_all(store)?.contains(&op.supplier_id) {
        return Err(ChaincodeError::InvalidArgument(format!(
            "supplier id {:?} is a donation",
            op.supplier_id
        )));
    }
    let mut supplier = match records::load::<Supplier, _>(store, &op.supplier_id)? {
        Some(existing) => existing,
        None => Supplier::new(&op.supplier_id),
    };
    SUPPLIER_INDEX.register(store, &supplier.id)?;

    let mut withdrawals = Vec::with_capacity(plan.withdrawals.len());
    for draw in &plan.withdrawals {
        let donation = planned_donation(&mut donations, &draw.donation_id)?;
        let transaction_id = donation.withdraw(draw.amount, &supplier.id, &op.details);
        records::save(store, &donation.id, &*donation)?;
        withdrawals.push(WithdrawalRecord {
            donation_id: donation.id.clone(),
            transaction_id,
            amount: draw.amount,
        });
    }

    let summary_id = match withdrawals.last() {
        Some(last) if plan.is_complete() => {
            let id = format!("{}S", last.transaction_id);
            supplier.transactions.push(FundTransaction {
                id: id.clone(),
                date: String::new(),
                destination: supplier.id.clone(),
                amount: op.amount,
                project_id: op.project_id.clone(),
                kind: TransactionKind::Transfer,
                details: op.details.clone(),
            });
            Some(id)
        }
        _ => None,
    };
    records::save(store, &supplier.id, &supplier)?;

    log_asset_event!(
        info,
        CONTRACT_NAME,
        "funds allocated",
        supplier.id,
        project = %op.project_id,
        requested = op.amount,
        donations = withdrawals.len()
    );

    Ok(AllocationOutcome {
        supplier_id: supplier.id,
        project_id: op.project_id.clone(),
        requested: op.amount,
        available: plan.available,
        withdrawals,
        summary_id,
    })
}
