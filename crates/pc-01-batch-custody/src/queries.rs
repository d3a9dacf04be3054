//! # Query Surface
//!
//! Read-only projections over the batch index. Queries never write, so the
//! same query against the same state returns the same bytes.
//!
//! Two invocation shapes are accepted: `(queryName, [arg])`, and the legacy
//! positional form `(_, [queryName, arg])`.

use shared_ledger::{
    checked_total, expect_arity, records, Arity, ChaincodeError, LedgerConfig, Role, StateStore,
    BATCH_INDEX,
};

use crate::domain::entities::{Batch, BatchDetailsList, BatchIdList};
use crate::handlers::load_batch;

/// Read-only queries of the custody contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustodyQuery {
    /// One batch by id.
    GetBatch(String),
    /// Ids of batches owned by a user; a certifier sees every id.
    GetAllBatches(String),
    /// Batches owned by a user, without history or signature.
    GetAllBatchesDetails(String),
    /// Total items across batches owned by a user.
    GetNbItems(String),
}

type QueryBuilder = fn(String) -> CustodyQuery;

static QUERIES: [(&str, QueryBuilder); 4] = [
    ("getBatch", CustodyQuery::GetBatch),
    ("getAllBatches", CustodyQuery::GetAllBatches),
    ("getAllBatchesDetails", CustodyQuery::GetAllBatchesDetails),
    ("getNbItems", CustodyQuery::GetNbItems),
];

fn lookup(name: &str) -> Option<QueryBuilder> {
    QUERIES
        .iter()
        .find(|(query, _)| *query == name)
        .map(|(_, build)| *build)
}

impl CustodyQuery {
    /// Select the query named by `function`, or by `args[0]` in the legacy
    /// positional form.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, ChaincodeError> {
        if let Some(build) = lookup(function) {
            expect_arity(function, args, Arity::Exact(1))?;
            return Ok(build(args[0].clone()));
        }
        if let [name, arg] = args {
            if let Some(build) = lookup(name) {
                return Ok(build(arg.clone()));
            }
        }
        Err(ChaincodeError::UnknownOperation(function.to_string()))
    }

    /// Query name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetBatch(_) => "getBatch",
            Self::GetAllBatches(_) => "getAllBatches",
            Self::GetAllBatchesDetails(_) => "getAllBatchesDetails",
            Self::GetNbItems(_) => "getNbItems",
        }
    }
}

/// Run `query` and encode its result.
pub fn execute<S: StateStore + ?Sized>(
    store: &S,
    config: &LedgerConfig,
    query: &CustodyQuery,
) -> Result<Vec<u8>, ChaincodeError> {
    match query {
        CustodyQuery::GetBatch(id) => records::encode(&load_batch(store, id)?),
        CustodyQuery::GetAllBatches(user) => records::encode(&all_batches(store, config, user)?),
        CustodyQuery::GetAllBatchesDetails(user) => {
            records::encode(&all_batches_details(store, user)?)
        }
        CustodyQuery::GetNbItems(user) => records::encode(&nb_items(store, user)?),
    }
}

/// Ids of batches owned by `user`, or all ids if `user` is the certifier.
pub fn all_batches<S: StateStore + ?Sized>(
    store: &S,
    config: &LedgerConfig,
    user: &str,
) -> Result<BatchIdList, ChaincodeError> {
    let sees_all = config
        .roles
        .resolve(user)
        .is_some_and(Role::bypasses_owner_filter);
    let batches = BATCH_INDEX
        .list_filtered(store, |batch: &Batch| sees_all || batch.owner == user)?
        .into_iter()
        .map(|batch| batch.id)
        .collect();
    Ok(BatchIdList { batches })
}

/// Redacted batches owned by `user`. No certifier bypass here.
pub fn all_batches_details<S: StateStore + ?Sized>(
    store: &S,
    user: &str,
) -> Result<BatchDetailsList, ChaincodeError> {
    let batches = BATCH_INDEX
        .list_filtered(store, |batch: &Batch| batch.owner == user)?
        .iter()
        .map(Batch::redacted)
        .collect();
    Ok(BatchDetailsList { batches })
}

/// Sum of `quantity` over batches owned by `user`.
///
/// # Errors
///
/// `AmountOverflow` if the quantities do not sum within `i64`.
pub fn nb_items<S: StateStore + ?Sized>(store: &S, user: &str) -> Result<i64, ChaincodeError> {
    let owned: Vec<Batch> = BATCH_INDEX.list_filtered(store, |batch: &Batch| batch.owner == user)?;
    checked_total(
        &format!("items owned by {user}"),
        owned.iter().map(|batch| batch.quantity),
    )
}
