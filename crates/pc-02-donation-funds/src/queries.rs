//! # Query Surface
//!
//! Read-only projections over donations and suppliers.

use shared_ledger::{
    expect_arity, records, Arity, ChaincodeError, StateStore, DONATION_INDEX, SUPPLIER_INDEX,
};

use crate::algorithms::allocation::available_funds;
use crate::domain::entities::{Donation, DonationIdList, SupplierIdList};
use crate::handlers::{load_donation, load_supplier};

/// Read-only queries of the funds contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FundQuery {
    /// One donation by id.
    GetDonation(String),
    /// Transaction list of one donation.
    GetTransactions(String),
    /// Ids of donations made by an owner.
    GetAllDonationsByUserId(String),
    /// Every donation id.
    GetAllDonations,
    /// One supplier by id.
    GetSupplier(String),
    /// Every supplier index entry, duplicates included.
    GetAllSuppliers,
    /// Funds available to a project.
    GetProjectBalance(String),
}

impl FundQuery {
    /// Select the query named `function`.
    ///
    /// Listing queries take no argument but tolerate one, since hosts
    /// always pass a single positional argument.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, ChaincodeError> {
        let single = |build: fn(String) -> FundQuery| -> Result<Self, ChaincodeError> {
            expect_arity(function, args, Arity::Exact(1))?;
            Ok(build(args[0].clone()))
        };
        let bare = |query: FundQuery| -> Result<Self, ChaincodeError> {
            expect_arity(function, args, Arity::Between(0, 1))?;
            Ok(query)
        };
        match function {
            "getDonation" => single(FundQuery::GetDonation),
            "getTransactions" => single(FundQuery::GetTransactions),
            "getAllDonationsByUserId" => single(FundQuery::GetAllDonationsByUserId),
            "getAllDonations" => bare(FundQuery::GetAllDonations),
            "getSupplier" => single(FundQuery::GetSupplier),
            "getAllSuppliers" => bare(FundQuery::GetAllSuppliers),
            "getProjectBalance" => single(FundQuery::GetProjectBalance),
            _ => Err(ChaincodeError::UnknownOperation(function.to_string())),
        }
    }

    /// Query name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetDonation(_) => "getDonation",
            Self::GetTransactions(_) => "getTransactions",
            Self::GetAllDonationsByUserId(_) => "getAllDonationsByUserId",
            Self::GetAllDonations => "getAllDonations",
            Self::GetSupplier(_) => "getSupplier",
            Self::GetAllSuppliers => "getAllSuppliers",
            Self::GetProjectBalance(_) => "getProjectBalance",
        }
    }
}

/// Run `query` and encode its result.
pub fn execute<S: StateStore + ?Sized>(store: &S, query: &FundQuery) -> Result<Vec<u8>, ChaincodeError> {
    match query {
        FundQuery::GetDonation(id) => records::encode(&load_donation(store, id)?),
        FundQuery::GetTransactions(id) => records::encode(&load_donation(store, id)?.transactions),
        FundQuery::GetAllDonationsByUserId(owner) => records::encode(&donations_by_owner(store, owner)?),
        FundQuery::GetAllDonations => records::encode(&DonationIdList {
            donations: DONATION_INDEX.list_all(store)?,
        }),
        FundQuery::GetSupplier(id) => records::encode(&load_supplier(store, id)?),
        FundQuery::GetAllSuppliers => records::encode(&SupplierIdList {
            suppliers: SUPPLIER_INDEX.list_all(store)?,
        }),
        FundQuery::GetProjectBalance(project) => records::encode(&project_balance(store, project)?),
    }
}

/// Ids of donations made by `owner`.
pub fn donations_by_owner<S: StateStore + ?Sized>(
    store: &S,
    owner: &str,
) -> Result<DonationIdList, ChaincodeError> {
    let donations = DONATION_INDEX
        .list_filtered(store, |donation: &Donation| donation.owner == owner)?
        .into_iter()
        .map(|donation| donation.id)
        .collect();
    Ok(DonationIdList { donations })
}

/// Sum of donation balances for `project`.
pub fn project_balance<S: StateStore + ?Sized>(store: &S, project: &str) -> Result<i64, ChaincodeError> {
    let donations: Vec<Donation> =
        DONATION_INDEX.list_filtered(store, |donation: &Donation| donation.project_id == project)?;
    available_funds(&donations)
}
