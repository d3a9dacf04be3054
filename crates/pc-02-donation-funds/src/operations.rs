//! # Operation Selection

use shared_ledger::{expect_arity, parse_positive, Arity, ChaincodeError};

/// `createDonation(amount, projectId, owner, donationId, date)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateDonation {
    /// Pledged amount, at least 1.
    pub amount: i64,
    /// Project funded.
    pub project_id: String,
    /// Donor identity.
    pub owner: String,
    /// New donation id.
    pub donation_id: String,
    /// Creation date.
    pub date: String,
}

/// `transfer(supplierId, projectId, amount, [details])`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocate {
    /// Receiving supplier.
    pub supplier_id: String,
    /// Project whose donations are drawn.
    pub project_id: String,
    /// Amount requested, at least 1.
    pub amount: i64,
    /// Free-form details, empty when omitted.
    pub details: String,
}

/// Every state-changing operation of the funds contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FundOperation {
    /// Record a new donation.
    CreateDonation(CreateDonation),
    /// Move project funds to a supplier.
    Allocate(Allocate),
}

type Builder = fn(&[String]) -> Result<FundOperation, ChaincodeError>;

static OPERATIONS: [(&str, Arity, Builder); 2] = [
    ("createDonation", Arity::Exact(5), build_create),
    ("transfer", Arity::Between(3, 4), build_allocate),
];

fn build_create(args: &[String]) -> Result<FundOperation, ChaincodeError> {
    Ok(FundOperation::CreateDonation(CreateDonation {
        amount: parse_positive("amount", &args[0])?,
        project_id: args[1].clone(),
        owner: args[2].clone(),
        donation_id: args[3].clone(),
        date: args[4].clone(),
    }))
}

fn build_allocate(args: &[String]) -> Result<FundOperation, ChaincodeError> {
    Ok(FundOperation::Allocate(Allocate {
        supplier_id: args[0].clone(),
        project_id: args[1].clone(),
        amount: parse_positive("amount", &args[2])?,
        details: args.get(3).cloned().unwrap_or_default(),
    }))
}

impl FundOperation {
    /// Select and build the operation named `function`.
    ///
    /// # Errors
    ///
    /// `UnknownOperation`, `ArgumentCount` or `InvalidNumericArgument`.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, ChaincodeError> {
        let (name, arity, build) = OPERATIONS
            .iter()
            .find(|(name, _, _)| *name == function)
            .ok_or_else(|| ChaincodeError::UnknownOperation(function.to_string()))?;
        expect_arity(name, args, *arity)?;
        build(args)
    }

    /// Invocation name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateDonation(_) => "createDonation",
            Self::Allocate(_) => "transfer",
        }
    }
}
