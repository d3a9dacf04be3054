//! # Operation Selection
//!
//! Invocation names map through a static table to a closed set of
//! operations. Parsing checks, in order: the name, the argument count, the
//! invoking role, then numeric fields. Nothing here reads state.

use shared_ledger::{expect_arity, parse_positive, Arity, ChaincodeError, Role, RoleDirectory};

// =============================================================================
// ARGUMENT SHAPES
// =============================================================================

/// `createBatch(id, type, role, quantity, date, location)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateBatch {
    /// New batch id.
    pub id: String,
    /// Product type.
    pub batch_type: String,
    /// Invoking role (always Producer once parsed).
    pub role: Role,
    /// Initial quantity, at least 1.
    pub quantity: i64,
    /// Transaction date.
    pub date: String,
    /// Transaction location.
    pub location: String,
}

/// `claimBatch(batchId, role, date, location)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimBatch {
    /// Target batch.
    pub batch_id: String,
    /// Invoking role (Shipper).
    pub role: Role,
    /// Transaction date.
    pub date: String,
    /// Transaction location.
    pub location: String,
}

/// `transferBatch(batchId, role, date, location, newOwner, signature)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferBatch {
    /// Target batch.
    pub batch_id: String,
    /// Invoking role (Shipper).
    pub role: Role,
    /// Transaction date.
    pub date: String,
    /// Transaction location.
    pub location: String,
    /// Receiving identity.
    pub new_owner: String,
    /// Receiver's signature.
    pub signature: String,
}

/// `sellBatchItem(batchId, role, date, location, quantity, buyer)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SellBatchItem {
    /// Target batch.
    pub batch_id: String,
    /// Invoking role (Retailer).
    pub role: Role,
    /// Transaction date.
    pub date: String,
    /// Transaction location.
    pub location: String,
    /// Items sold, at least 1.
    pub quantity: i64,
    /// Buyer identity.
    pub buyer: String,
}

/// `updateBatchQuality(role, date, location, quality)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateBatchQuality {
    /// Invoking role (Shipper).
    pub role: Role,
    /// Transaction date.
    pub date: String,
    /// Transaction location.
    pub location: String,
    /// New quality label.
    pub quality: String,
}

/// Every state-changing operation of the custody contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustodyOperation {
    /// Producer registers a new batch.
    CreateBatch(CreateBatch),
    /// Shipper takes custody.
    ClaimBatch(ClaimBatch),
    /// Shipper hands over to a new owner.
    TransferBatch(TransferBatch),
    /// Retailer sells items out of a batch.
    SellBatchItem(SellBatchItem),
    /// Shipper reports quality on everything it holds.
    UpdateBatchQuality(UpdateBatchQuality),
}

// =============================================================================
// LOOKUP TABLE
// =============================================================================

type Builder = fn(Role, &[String]) -> Result<CustodyOperation, ChaincodeError>;

struct OperationEntry {
    name: &'static str,
    arity: Arity,
    /// Position of the role argument.
    role_arg: usize,
    required: Role,
    build: Builder,
}

static OPERATIONS: [OperationEntry; 5] = [
    OperationEntry {
        name: "createBatch",
        arity: Arity::Exact(6),
        role_arg: 2,
        required: Role::Producer,
        build: build_create,
    },
    OperationEntry {
        name: "claimBatch",
        arity: Arity::Exact(4),
        role_arg: 1,
        required: Role::Shipper,
        build: build_claim,
    },
    OperationEntry {
        name: "transferBatch",
        arity: Arity::Exact(6),
        role_arg: 1,
        required: Role::Shipper,
        build: build_transfer,
    },
    OperationEntry {
        name: "sellBatchItem",
        arity: Arity::Exact(6),
        role_arg: 1,
        required: Role::Retailer,
        build: build_sell,
    },
    OperationEntry {
        name: "updateBatchQuality",
        arity: Arity::Exact(4),
        role_arg: 0,
        required: Role::Shipper,
        build: build_update_quality,
    },
];

fn build_create(role: Role, args: &[String]) -> Result<CustodyOperation, ChaincodeError> {
    Ok(CustodyOperation::CreateBatch(CreateBatch {
        id: args[0].clone(),
        batch_type: args[1].clone(),
        role,
        quantity: parse_positive("quantity", &args[3])?,
        date: args[4].clone(),
        location: args[5].clone(),
    }))
}

fn build_claim(role: Role, args: &[String]) -> Result<CustodyOperation, ChaincodeError> {
    Ok(CustodyOperation::ClaimBatch(ClaimBatch {
        batch_id: args[0].clone(),
        role,
        date: args[2].clone(),
        location: args[3].clone(),
    }))
}

fn build_transfer(role: Role, args: &[String]) -> Result<CustodyOperation, ChaincodeError> {
    Ok(CustodyOperation::TransferBatch(TransferBatch {
        batch_id: args[0].clone(),
        role,
        date: args[2].clone(),
        location: args[3].clone(),
        new_owner: args[4].clone(),
        signature: args[5].clone(),
    }))
}

fn build_sell(role: Role, args: &[String]) -> Result<CustodyOperation, ChaincodeError> {
    Ok(CustodyOperation::SellBatchItem(SellBatchItem {
        batch_id: args[0].clone(),
        role,
        date: args[2].clone(),
        location: args[3].clone(),
        quantity: parse_positive("quantity", &args[4])?,
        buyer: args[5].clone(),
    }))
}

fn build_update_quality(role: Role, args: &[String]) -> Result<CustodyOperation, ChaincodeError> {
    Ok(CustodyOperation::UpdateBatchQuality(UpdateBatchQuality {
        role,
        date: args[1].clone(),
        location: args[2].clone(),
        quality: args[3].clone(),
    }))
}

impl CustodyOperation {
    /// Select and build the operation named `function`.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` for a name not in the table
    /// - `ArgumentCount` for the wrong number of arguments
    /// - `Unauthorized` when the role argument does not resolve to the required role
    /// - `InvalidNumericArgument` for a bad quantity
    pub fn parse(
        function: &str,
        args: &[String],
        roles: &RoleDirectory,
    ) -> Result<Self, ChaincodeError> {
        let entry = OPERATIONS
            .iter()
            .find(|entry| entry.name == function)
            .ok_or_else(|| ChaincodeError::UnknownOperation(function.to_string()))?;
        expect_arity(entry.name, args, entry.arity)?;
        let role = roles.authorize(entry.name, &args[entry.role_arg], entry.required)?;
        (entry.build)(role, args)
    }

    /// Invocation name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateBatch(_) => "createBatch",
            Self::ClaimBatch(_) => "claimBatch",
            Self::TransferBatch(_) => "transferBatch",
            Self::SellBatchItem(_) => "sellBatchItem",
            Self::UpdateBatchQuality(_) => "updateBatchQuality",
        }
    }

    /// Every invocation name, in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        OPERATIONS.iter().map(|entry| entry.name)
    }
}
