//! # Role Authorization
//!
//! Closed role set and the directory mapping each role to the identity string
//! invokers present on the wire. Identities are matched case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ChaincodeError;

/// Participant roles in the custody chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Creates batches.
    Producer,
    /// Claims and transfers batches, reports quality.
    Shipper,
    /// Sells items out of batches.
    Retailer,
    /// End buyer.
    Consumer,
    /// Auditor; sees every batch in listings.
    Certifier,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Producer,
        Role::Shipper,
        Role::Retailer,
        Role::Consumer,
        Role::Certifier,
    ];

    /// Whether this role may act where `required` is demanded.
    #[must_use]
    pub fn permits(self, required: Role) -> bool {
        self == required
    }

    /// Whether listings by this role ignore the owner filter.
    #[must_use]
    pub fn bypasses_owner_filter(self) -> bool {
        self == Role::Certifier
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Producer => "Producer",
            Role::Shipper => "Shipper",
            Role::Retailer => "Retailer",
            Role::Consumer => "Consumer",
            Role::Certifier => "Certifier",
        };
        f.write_str(name)
    }
}

/// Pure role check.
///
/// # Errors
///
/// `Unauthorized` when `invoking` does not satisfy `required`.
pub fn authorize(
    operation: &str,
    identity: &str,
    invoking: Option<Role>,
    required: Role,
) -> Result<Role, ChaincodeError> {
    match invoking {
        Some(role) if role.permits(required) => Ok(role),
        _ => Err(ChaincodeError::Unauthorized {
            operation: operation.to_string(),
            identity: identity.to_string(),
            required,
        }),
    }
}

/// Identity strings for each role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDirectory {
    /// Producer identity.
    pub producer: String,
    /// Shipper identity.
    pub shipper: String,
    /// Retailer identity.
    pub retailer: String,
    /// Consumer identity.
    pub consumer: String,
    /// Certifier identity.
    pub certifier: String,
}

impl Default for RoleDirectory {
    fn default() -> Self {
        Self {
            producer: "FISHCO".to_string(),
            shipper: "SHIPPINGCO".to_string(),
            retailer: "RETAILER".to_string(),
            consumer: "CONSUMER".to_string(),
            certifier: "CERTIFIER".to_string(),
        }
    }
}

impl RoleDirectory {
    /// Identity string for a role.
    #[must_use]
    pub fn identity(&self, role: Role) -> &str {
        match role {
            Role::Producer => &self.producer,
            Role::Shipper => &self.shipper,
            Role::Retailer => &self.retailer,
            Role::Consumer => &self.consumer,
            Role::Certifier => &self.certifier,
        }
    }

    /// Role held by an identity string, if any.
    #[must_use]
    pub fn resolve(&self, identity: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| self.identity(*role) == identity)
    }

    /// Resolve `identity` and check it against `required`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for unknown identities or the wrong role.
    pub fn authorize(
        &self,
        operation: &str,
        identity: &str,
        required: Role,
    ) -> Result<Role, ChaincodeError> {
        authorize(operation, identity, self.resolve(identity), required)
    }
}

// =============================================================================
// TESTS
// =============================================================================
