//! Ledger configuration from defaults or environment variables.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use thiserror::Error;

use crate::domain::roles::{Role, RoleDirectory};

/// Default owner of a batch whose quantity has been sold down to zero.
pub const DEFAULT_UNASSIGNED_OWNER: &str = "N/A";

/// Configuration shared by every contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Identity string for each role.
    pub roles: RoleDirectory,
    /// Owner value written when a batch sells out.
    pub unassigned_owner: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            roles: RoleDirectory::default(),
            unassigned_owner: DEFAULT_UNASSIGNED_OWNER.to_string(),
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A role identity is empty.
    #[error("identity for {0} is empty")]
    EmptyIdentity(Role),

    /// Two roles share one identity.
    #[error("identity {0:?} is assigned to more than one role")]
    DuplicateIdentity(String),

    /// Sentinel collides with a role identity.
    #[error("unassigned owner {0:?} collides with a role identity")]
    SentinelCollision(String),
}

impl LedgerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PC_ROLE_PRODUCER`: Producer identity (default: FISHCO)
    /// - `PC_ROLE_SHIPPER`: Shipper identity (default: SHIPPINGCO)
    /// - `PC_ROLE_RETAILER`: Retailer identity (default: RETAILER)
    /// - `PC_ROLE_CONSUMER`: Consumer identity (default: CONSUMER)
    /// - `PC_ROLE_CERTIFIER`: Certifier identity (default: CERTIFIER)
    /// - `PC_UNASSIGNED_OWNER`: Sold-out owner sentinel (default: N/A)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, fallback: &str| env::var(name).unwrap_or_else(|_| fallback.to_string());

        Self {
            roles: RoleDirectory {
                producer: var("PC_ROLE_PRODUCER", &defaults.roles.producer),
                shipper: var("PC_ROLE_SHIPPER", &defaults.roles.shipper),
                retailer: var("PC_ROLE_RETAILER", &defaults.roles.retailer),
                consumer: var("PC_ROLE_CONSUMER", &defaults.roles.consumer),
                certifier: var("PC_ROLE_CERTIFIER", &defaults.roles.certifier),
            },
            unassigned_owner: var("PC_UNASSIGNED_OWNER", &defaults.unassigned_owner),
        }
    }

    /// Check that every identity is non-empty and unambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for role in Role::ALL {
            let identity = self.roles.identity(role);
            if identity.is_empty() {
                return Err(ConfigError::EmptyIdentity(role));
            }
            if !seen.insert(identity) {
                return Err(ConfigError::DuplicateIdentity(identity.to_string()));
            }
        }
        if seen.contains(self.unassigned_owner.as_str()) {
            return Err(ConfigError::SentinelCollision(self.unassigned_owner.clone()));
        }
        Ok(())
    }
}
