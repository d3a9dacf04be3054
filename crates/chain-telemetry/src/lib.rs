//! # Chain Telemetry
//!
//! Structured logging for Provenance-Chain contracts and hosts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chain_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::for_contract("funds"))?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `provenance-chain` | Service name in logs |
//! | `PC_LOG_LEVEL` | `info` | Filter directive, overridden by `RUST_LOG` |
//! | `PC_JSON_LOGS` | `false` | JSON log lines |
//! | `PC_CONSOLE_OUTPUT` | `true` | Emit to stderr at all |

#![warn(missing_docs)]

mod config;
mod logging;
mod tracing_setup;

pub use config::{LogFormat, TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Subscriber setup failures.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    SubscriberInit(String),

    /// Filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Config(String),
}

/// Install the subscriber and return a guard to hold until exit.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    init_tracing(&config)?;
    Ok(TelemetryGuard {
        service: config.full_service_name(),
    })
}

/// Logs the shutdown of the service when dropped.
pub struct TelemetryGuard {
    service: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!(service = %self.service, "telemetry stopped");
    }
}
