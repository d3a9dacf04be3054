//! Log output settings, read from the environment.

use std::env;

/// Service name used when `OTEL_SERVICE_NAME` is unset.
pub const DEFAULT_SERVICE_NAME: &str = "provenance-chain";

/// Where log lines go and how they look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// No output layer; spans and events are filtered but not written.
    Off,
    /// Human readable lines on stderr.
    Pretty,
    /// One JSON object per line on stderr.
    Json,
}

impl LogFormat {
    /// Format from the two output switches. Disabling console output wins.
    #[must_use]
    pub fn from_switches(console_output: bool, json: bool) -> Self {
        match (console_output, json) {
            (false, _) => Self::Off,
            (true, true) => Self::Json,
            (true, false) => Self::Pretty,
        }
    }
}

/// Logging configuration for a contract host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Name attached to every log line.
    pub service_name: String,
    /// Deployed contract, empty when not bound to one.
    pub contract: String,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Output layer.
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            contract: String::new(),
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// `Some(true)` for `1`/`true`, `Some(false)` for `0`/`false`, any case.
fn env_flag(name: &str) -> Option<bool> {
    let raw = env::var(name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

impl TelemetryConfig {
    /// Read the environment, falling back to defaults.
    ///
    /// - `OTEL_SERVICE_NAME`
    /// - `PC_LOG_LEVEL`, then `RUST_LOG`
    /// - `PC_CONSOLE_OUTPUT` (default on)
    /// - `PC_JSON_LOGS` (default off)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let format = LogFormat::from_switches(
            env_flag("PC_CONSOLE_OUTPUT").unwrap_or(true),
            env_flag("PC_JSON_LOGS").unwrap_or(false),
        );
        Self {
            service_name: env::var("OTEL_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: env::var("PC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            format,
            ..defaults
        }
    }

    /// Environment settings tagged with `contract`.
    #[must_use]
    pub fn for_contract(contract: &str) -> Self {
        Self {
            contract: contract.to_string(),
            ..Self::from_env()
        }
    }

    /// Override the level directive.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// `<service>-<contract>`, or just the service name.
    #[must_use]
    pub fn full_service_name(&self) -> String {
        if self.contract.is_empty() {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.contract)
        }
    }
}
