//! # Invocation Scripts
//!
//! One JSON object per line:
//!
//! ```text
//! {"kind":"invoke","function":"createBatch","args":["B1","tuna","FISHCO","100","2024-01-01","Dock 4"]}
//! {"kind":"query","function":"getBatch","args":["B1"]}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_ledger::ChaincodeError;

use crate::errors::HostError;

/// Entry point a line targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// State-changing invocation.
    Invoke,
    /// Read-only query.
    Query,
}

/// One scripted call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationLine {
    /// Entry point.
    pub kind: LineKind,
    /// Operation or query name.
    pub function: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Parsed script line with its position in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptEntry {
    /// 1-based line number.
    pub line: usize,
    /// The call.
    pub call: InvocationLine,
}

/// Parse a whole script.
///
/// # Errors
///
/// `HostError::Script` for the first line that is not a valid invocation.
pub fn parse_script(text: &str) -> Result<Vec<ScriptEntry>, HostError> {
    text.lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, raw)| !raw.is_empty() && !raw.starts_with('#'))
        .map(|(line, raw)| {
            serde_json::from_str(raw)
                .map(|call| ScriptEntry { line, call })
                .map_err(|e| HostError::Script {
                    line,
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// Error part of a failed line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Stable error code.
    pub code: String,
    /// Human readable message.
    pub message: String,
}

impl From<&ChaincodeError> for ErrorReport {
    fn from(error: &ChaincodeError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Printed result of one line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineResult {
    /// 1-based line number.
    pub line: usize,
    /// Entry point used.
    pub kind: LineKind,
    /// Operation or query name.
    pub function: String,
    /// Whether the call succeeded.
    pub ok: bool,
    /// Decoded payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Failure details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl LineResult {
    /// Result for `entry` given what the contract returned.
    #[must_use]
    pub fn new(entry: &ScriptEntry, outcome: Result<Vec<u8>, ChaincodeError>) -> Self {
        let (payload, error) = match outcome {
            Ok(bytes) => (Some(decode_payload(&bytes)), None),
            Err(e) => (None, Some(ErrorReport::from(&e))),
        };
        Self {
            line: entry.line,
            kind: entry.call.kind,
            function: entry.call.function.clone(),
            ok: error.is_none(),
            payload,
            error,
        }
    }
}

/// Payloads are JSON; anything else is kept as a string.
fn decode_payload(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
