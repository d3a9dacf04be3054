//! # Positional Argument Parsing
//!
//! Invocations carry a flat list of strings. Arity is checked before anything
//! else touches state; numeric fields are parsed here.

use crate::errors::ChaincodeError;

/// Accepted argument counts for an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// Between `min` and `max` inclusive.
    Between(usize, usize),
}

impl Arity {
    /// Whether `got` satisfies this arity.
    #[must_use]
    pub fn accepts(self, got: usize) -> bool {
        match self {
            Arity::Exact(n) => got == n,
            Arity::Between(min, max) => (min..=max).contains(&got),
        }
    }

    fn describe(self) -> String {
        match self {
            Arity::Exact(n) => n.to_string(),
            Arity::Between(min, max) => format!("{min} or {max}"),
        }
    }
}

/// Check the argument count for `operation`.
///
/// # Errors
///
/// `ArgumentCount` when `args.len()` is outside `arity`.
pub fn expect_arity(operation: &str, args: &[String], arity: Arity) -> Result<(), ChaincodeError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(ChaincodeError::ArgumentCount {
            operation: operation.to_string(),
            expected: arity.describe(),
            got: args.len(),
        })
    }
}

/// Parse a signed integer argument. Surrounding whitespace is rejected.
///
/// # Errors
///
/// `InvalidNumericArgument` if `raw` is not a base-10 integer.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ChaincodeError> {
    raw.parse::<i64>()
        .map_err(|_| ChaincodeError::InvalidNumericArgument {
            field,
            value: raw.to_string(),
        })
}

/// Parse an integer argument that must be at least 1.
///
/// # Errors
///
/// `InvalidNumericArgument` if `raw` does not parse or is below 1.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<i64, ChaincodeError> {
    let value = parse_integer(field, raw)?;
    if value < 1 {
        return Err(ChaincodeError::InvalidNumericArgument {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Sum `amounts`, failing instead of wrapping.
///
/// # Errors
///
/// `AmountOverflow` naming `what` if the total leaves the `i64` range.
pub fn checked_total(what: &str, amounts: impl IntoIterator<Item = i64>) -> Result<i64, ChaincodeError> {
    amounts
        .into_iter()
        .try_fold(0i64, i64::checked_add)
        .ok_or_else(|| ChaincodeError::AmountOverflow(what.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
