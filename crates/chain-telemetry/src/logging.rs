//! Structured logging macros.
//!
//! Every line carries a `contract` field so one sink can hold both the
//! custody and the funds stream. Asset events add `asset_id`.

/// Event tagged with the contract name, at any `tracing` level.
///
/// ```rust,ignore
/// log_event!(warn, CONTRACT_NAME, "invocation rejected", code = error.code());
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $contract:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(contract = $contract, $($($field)*,)? $msg)
    };
}

/// Event about one stored record.
#[macro_export]
macro_rules! log_asset_event {
    ($level:ident, $contract:expr, $msg:expr, $asset_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(contract = $contract, asset_id = %$asset_id, $($($field)*,)? $msg)
    };
}
