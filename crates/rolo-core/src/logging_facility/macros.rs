//! Canonical logging macros
//!
//! The default `rolo=...` filters match on target, so every crate that logs
//! through these macros should live under a `rolo` module path.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use rolo_core::log_op_start;
/// log_op_start!("decode");
/// log_op_start!("execute", imperative = "delete");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rolo_core_types::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use rolo_core::log_op_end;
/// log_op_end!("decode", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rolo_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Log an operation error
///
/// `err` may be anything convertible into [`RoloError`](crate::errors::RoloError).
///
/// # Example
///
/// ```
/// # use rolo_core::{log_op_error, errors::CommandError};
/// let err = CommandError::IndexOutOfRange { index: 4, size: 2 };
/// log_op_error!("execute", err, duration_ms = 1, imperative = "delete");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let rolo_err = $crate::errors::RoloError::from($err);
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = rolo_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?rolo_err.kind(),
            err_code = rolo_err.code(),
            $($($field)*)?
        );
    }};
}
