//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use pricewatch_core::log_op_start;
/// log_op_start!("snapshot_write");
/// log_op_start!("snapshot_write", snapshot_date = "2024-08-17");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use pricewatch_core::log_op_end;
/// log_op_end!("snapshot_write", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` must be a [`PwError`](crate::errors::PwError) (taken by reference).
///
/// # Example
///
/// ```
/// # use pricewatch_core::log_op_error;
/// # use pricewatch_core::errors::{PwError, PwErrorKind};
/// let err = PwError::new(PwErrorKind::ExternalService);
/// log_op_error!("fetch_snapshot", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let pw_err: &$crate::errors::PwError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?pw_err.kind(),
            err.code = pw_err.code(),
            "{}",
            pw_err
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let pw_err: &$crate::errors::PwError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?pw_err.kind(),
            err.code = pw_err.code(),
            $($field)*,
            "{}",
            pw_err
        );
    }};
}
