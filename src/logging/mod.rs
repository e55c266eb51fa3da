//! Logging and observability
//!
//! Structured logging through `tracing`, written to stderr in text or JSON
//! form. See [`init_logging`].

pub mod structured;

pub use structured::init_logging;

use crate::domain::CrudError;

/// Log a failed operation with its exit code
///
/// # Example
///
/// ```no_run
/// use cosmos_crud::log_operation_failure;
/// use cosmos_crud::domain::CrudError;
///
/// let error = CrudError::Connection("dns lookup failed".to_string());
/// log_operation_failure!(&error, "create");
/// ```
#[macro_export]
macro_rules! log_operation_failure {
    ($error:expr, $operation:expr) => {
        tracing::error!(
            error = %$error,
            operation = $operation,
            exit_code = $error.exit_code(),
            "Operation failed"
        );
    };
}

/// Report a failure that ends the run and return its exit code
///
/// The error is logged once, at error level, so it shows at the default
/// `warn` filter.
pub fn report_failure(error: &CrudError, operation: &str) -> i32 {
    log_operation_failure!(error, operation);
    error.exit_code()
}
