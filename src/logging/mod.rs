//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels (`RUST_LOG` overrides the configured level)
//! - Console output on stderr
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use patient_index::logging::init_logging;
//! use patient_index::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a query about to be executed against the index
///
/// # Example
///
/// ```no_run
/// use patient_index::log_query;
/// use patient_index::core::Query;
///
/// let query = Query::ListPatients;
/// log_query!(&query);
/// ```
#[macro_export]
macro_rules! log_query {
    ($query:expr) => {
        tracing::debug!(
            op = $query.name(),
            patient_id = $query.patient_id().unwrap_or("-"),
            "Executing query"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use patient_index::log_error_with_context;
/// use patient_index::domain::PatientIndexError;
///
/// let error = PatientIndexError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
