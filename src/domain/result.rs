//! Result type alias for the patient index
//!
//! This module provides a convenient Result type alias that uses
//! [`PatientIndexError`] as the error type.

use super::errors::PatientIndexError;

/// Result type alias for patient index operations
///
/// # Examples
///
/// ```
/// use patient_index::domain::result::Result;
/// use patient_index::domain::errors::PatientIndexError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PatientIndexError::Query("Invalid request".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PatientIndexError>;
