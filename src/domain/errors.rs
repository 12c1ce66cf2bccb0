//! Domain error types
//!
//! This module defines the error hierarchy for the patient index.
//! The index itself only ever produces two kinds of failure: a fatal
//! [`DataLoadError`] at startup and a per-request [`PatientNotFound`].
//! Everything else (configuration, I/O, output) is ambient and lives in
//! [`PatientIndexError`].

use std::path::PathBuf;
use thiserror::Error;

/// Main patient index error type
///
/// This is the primary error type used throughout the application.
/// It wraps the index-specific errors and provides context for the CLI.
#[derive(Debug, Error)]
pub enum PatientIndexError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Dataset could not be loaded
    #[error("Data load error: {0}")]
    DataLoad(#[from] DataLoadError),

    /// Requested patient does not exist
    #[error(transparent)]
    NotFound(#[from] PatientNotFound),

    /// Malformed query request
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while loading the patient dataset
///
/// Any of these is fatal: the process must not answer queries against a
/// partially loaded or absent dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Data source does not exist
    #[error("Data source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Data source exists but could not be read
    #[error("Failed to read data source {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    /// Data source is not valid patient JSON
    #[error("Malformed data source: {0}")]
    Malformed(String),

    /// A patient record has an empty identifier
    #[error("Patient at position {position} has an empty patientId")]
    EmptyPatientId { position: usize },

    /// Two patient records share an identifier
    #[error("Duplicate patientId '{0}' in data source")]
    DuplicatePatientId(String),
}

/// No patient with the requested identifier exists in the index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Patient with ID {patient_id} not found")]
pub struct PatientNotFound {
    /// The identifier that was looked up
    pub patient_id: String,
}

impl PatientNotFound {
    /// Creates a new not-found error for the given identifier
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
        }
    }
}

impl PatientIndexError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PatientIndexError::NotFound(_) | PatientIndexError::Query(_) => 1,
            PatientIndexError::Configuration(_) => 2,
            PatientIndexError::DataLoad(_) => 3,
            _ => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PatientIndexError {
    fn from(err: std::io::Error) -> Self {
        PatientIndexError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PatientIndexError {
    fn from(err: serde_json::Error) -> Self {
        PatientIndexError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PatientIndexError {
    fn from(err: toml::de::Error) -> Self {
        PatientIndexError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_index_error_display() {
        let err = PatientIndexError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_not_found_message() {
        let err = PatientNotFound::new("PAT-999");
        assert_eq!(err.to_string(), "Patient with ID PAT-999 not found");

        let wrapped: PatientIndexError = err.into();
        assert_eq!(wrapped.to_string(), "Patient with ID PAT-999 not found");
        assert!(matches!(wrapped, PatientIndexError::NotFound(_)));
    }

    #[test]
    fn test_data_load_error_conversion() {
        let load_err = DataLoadError::DuplicatePatientId("PAT-001".to_string());
        let err: PatientIndexError = load_err.into();
        assert!(matches!(err, PatientIndexError::DataLoad(_)));
        assert!(err.to_string().contains("PAT-001"));
    }

    #[test]
    fn test_source_not_found_display() {
        let err = DataLoadError::SourceNotFound(PathBuf::from("missing.json"));
        assert_eq!(err.to_string(), "Data source not found: missing.json");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(PatientIndexError::from(PatientNotFound::new("x")).exit_code(), 1);
        assert_eq!(PatientIndexError::Configuration("x".into()).exit_code(), 2);
        assert_eq!(
            PatientIndexError::from(DataLoadError::Malformed("x".into())).exit_code(),
            3
        );
        assert_eq!(PatientIndexError::Io("x".into()).exit_code(), 5);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PatientIndexError = io_err.into();
        assert!(matches!(err, PatientIndexError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PatientIndexError = json_err.into();
        assert!(matches!(err, PatientIndexError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PatientIndexError = toml_err.into();
        assert!(matches!(err, PatientIndexError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = PatientIndexError::Query("Test error".to_string());
        let _: &dyn std::error::Error = &err;
        let _: &dyn std::error::Error = &PatientNotFound::new("x");
        let _: &dyn std::error::Error = &DataLoadError::Malformed("x".to_string());
    }
}
