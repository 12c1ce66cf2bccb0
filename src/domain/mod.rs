//! Domain models and types for the patient index.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`PatientId`])
//! - **Domain models** ([`Patient`], [`Appointment`], [`TestResult`])
//! - **Error types** ([`PatientIndexError`], [`DataLoadError`], [`PatientNotFound`])
//! - **Result type alias** ([`Result`])
//!
//! Records are modeled loosely on purpose: the data source is treated as
//! pass-through JSON, and only the fields queries filter on are typed.
//!
//! ```rust
//! use patient_index::domain::{AppointmentKind, Patient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let patient: Patient = serde_json::from_str(
//!     r#"{"patientId": "PAT-001", "personalInformation": {"firstName": "Sarah"}}"#,
//! )?;
//! assert_eq!(patient.first_name(), "Sarah");
//! assert_eq!("upcoming".parse::<AppointmentKind>()?, AppointmentKind::Upcoming);
//! # Ok(())
//! # }
//! ```

pub mod appointment;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod result;
pub mod test_result;

// Re-export commonly used types for convenience
pub use appointment::{Appointment, AppointmentBook, AppointmentDate, AppointmentKind};
pub use errors::{DataLoadError, PatientIndexError, PatientNotFound};
pub use ids::PatientId;
pub use patient::{Patient, PersonalInformation};
pub use result::Result;
pub use test_result::TestResult;
