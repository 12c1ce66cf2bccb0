//! Core business logic
//!
//! This module contains the patient index and everything that answers
//! queries against it:
//! - [`batch`] - concurrent execution of many queries over one shared index
//! - [`index`] - the in-memory dataset and its lookup/filter operations
//! - [`classify`] - temporal classification of appointments
//! - [`clock`] - injectable time source
//! - [`query`] - request values and dispatch onto index operations
//! - [`envelope`] - the response document shape
//! - [`summary`] - dataset totals for status reporting

pub mod batch;
pub mod classify;
pub mod clock;
pub mod envelope;
pub mod index;
pub mod query;
pub mod summary;

// Re-export commonly used types
pub use batch::{parse_batch, run_batch, BatchReport};
pub use classify::RecencyWindow;
pub use clock::{Clock, FixedClock, SystemClock};
pub use envelope::Envelope;
pub use index::{AppointmentGroups, AppointmentSelection, NameQuery, PatientIndex};
pub use query::{execute, respond, Query};
pub use summary::DatasetSummary;
