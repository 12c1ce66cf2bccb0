// Patient Index - Read-only patient record query service
// Copyright (c) 2025 Patient Index Contributors
// Licensed under the MIT License

//! # Patient Index
//!
//! A read-only, in-memory index over a JSON document of patient records.
//!
//! ## Overview
//!
//! The dataset is loaded once at startup and never mutated. The library
//! answers these queries against it:
//! - **Listing** every patient and looking one up by identifier
//! - **Searching** by case-insensitive first/last name fragments
//! - **Classifying** a patient's appointments as upcoming, recent or past
//! - **Filtering** a patient's test results by test type
//! - **Returning** medical history, insurance, care providers and procedures
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The index, classification, query dispatch and batch runner
//! - [`domain`] - Patient record types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use patient_index::core::{AppointmentSelection, PatientIndex};
//! use patient_index::domain::AppointmentKind;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let index = PatientIndex::load("dummy_patient_data.json")?;
//!
//!     for patient in index.search_by_name(None, Some("smith")) {
//!         println!("{}", patient.patient_id);
//!     }
//!
//!     let upcoming = index.appointments("PAT-001", Some(AppointmentKind::Upcoming))?;
//!     if let AppointmentSelection::Filtered { appointments, .. } = upcoming {
//!         println!("{} upcoming appointment(s)", appointments.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Queries and Envelopes
//!
//! Every operation can also be expressed as a [`core::Query`] and answered
//! with a JSON [`core::Envelope`], which is what the CLI and the batch
//! runner print:
//!
//! ```rust
//! use patient_index::core::{execute, PatientIndex, Query};
//!
//! let index = PatientIndex::from_json_str(r#"{"patients": []}"#).unwrap();
//! let response = execute(&index, &Query::GetPatient { patient_id: "PAT-404".into() });
//!
//! assert!(!response.is_success());
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error type is
//! [`domain::PatientIndexError`]. Every error maps onto a process exit code.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
