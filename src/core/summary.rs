//! Dataset summary
//!
//! Totals over the loaded dataset, used by the `status` command.

use crate::core::classify;
use crate::core::index::PatientIndex;
use crate::domain::AppointmentKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate figures for a loaded index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// Number of patients
    pub patients: usize,

    /// Number of appointments across all patients
    pub appointments: usize,

    /// Upcoming appointments as of `as_of`
    pub upcoming: usize,

    /// Recent appointments as of `as_of`
    pub recent: usize,

    /// Past appointments as of `as_of`
    pub past: usize,

    /// Appointments without a usable date
    pub unclassified: usize,

    /// Number of test results across all patients
    pub test_results: usize,

    /// Test results per `testType` (untyped results are not counted here)
    pub test_types: BTreeMap<String, usize>,

    /// Recency window in days
    pub recent_window_days: u32,

    /// Instant the classification was computed against
    pub as_of: DateTime<Utc>,
}

impl DatasetSummary {
    /// Computes the summary for an index at its clock's current instant
    pub fn from_index(index: &PatientIndex) -> Self {
        let as_of = index.clock().now();
        let window = index.recent_window();

        let mut summary = Self {
            patients: index.len(),
            appointments: 0,
            upcoming: 0,
            recent: 0,
            past: 0,
            unclassified: 0,
            test_results: 0,
            test_types: BTreeMap::new(),
            recent_window_days: window.as_days(),
            as_of,
        };

        for patient in index.all() {
            for appointment in patient.appointments.entries() {
                summary.appointments += 1;
                match classify::classify(appointment, as_of, window) {
                    Some(AppointmentKind::Upcoming) => summary.upcoming += 1,
                    Some(AppointmentKind::Recent) => summary.recent += 1,
                    Some(AppointmentKind::Past) => summary.past += 1,
                    None => summary.unclassified += 1,
                }
            }

            for result in &patient.test_results {
                summary.test_results += 1;
                if let Some(test_type) = result.test_type() {
                    *summary.test_types.entry(test_type.to_string()).or_default() += 1;
                }
            }
        }

        summary
    }
}
