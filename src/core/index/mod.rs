//! In-memory patient index
//!
//! The [`PatientIndex`] owns the whole dataset. It is built once by
//! [`PatientIndex::load`] and is never mutated afterwards, so a single
//! instance can be shared (e.g. behind an `Arc`) by any number of concurrent
//! readers without locking.
//!
//! # Example
//!
//! ```no_run
//! use patient_index::core::index::PatientIndex;
//! use patient_index::domain::AppointmentKind;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let index = PatientIndex::load("dummy_patient_data.json")?;
//!
//! let patient = index.get("PAT-001")?;
//! println!("{} {}", patient.first_name(), patient.last_name());
//!
//! let upcoming = index.appointments("PAT-001", Some(AppointmentKind::Upcoming))?;
//! println!("{} upcoming appointment(s)", upcoming.len());
//! # Ok(())
//! # }
//! ```

mod loader;
pub mod search;
pub mod selection;

pub use search::NameQuery;
pub use selection::{AppointmentGroups, AppointmentSelection};

use crate::core::classify::{self, RecencyWindow};
use crate::core::clock::{Clock, SystemClock};
use crate::domain::{AppointmentKind, DataLoadError, Patient, PatientId, PatientNotFound, TestResult};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Read-only index over the loaded patient dataset
#[derive(Debug, Clone)]
pub struct PatientIndex {
    patients: Arc<[Patient]>,
    by_id: Arc<HashMap<PatientId, usize>>,
    clock: Arc<dyn Clock>,
    recent_window: RecencyWindow,
}

impl PatientIndex {
    /// Loads the dataset from a JSON file
    ///
    /// Uses the system clock and the default recency window; see
    /// [`PatientIndex::with_clock`] and [`PatientIndex::with_recent_window`].
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] if the file is missing, unreadable, not valid
    /// JSON, or contains blank or duplicate patient IDs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let start = Instant::now();

        let dataset = loader::load_file(path)?;
        let index = Self::from_dataset(dataset);

        tracing::info!(
            path = %path.display(),
            patients = index.len(),
            duration_ms = start.elapsed().as_millis(),
            "Patient data loaded"
        );

        Ok(index)
    }

    /// Builds an index from a JSON document held in memory
    ///
    /// # Errors
    ///
    /// Same as [`PatientIndex::load`], minus the file errors.
    pub fn from_json_str(contents: &str) -> Result<Self, DataLoadError> {
        loader::parse(contents).map(Self::from_dataset)
    }

    /// Builds an index from already-parsed patients
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] on blank or duplicate patient IDs.
    pub fn from_patients(patients: Vec<Patient>) -> Result<Self, DataLoadError> {
        loader::build(patients).map(Self::from_dataset)
    }

    fn from_dataset(dataset: loader::Dataset) -> Self {
        Self {
            patients: dataset.patients.into(),
            by_id: Arc::new(dataset.by_id),
            clock: Arc::new(SystemClock),
            recent_window: RecencyWindow::default(),
        }
    }

    /// Replaces the time source used for appointment classification
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the boundary between `recent` and `past` appointments
    pub fn with_recent_window(mut self, window: RecencyWindow) -> Self {
        self.recent_window = window;
        self
    }

    /// The configured recency window
    pub fn recent_window(&self) -> RecencyWindow {
        self.recent_window
    }

    /// The clock used for classification
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Number of patients
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Returns true if the dataset holds no patients
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Every patient, in load order
    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    /// Looks up a patient by exact ID
    pub fn get(&self, id: &str) -> Result<&Patient, PatientNotFound> {
        self.by_id
            .get(id)
            .map(|&position| &self.patients[position])
            .ok_or_else(|| PatientNotFound::new(id))
    }

    /// Finds patients whose names contain the given fragments
    ///
    /// Matching is case-insensitive. Omitted (or blank) criteria do not
    /// filter; with both omitted every patient is returned in load order.
    pub fn search_by_name(&self, first_name: Option<&str>, last_name: Option<&str>) -> Vec<&Patient> {
        let query = NameQuery::new(first_name, last_name);
        self.search(&query)
    }

    /// Finds patients matching a prepared [`NameQuery`]
    pub fn search(&self, query: &NameQuery) -> Vec<&Patient> {
        self.patients.iter().filter(|p| query.matches(p)).collect()
    }

    /// A patient's appointments, classified against the current instant
    ///
    /// With `kind` set, only appointments of that classification are
    /// returned; otherwise all of them, grouped.
    pub fn appointments(
        &self,
        id: &str,
        kind: Option<AppointmentKind>,
    ) -> Result<AppointmentSelection<'_>, PatientNotFound> {
        let patient = self.get(id)?;
        let now = self.clock.now();

        let mut groups = AppointmentGroups::default();
        for appointment in patient.appointments.entries() {
            groups.push(
                classify::classify(appointment, now, self.recent_window),
                appointment,
            );
        }

        Ok(match kind {
            Some(kind) => AppointmentSelection::Filtered {
                kind,
                appointments: groups.into_kind(kind),
            },
            None => AppointmentSelection::Grouped(groups),
        })
    }

    /// A patient's test results, optionally restricted to one exact `testType`
    ///
    /// A blank `test_type` is treated as no filter.
    pub fn test_results(
        &self,
        id: &str,
        test_type: Option<&str>,
    ) -> Result<Vec<&TestResult>, PatientNotFound> {
        let patient = self.get(id)?;
        let test_type = test_type.filter(|t| !t.trim().is_empty());
        Ok(patient
            .test_results
            .iter()
            .filter(|result| test_type.map_or(true, |t| result.is_type(t)))
            .collect())
    }

    /// A patient's medical history, unchanged
    pub fn medical_history(&self, id: &str) -> Result<&Value, PatientNotFound> {
        self.get(id).map(|p| &p.medical_history)
    }

    /// A patient's insurance information, unchanged
    pub fn insurance(&self, id: &str) -> Result<&Value, PatientNotFound> {
        self.get(id).map(|p| &p.insurance)
    }

    /// A patient's care providers, unchanged
    pub fn care_providers(&self, id: &str) -> Result<&Value, PatientNotFound> {
        self.get(id).map(|p| &p.care_providers)
    }

    /// A patient's procedures, unchanged
    pub fn procedures(&self, id: &str) -> Result<&Value, PatientNotFound> {
        self.get(id).map(|p| &p.procedures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn index() -> PatientIndex {
        let data = json!({
            "patients": [
                {
                    "patientId": "PAT-001",
                    "personalInformation": {"firstName": "Sarah", "lastName": "Johnson"},
                    "appointments": {
                        "upcoming": [{"id": "A1", "date": "2025-07-01"}],
                        "recent": [{"id": "A2", "date": "2025-06-01"}],
                        "past": [{"id": "A3", "date": "2024-01-01"}, {"id": "A4"}]
                    },
                    "testResults": [
                        {"id": "T1", "testType": "Laboratory"},
                        {"id": "T2", "testType": "Radiology"},
                        {"id": "T3", "testType": "Laboratory"}
                    ],
                    "insurance": {"provider": "Acme"}
                },
                {
                    "patientId": "PAT-002",
                    "personalInformation": {"firstName": "Michael", "lastName": "Sarkis"}
                }
            ]
        });
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        PatientIndex::from_json_str(&data.to_string())
            .unwrap()
            .with_clock(Arc::new(FixedClock::new(now)))
    }

    #[test]
    fn test_get_and_not_found() {
        let index = index();
        assert_eq!(index.get("PAT-002").unwrap().first_name(), "Michael");
        assert_eq!(index.get("PAT-404").unwrap_err(), PatientNotFound::new("PAT-404"));
        assert!(index.get("pat-001").is_err());
    }

    #[test]
    fn test_all_preserves_load_order() {
        let index = index();
        let ids: Vec<_> = index.all().iter().map(|p| p.patient_id.as_str()).collect();
        assert_eq!(ids, ["PAT-001", "PAT-002"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_search_by_name() {
        let index = index();
        assert_eq!(index.search_by_name(None, None).len(), 2);
        assert_eq!(index.search_by_name(None, Some("sar")).len(), 1);
        assert_eq!(index.search_by_name(Some("sar"), None).len(), 1);
        assert!(index.search_by_name(Some("zed"), None).is_empty());
    }

    #[test]
    fn test_appointments_grouped() {
        let index = index();
        let selection = index.appointments("PAT-001", None).unwrap();
        let AppointmentSelection::Grouped(groups) = selection else {
            panic!("expected grouped selection");
        };
        assert_eq!(groups.upcoming.len(), 1);
        assert_eq!(groups.recent.len(), 1);
        assert_eq!(groups.past.len(), 1);
        assert_eq!(groups.unclassified.len(), 1);
    }

    #[test]
    fn test_appointments_filtered() {
        let index = index();
        let selection = index
            .appointments("PAT-001", Some(AppointmentKind::Past))
            .unwrap();
        assert_eq!(selection.kind(), Some(AppointmentKind::Past));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_appointments_keep_source_order_across_groups() {
        let data = json!({
            "patients": [{
                "patientId": "PAT-010",
                "appointments": {
                    "upcoming": [{"id": "FIRST", "date": "2025-07-01"}],
                    "past": [{"id": "SECOND", "date": "2025-08-01"}]
                }
            }]
        });
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();
        let index = PatientIndex::from_json_str(&data.to_string())
            .unwrap()
            .with_clock(Arc::new(FixedClock::new(now)));

        let selection = index
            .appointments("PAT-010", Some(AppointmentKind::Upcoming))
            .unwrap();
        let AppointmentSelection::Filtered { appointments, .. } = selection else {
            panic!("expected filtered selection");
        };
        let ids: Vec<_> = appointments
            .iter()
            .map(|a| a.as_value()["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["FIRST", "SECOND"]);
    }

    #[test]
    fn test_recent_window_changes_classification() {
        let index = index().with_recent_window(RecencyWindow::days(7));
        let recent = index
            .appointments("PAT-001", Some(AppointmentKind::Recent))
            .unwrap();
        assert!(recent.is_empty());
    }

    #[test]
    fn test_appointments_unknown_patient() {
        assert!(index().appointments("PAT-404", None).is_err());
    }

    #[test]
    fn test_test_results_filter() {
        let index = index();
        assert_eq!(index.test_results("PAT-001", None).unwrap().len(), 3);
        assert_eq!(index.test_results("PAT-001", Some("Laboratory")).unwrap().len(), 2);
        assert!(index.test_results("PAT-001", Some("laboratory")).unwrap().is_empty());
        assert!(index.test_results("PAT-001", Some("Genomics")).unwrap().is_empty());
        assert!(index.test_results("PAT-404", None).is_err());
    }

    #[test]
    fn test_blank_test_type_is_no_filter() {
        let index = index();
        assert_eq!(index.test_results("PAT-001", Some("")).unwrap().len(), 3);
        assert_eq!(index.test_results("PAT-001", Some("  ")).unwrap().len(), 3);
    }

    #[test]
    fn test_blobs() {
        let index = index();
        assert_eq!(index.insurance("PAT-001").unwrap(), &json!({"provider": "Acme"}));
        assert_eq!(index.medical_history("PAT-002").unwrap(), &json!({}));
        assert_eq!(index.care_providers("PAT-002").unwrap(), &json!([]));
        assert_eq!(index.procedures("PAT-002").unwrap(), &json!([]));
        assert!(index.procedures("PAT-404").is_err());
    }

    #[test]
    fn test_from_patients_rejects_duplicates() {
        let patient: Patient = serde_json::from_value(json!({"patientId": "PAT-1"})).unwrap();
        let result = PatientIndex::from_patients(vec![patient.clone(), patient]);
        assert!(matches!(result, Err(DataLoadError::DuplicatePatientId(_))));
    }

    #[test]
    fn test_index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatientIndex>();
    }
}
