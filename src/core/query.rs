//! Query requests and dispatch
//!
//! A [`Query`] names exactly one index operation. [`respond`] runs it and
//! wraps the result in an [`Envelope`]; [`execute`] additionally turns a
//! failure into a failure envelope so callers always get a response.
//!
//! Queries deserialize from JSON tagged by `op`:
//!
//! ```
//! use patient_index::core::query::Query;
//!
//! let query: Query = serde_json::from_str(
//!     r#"{"op": "testResults", "patientId": "PAT-001", "testType": "Laboratory"}"#,
//! ).unwrap();
//! assert_eq!(query.patient_id(), Some("PAT-001"));
//! ```

use crate::core::envelope::Envelope;
use crate::core::index::{AppointmentSelection, PatientIndex};
use crate::domain::{AppointmentKind, Result};
use crate::log_query;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One request against the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Query {
    /// Every patient
    ListPatients,

    /// One patient by ID
    GetPatient { patient_id: String },

    /// Patients by name fragments
    SearchByName {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    },

    /// A patient's appointments, optionally of one classification
    Appointments {
        patient_id: String,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },

    /// A patient's test results, optionally of one test type
    TestResults {
        patient_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        test_type: Option<String>,
    },

    /// A patient's medical history
    MedicalHistory { patient_id: String },

    /// A patient's insurance
    Insurance { patient_id: String },

    /// A patient's care providers
    CareProviders { patient_id: String },

    /// A patient's procedures
    Procedures { patient_id: String },
}

impl Query {
    /// Operation name as used in the `op` tag
    pub fn name(&self) -> &'static str {
        match self {
            Query::ListPatients => "listPatients",
            Query::GetPatient { .. } => "getPatient",
            Query::SearchByName { .. } => "searchByName",
            Query::Appointments { .. } => "appointments",
            Query::TestResults { .. } => "testResults",
            Query::MedicalHistory { .. } => "medicalHistory",
            Query::Insurance { .. } => "insurance",
            Query::CareProviders { .. } => "careProviders",
            Query::Procedures { .. } => "procedures",
        }
    }

    /// The patient this query targets, if any
    pub fn patient_id(&self) -> Option<&str> {
        match self {
            Query::ListPatients | Query::SearchByName { .. } => None,
            Query::GetPatient { patient_id }
            | Query::Appointments { patient_id, .. }
            | Query::TestResults { patient_id, .. }
            | Query::MedicalHistory { patient_id }
            | Query::Insurance { patient_id }
            | Query::CareProviders { patient_id }
            | Query::Procedures { patient_id } => Some(patient_id),
        }
    }
}

/// Runs a query, returning the success envelope or the error
///
/// # Errors
///
/// Returns [`crate::domain::PatientIndexError::NotFound`] for unknown patient
/// IDs, or a serialization error if the payload cannot be rendered.
pub fn respond(index: &PatientIndex, query: &Query) -> Result<Envelope> {
    log_query!(query);

    let envelope = match query {
        Query::ListPatients => {
            let patients = index.all();
            Envelope::success("patients", serde_json::to_value(patients)?)
                .with_count(patients.len())
        }
        Query::GetPatient { patient_id } => {
            Envelope::success("patient", serde_json::to_value(index.get(patient_id)?)?)
        }
        Query::SearchByName {
            first_name,
            last_name,
        } => {
            let patients = index.search_by_name(first_name.as_deref(), last_name.as_deref());
            Envelope::success("patients", serde_json::to_value(&patients)?)
                .with_count(patients.len())
        }
        Query::Appointments { patient_id, kind } => {
            let kind = AppointmentKind::parse_filter(kind.as_deref());
            match index.appointments(patient_id, kind)? {
                AppointmentSelection::Grouped(groups) => {
                    Envelope::success("appointments", serde_json::to_value(&groups)?)
                }
                AppointmentSelection::Filtered { kind, appointments } => {
                    Envelope::success("appointments", serde_json::to_value(&appointments)?)
                        .with_field("type", Value::from(kind.as_str()))
                }
            }
        }
        Query::TestResults {
            patient_id,
            test_type,
        } => {
            let results = index.test_results(patient_id, test_type.as_deref())?;
            Envelope::success("testResults", serde_json::to_value(&results)?)
                .with_count(results.len())
        }
        Query::MedicalHistory { patient_id } => {
            Envelope::success("medicalHistory", index.medical_history(patient_id)?.clone())
        }
        Query::Insurance { patient_id } => {
            Envelope::success("insurance", index.insurance(patient_id)?.clone())
        }
        Query::CareProviders { patient_id } => {
            Envelope::success("careProviders", index.care_providers(patient_id)?.clone())
        }
        Query::Procedures { patient_id } => {
            Envelope::success("procedures", index.procedures(patient_id)?.clone())
        }
    };

    Ok(envelope)
}

/// Runs a query, always producing a response
///
/// Errors are reported as `{"success": false, "detail": ...}`.
pub fn execute(index: &PatientIndex, query: &Query) -> Envelope {
    respond(index, query).unwrap_or_else(|e| {
        tracing::debug!(op = query.name(), error = %e, "Query failed");
        Envelope::failure(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::domain::PatientIndexError;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::Arc;

    fn index() -> PatientIndex {
        let data = json!({
            "patients": [{
                "patientId": "PAT-001",
                "personalInformation": {"firstName": "Sarah", "lastName": "Johnson"},
                "appointments": [
                    {"id": "A1", "date": "2025-07-01"},
                    {"id": "A2", "date": "2020-07-01"}
                ],
                "testResults": [{"testType": "Laboratory"}, {"testType": "Radiology"}],
                "careProviders": [{"name": "Dr. Lee"}]
            }]
        });
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();
        PatientIndex::from_json_str(&data.to_string())
            .unwrap()
            .with_clock(Arc::new(FixedClock::new(now)))
    }

    #[test]
    fn test_query_deserialize() {
        let query: Query =
            serde_json::from_value(json!({"op": "appointments", "patientId": "PAT-1", "type": "past"}))
                .unwrap();
        assert_eq!(
            query,
            Query::Appointments {
                patient_id: "PAT-1".to_string(),
                kind: Some("past".to_string())
            }
        );

        let query: Query = serde_json::from_value(json!({"op": "listPatients"})).unwrap();
        assert_eq!(query, Query::ListPatients);
        assert_eq!(query.patient_id(), None);
    }

    #[test]
    fn test_query_unknown_op() {
        assert!(serde_json::from_value::<Query>(json!({"op": "deletePatient"})).is_err());
    }

    #[test]
    fn test_list_patients_envelope() {
        let envelope = execute(&index(), &Query::ListPatients);
        assert!(envelope.is_success());
        assert_eq!(envelope.get("count"), Some(&json!(1)));
        assert_eq!(envelope.get("patients").unwrap()[0]["patientId"], "PAT-001");
    }

    #[test]
    fn test_get_patient_not_found() {
        let query = Query::GetPatient {
            patient_id: "PAT-404".to_string(),
        };
        assert!(matches!(
            respond(&index(), &query),
            Err(PatientIndexError::NotFound(_))
        ));

        let envelope = execute(&index(), &query);
        assert_eq!(
            envelope.into_value(),
            json!({"success": false, "detail": "Patient with ID PAT-404 not found"})
        );
    }

    #[test]
    fn test_appointments_filtered_envelope() {
        let envelope = execute(
            &index(),
            &Query::Appointments {
                patient_id: "PAT-001".to_string(),
                kind: Some("upcoming".to_string()),
            },
        );
        assert_eq!(envelope.get("type"), Some(&json!("upcoming")));
        assert_eq!(envelope.get("appointments").unwrap()[0]["id"], "A1");
        assert_eq!(envelope.get("count"), None);
    }

    #[test]
    fn test_appointments_unknown_type_is_grouped() {
        let envelope = execute(
            &index(),
            &Query::Appointments {
                patient_id: "PAT-001".to_string(),
                kind: Some("someday".to_string()),
            },
        );
        assert_eq!(envelope.get("type"), None);
        let appointments = envelope.get("appointments").unwrap();
        assert_eq!(appointments["upcoming"].as_array().unwrap().len(), 1);
        assert_eq!(appointments["past"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_test_results_envelope() {
        let envelope = execute(
            &index(),
            &Query::TestResults {
                patient_id: "PAT-001".to_string(),
                test_type: Some("Radiology".to_string()),
            },
        );
        assert_eq!(envelope.get("count"), Some(&json!(1)));
    }

    #[test]
    fn test_test_results_empty_type_envelope() {
        let envelope = execute(
            &index(),
            &Query::TestResults {
                patient_id: "PAT-001".to_string(),
                test_type: Some(String::new()),
            },
        );
        assert_eq!(envelope.get("count"), Some(&json!(2)));
    }

    #[test]
    fn test_blob_envelopes() {
        let index = index();
        let query = Query::CareProviders {
            patient_id: "PAT-001".to_string(),
        };
        let envelope = execute(&index, &query);
        assert_eq!(envelope.get("careProviders"), Some(&json!([{"name": "Dr. Lee"}])));

        let envelope = execute(
            &index,
            &Query::MedicalHistory {
                patient_id: "PAT-001".to_string(),
            },
        );
        assert_eq!(envelope.get("medicalHistory"), Some(&json!({})));
    }
}
