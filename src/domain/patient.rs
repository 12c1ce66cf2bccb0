//! Patient domain model
//!
//! A [`Patient`] mirrors one entry of the data source's `patients` array.
//! Only the identifier, the names and the appointment/test-result shapes are
//! interpreted; every other field is carried through untouched so that a
//! lookup returns the record as it was loaded.

use super::appointment::AppointmentBook;
use super::ids::PatientId;
use super::test_result::TestResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Demographic information of a patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInformation {
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Every other demographic field (date of birth, contact, address, ...)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A complete patient record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique identifier, e.g. `PAT-001`
    pub patient_id: PatientId,

    /// Demographics
    #[serde(default)]
    pub personal_information: PersonalInformation,

    /// Scheduled, recent and historical appointments
    #[serde(default)]
    pub appointments: AppointmentBook,

    /// Laboratory, radiology and other test results
    #[serde(default)]
    pub test_results: Vec<TestResult>,

    /// Conditions, allergies, medications, ... (opaque)
    #[serde(default = "empty_object")]
    pub medical_history: Value,

    /// Coverage details (opaque)
    #[serde(default = "empty_object")]
    pub insurance: Value,

    /// Physicians and care team members (opaque)
    #[serde(default = "empty_array")]
    pub care_providers: Value,

    /// Performed procedures (opaque)
    #[serde(default = "empty_array")]
    pub procedures: Value,

    /// Any other top-level fields of the record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Patient {
    /// Given name, or an empty string if absent
    pub fn first_name(&self) -> &str {
        self.personal_information.first_name.as_deref().unwrap_or("")
    }

    /// Family name, or an empty string if absent
    pub fn last_name(&self) -> &str {
        self.personal_information.last_name.as_deref().unwrap_or("")
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_patient_defaults() {
        let patient: Patient = serde_json::from_value(json!({"patientId": "PAT-001"})).unwrap();

        assert_eq!(patient.patient_id.as_str(), "PAT-001");
        assert_eq!(patient.first_name(), "");
        assert_eq!(patient.last_name(), "");
        assert!(patient.appointments.is_empty());
        assert!(patient.test_results.is_empty());
        assert_eq!(patient.medical_history, json!({}));
        assert_eq!(patient.insurance, json!({}));
        assert_eq!(patient.care_providers, json!([]));
        assert_eq!(patient.procedures, json!([]));
    }

    #[test]
    fn test_missing_patient_id_is_rejected() {
        let result = serde_json::from_value::<Patient>(json!({
            "personalInformation": {"firstName": "Sarah"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_full_record_passes_through() {
        let raw = json!({
            "patientId": "PAT-002",
            "personalInformation": {
                "firstName": "Sarah",
                "lastName": "Johnson",
                "dateOfBirth": "1985-03-15",
                "contact": {"phone": "555-0101"}
            },
            "appointments": {"upcoming": [{"date": "2030-01-01", "type": "Follow-up"}]},
            "testResults": [{"testType": "Laboratory", "testName": "CBC"}],
            "medicalHistory": {"conditions": ["Hypertension"]},
            "insurance": {"provider": "Acme Health"},
            "careProviders": [{"name": "Dr. Smith"}],
            "procedures": [{"name": "Appendectomy"}],
            "emergencyContact": {"name": "Tom Johnson"}
        });

        let patient: Patient = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(patient.first_name(), "Sarah");
        assert_eq!(patient.last_name(), "Johnson");
        assert_eq!(patient.appointments.len(), 1);
        assert!(patient.extra.contains_key("emergencyContact"));

        assert_eq!(serde_json::to_value(&patient).unwrap(), raw);
    }
}
