//! Data source parsing
//!
//! The data source is a JSON document of the form
//! `{"patients": [ {...}, {...} ]}`. Loading either yields a complete,
//! consistent dataset or a [`DataLoadError`]; there is no partial result.

use crate::domain::{DataLoadError, Patient, PatientId};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Top-level layout of the data source
#[derive(Debug, Deserialize)]
struct DataSource {
    patients: Vec<Patient>,
}

/// Parsed dataset: patients in load order plus the ID lookup table
#[derive(Debug)]
pub(crate) struct Dataset {
    pub(crate) patients: Vec<Patient>,
    pub(crate) by_id: HashMap<PatientId, usize>,
}

/// Reads and parses the data source at `path`
pub(crate) fn load_file(path: &Path) -> Result<Dataset, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::SourceNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let dataset = parse(&contents)?;

    tracing::debug!(
        path = %path.display(),
        bytes = contents.len(),
        patients = dataset.patients.len(),
        "Parsed data source"
    );

    Ok(dataset)
}

/// Parses a data source document
pub(crate) fn parse(contents: &str) -> Result<Dataset, DataLoadError> {
    let source: DataSource =
        serde_json::from_str(contents).map_err(|e| DataLoadError::Malformed(e.to_string()))?;

    build(source.patients)
}

/// Builds the ID lookup table, enforcing non-blank and unique identifiers
pub(crate) fn build(patients: Vec<Patient>) -> Result<Dataset, DataLoadError> {
    let mut by_id = HashMap::with_capacity(patients.len());

    for (position, patient) in patients.iter().enumerate() {
        if patient.patient_id.is_blank() {
            return Err(DataLoadError::EmptyPatientId { position });
        }
        if by_id.insert(patient.patient_id.clone(), position).is_some() {
            return Err(DataLoadError::DuplicatePatientId(
                patient.patient_id.to_string(),
            ));
        }
    }

    Ok(Dataset { patients, by_id })
}
