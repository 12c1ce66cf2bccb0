//! Single-query commands
//!
//! Every command here loads the index, runs one [`Query`] and prints the
//! response envelope. A failed query (unknown patient) still prints its
//! failure envelope and exits with code 1.

use crate::cli::runtime;
use crate::cli::Cli;
use crate::core::{respond, Envelope, Query};
use crate::domain::PatientIndexError;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the patients command
#[derive(Args, Debug)]
pub struct PatientsArgs {}

impl PatientsArgs {
    /// The query this command runs
    pub fn to_query(&self) -> Query {
        Query::ListPatients
    }
}

/// Arguments for the patient command
#[derive(Args, Debug)]
pub struct PatientArgs {
    /// Patient ID (e.g. PAT-001)
    pub patient_id: String,
}

impl PatientArgs {
    /// The query this command runs
    pub fn to_query(&self) -> Query {
        Query::GetPatient {
            patient_id: self.patient_id.clone(),
        }
    }
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Fragment of the first name (case-insensitive)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Fragment of the last name (case-insensitive)
    #[arg(long)]
    pub last_name: Option<String>,
}

impl SearchArgs {
    /// The query this command runs
    pub fn to_query(&self) -> Query {
        Query::SearchByName {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Arguments for the appointments command
#[derive(Args, Debug)]
pub struct AppointmentsArgs {
    /// Patient ID
    pub patient_id: String,

    /// Only show one classification: upcoming, recent or past
    #[arg(long = "type")]
    pub kind: Option<String>,
}

impl AppointmentsArgs {
    /// The query this command runs
    pub fn to_query(&self) -> Query {
        Query::Appointments {
            patient_id: self.patient_id.clone(),
            kind: self.kind.clone(),
        }
    }
}

/// Arguments for the test-results command
#[derive(Args, Debug)]
pub struct TestResultsArgs {
    /// Patient ID
    pub patient_id: String,

    /// Only show one test type, matched exactly (e.g. Laboratory, Radiology)
    #[arg(long)]
    pub test_type: Option<String>,
}

impl TestResultsArgs {
    /// The query this command runs
    pub fn to_query(&self) -> Query {
        Query::TestResults {
            patient_id: self.patient_id.clone(),
            test_type: self.test_type.clone(),
        }
    }
}

/// Arguments for the per-patient record commands
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Patient ID
    pub patient_id: String,
}

/// Execute a single query command
pub async fn execute(cli: &Cli, query: Query) -> anyhow::Result<i32> {
    let runtime = match runtime::open(cli) {
        Ok(r) => r,
        Err(e) => {
            log_error_with_context!(&e, "Failed to open patient index");
            eprintln!("Error: {e}");
            return Ok(e.exit_code());
        }
    };

    let (envelope, code) = match respond(&runtime.index, &query) {
        Ok(envelope) => (envelope, 0),
        Err(e @ PatientIndexError::NotFound(_)) => {
            tracing::info!(op = query.name(), error = %e, "Query failed");
            (Envelope::failure(e.to_string()), e.exit_code())
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", runtime::render(&envelope, cli.compact)?);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_to_query() {
        assert_eq!(PatientsArgs {}.to_query(), Query::ListPatients);

        let args = SearchArgs {
            first_name: None,
            last_name: Some("john".to_string()),
        };
        assert_eq!(
            args.to_query(),
            Query::SearchByName {
                first_name: None,
                last_name: Some("john".to_string())
            }
        );

        let args = TestResultsArgs {
            patient_id: "PAT-001".to_string(),
            test_type: Some("Radiology".to_string()),
        };
        assert_eq!(args.to_query().patient_id(), Some("PAT-001"));
    }
}
