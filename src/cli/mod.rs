//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap. Each query
//! command maps onto exactly one index operation and prints its response
//! envelope as JSON on stdout.

pub mod commands;
pub mod runtime;

use crate::core::Query;
use clap::{Parser, Subcommand};

/// Patient Index - read-only patient record queries
#[derive(Parser, Debug)]
#[command(name = "patient-index")]
#[command(version, about, long_about = None)]
#[command(author = "Patient Index Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./patient-index.toml if present)
    #[arg(short, long, env = "PATIENT_INDEX_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PATIENT_INDEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Path to the patient data file (overrides the configuration)
    #[arg(short, long, global = true)]
    pub data: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every patient
    Patients(commands::query::PatientsArgs),

    /// Show one patient
    Patient(commands::query::PatientArgs),

    /// Search patients by first and/or last name
    Search(commands::query::SearchArgs),

    /// Show a patient's appointments
    Appointments(commands::query::AppointmentsArgs),

    /// Show a patient's test results
    TestResults(commands::query::TestResultsArgs),

    /// Show a patient's medical history
    MedicalHistory(commands::query::RecordArgs),

    /// Show a patient's insurance information
    Insurance(commands::query::RecordArgs),

    /// Show a patient's care providers
    CareProviders(commands::query::RecordArgs),

    /// Show a patient's procedures
    Procedures(commands::query::RecordArgs),

    /// Run queries from a JSON Lines file concurrently
    Batch(commands::batch::BatchArgs),

    /// Show dataset status and health
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// The index query a single-query command runs
    pub fn query(&self) -> Option<Query> {
        match self {
            Commands::Patients(args) => Some(args.to_query()),
            Commands::Patient(args) => Some(args.to_query()),
            Commands::Search(args) => Some(args.to_query()),
            Commands::Appointments(args) => Some(args.to_query()),
            Commands::TestResults(args) => Some(args.to_query()),
            Commands::MedicalHistory(args) => Some(Query::MedicalHistory {
                patient_id: args.patient_id.clone(),
            }),
            Commands::Insurance(args) => Some(Query::Insurance {
                patient_id: args.patient_id.clone(),
            }),
            Commands::CareProviders(args) => Some(Query::CareProviders {
                patient_id: args.patient_id.clone(),
            }),
            Commands::Procedures(args) => Some(Query::Procedures {
                patient_id: args.patient_id.clone(),
            }),
            Commands::Batch(_)
            | Commands::Status(_)
            | Commands::ValidateConfig(_)
            | Commands::Init(_) => None,
        }
    }
}
