//! Status command implementation
//!
//! This module implements the `status` command: it loads the dataset and
//! reports health, totals and the supported operations.

use crate::cli::runtime;
use crate::cli::Cli;
use crate::core::DatasetSummary;
use clap::Args;

/// Operations a query can name in its `op` field
const OPERATIONS: &[&str] = &[
    "listPatients",
    "getPatient",
    "searchByName",
    "appointments",
    "testResults",
    "medicalHistory",
    "insurance",
    "careProviders",
    "procedures",
];

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!("Checking dataset status");

        let runtime = match runtime::open(cli) {
            Ok(r) => r,
            Err(e) => {
                if self.json {
                    let body = serde_json::json!({"status": "error", "message": e.to_string()});
                    println!("{}", runtime::render(&body, cli.compact)?);
                } else {
                    println!("❌ Patient index unavailable");
                    println!("   Error: {e}");
                }
                return Ok(e.exit_code());
            }
        };

        let summary = DatasetSummary::from_index(&runtime.index);

        if self.json {
            let body = serde_json::json!({
                "status": "ok",
                "message": "Patient index is ready",
                "version": env!("CARGO_PKG_VERSION"),
                "dataPath": runtime.config.data.path,
                "operations": OPERATIONS,
                "summary": summary,
            });
            println!("{}", runtime::render(&body, cli.compact)?);
            return Ok(0);
        }

        println!("📊 Patient Index Status");
        println!();
        println!("✅ Patient index is ready");
        println!("  Version: {}", env!("CARGO_PKG_VERSION"));
        println!("  Data Source: {}", runtime.config.data.path);
        println!("  Patients: {}", summary.patients);
        println!(
            "  Appointments: {} (as of {})",
            summary.appointments,
            summary.as_of.format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!(
            "    {:<12} {:<12} {:<12} {:<12}",
            "Upcoming", "Recent", "Past", "Unclassified"
        );
        println!(
            "    {:<12} {:<12} {:<12} {:<12}",
            summary.upcoming, summary.recent, summary.past, summary.unclassified
        );
        println!("  Recent Window: {} days", summary.recent_window_days);
        println!("  Test Results: {}", summary.test_results);
        for (test_type, count) in &summary.test_types {
            println!("    {test_type:<24} {count}");
        }
        println!();
        println!("Operations: {}", OPERATIONS.join(", "));
        println!();
        Ok(0)
    }
}
