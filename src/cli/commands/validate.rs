//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration and, optionally, the data source it points at.

use crate::cli::runtime;
use crate::cli::Cli;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::core::PatientIndex;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Also load the data source to check that it parses
    #[arg(long)]
    pub check_data: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        let config = match runtime::resolve(cli) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Data Source: {}", config.data.path);
        println!(
            "  Recent Window: {} days",
            config.appointments.recent_window_days
        );
        println!("  Batch Concurrency: {}", config.batch.concurrency);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();

        if self.check_data {
            match PatientIndex::load(&config.data.path) {
                Ok(index) => {
                    println!("✅ Data source loaded: {} patient(s)", index.len());
                }
                Err(e) => {
                    println!("❌ Data source failed to load");
                    println!("   Error: {e}");
                    return Ok(3); // Data load error exit code
                }
            }
            println!();
        }

        Ok(0)
    }
}
