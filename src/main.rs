// Patient Index - Read-only patient record query service
// Copyright (c) 2025 Patient Index Contributors
// Licensed under the MIT License

use clap::Parser;
use patient_index::cli::{commands, Cli, Commands};
use patient_index::config::resolve_config;
use patient_index::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging is configured before commands run, so a broken config file
    // falls back to defaults here and is reported by the command itself.
    let config = resolve_config(cli.config.as_deref()).unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.application.log_level.clone());

    let guard = match init_logging(&log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Patient Index - read-only patient record queries"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors, so flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Batch(args) => args.execute(cli).await,
        Commands::Status(args) => args.execute(cli).await,
        Commands::ValidateConfig(args) => args.execute(cli).await,
        Commands::Init(args) => args.execute().await,
        Commands::Patients(_)
        | Commands::Patient(_)
        | Commands::Search(_)
        | Commands::Appointments(_)
        | Commands::TestResults(_)
        | Commands::MedicalHistory(_)
        | Commands::Insurance(_)
        | Commands::CareProviders(_)
        | Commands::Procedures(_) => {
            let query = cli
                .command
                .query()
                .ok_or_else(|| anyhow::anyhow!("Command has no index query"))?;
            commands::query::execute(cli, query).await
        }
    }
}
