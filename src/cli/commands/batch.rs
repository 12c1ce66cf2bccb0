//! Batch command implementation
//!
//! This module implements the `batch` command: it reads JSON Lines queries
//! from a file (or stdin with `-`) and prints one compact response per line.

use crate::cli::runtime;
use crate::cli::Cli;
use crate::core::{parse_batch, run_batch};
use crate::log_error_with_context;
use clap::Args;
use tokio::io::AsyncReadExt;

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON Lines file with one query per line, or `-` for stdin
    pub input: String,

    /// Maximum number of queries evaluated at once (overrides configuration)
    #[arg(long)]
    pub concurrency: Option<usize>,
}

impl BatchArgs {
    /// Execute the batch command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Running query batch");

        let runtime = match runtime::open(cli) {
            Ok(r) => r,
            Err(e) => {
                log_error_with_context!(&e, "Failed to open patient index");
                eprintln!("Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let input = match self.read_input().await {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error: failed to read {}: {e}", self.input);
                return Ok(5);
            }
        };

        let concurrency = self
            .concurrency
            .unwrap_or(runtime.config.batch.concurrency)
            .max(1);

        let report = run_batch(runtime.index, parse_batch(&input), concurrency).await;

        for response in &report.responses {
            println!("{}", runtime::render(response, true)?);
        }

        Ok(if report.all_succeeded() { 0 } else { 1 })
    }

    async fn read_input(&self) -> std::io::Result<String> {
        if self.input == "-" {
            let mut contents = String::new();
            tokio::io::stdin().read_to_string(&mut contents).await?;
            Ok(contents)
        } else {
            tokio::fs::read_to_string(&self.input).await
        }
    }
}
