//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing patient index configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point [data] path at your patient JSON file");
                println!("  2. Validate configuration: patient-index validate-config --check-data");
                println!("  3. Check the dataset: patient-index status");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Patient Index Configuration File

[application]
log_level = "info"

[data]
path = "dummy_patient_data.json"

[appointments]
recent_window_days = 30

[batch]
concurrency = 16

[logging]
local_enabled = false
local_path = "/var/log/patient-index"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Patient Index Configuration File
#
# Every value below can also be set through the environment, for example
# PATIENT_INDEX_DATA_PATH or PATIENT_INDEX_APPOINTMENTS_RECENT_WINDOW_DAYS.
# Values may reference environment variables as ${VAR}.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Data Source
# ============================================================================
[data]
# JSON document with a top-level "patients" array. Loaded once at startup.
path = "dummy_patient_data.json"
# path = "${PATIENT_DATA_DIR}/patients.json"

# ============================================================================
# Appointment Classification
# ============================================================================
[appointments]
# Appointments dated within this many days before now are "recent"
# (1-3650). Older ones are "past", later ones "upcoming".
recent_window_days = 30

# ============================================================================
# Batch Queries
# ============================================================================
[batch]
# Maximum number of queries evaluated at once (1-1024)
concurrency = 16

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local JSON file logging (console logs always go to stderr)
local_enabled = false

# Directory for log files
local_path = "/var/log/patient-index"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
