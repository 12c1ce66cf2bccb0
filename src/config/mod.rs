//! Configuration management for the patient index.
//!
//! # Overview
//!
//! Configuration comes from an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PATIENT_INDEX_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use patient_index::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("patient-index.toml")?;
//! println!("Data source: {}", config.data.path);
//! println!("Recent window: {} days", config.appointments.recent_window_days);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`DataConfig`] - Location of the patient JSON document
//! - [`AppointmentsConfig`] - Recency window for appointment classification
//! - [`BatchConfig`] - Concurrency of the batch runner
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [data]
//! path = "${PATIENT_DATA_DIR}/dummy_patient_data.json"
//!
//! [appointments]
//! recent_window_days = 30
//!
//! [batch]
//! concurrency = 16
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, resolve_config, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, AppointmentsConfig, BatchConfig, DataConfig, LoggingConfig,
    PatientIndexConfig,
};
