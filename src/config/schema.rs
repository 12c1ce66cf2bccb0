//! Configuration schema types
//!
//! This module defines the configuration structure for the patient index.

use crate::core::classify::RecencyWindow;
use serde::{Deserialize, Serialize};

/// Main patient index configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientIndexConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Data source settings
    #[serde(default)]
    pub data: DataConfig,

    /// Appointment classification settings
    #[serde(default)]
    pub appointments: AppointmentsConfig,

    /// Batch execution settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PatientIndexConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.data.validate()?;
        self.appointments.validate()?;
        self.batch.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the patient JSON document
    #[serde(default = "default_data_path")]
    pub path: String,
}

impl DataConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("data.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// Appointment classification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsConfig {
    /// Days after which a past appointment stops being "recent"
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,
}

impl AppointmentsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.recent_window_days == 0 || self.recent_window_days > 3650 {
            return Err(format!(
                "appointments.recent_window_days must be between 1 and 3650, got {}",
                self.recent_window_days
            ));
        }
        Ok(())
    }

    /// The configured window
    pub fn recent_window(&self) -> RecencyWindow {
        RecencyWindow::days(self.recent_window_days)
    }
}

impl Default for AppointmentsConfig {
    fn default() -> Self {
        Self {
            recent_window_days: default_recent_window_days(),
        }
    }
}

/// Batch execution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of queries evaluated at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.concurrency == 0 || self.concurrency > 1024 {
            return Err(format!(
                "batch.concurrency must be between 1 and 1024, got {}",
                self.concurrency
            ));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_path() -> String {
    "dummy_patient_data.json".to_string()
}

fn default_recent_window_days() -> u32 {
    RecencyWindow::DEFAULT_DAYS
}

fn default_concurrency() -> usize {
    16
}

fn default_local_path() -> String {
    "/var/log/patient-index".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PatientIndexConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data.path, "dummy_patient_data.json");
        assert_eq!(config.appointments.recent_window_days, 30);
        assert_eq!(config.batch.concurrency, 16);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PatientIndexConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_data_config_validation() {
        let config = DataConfig {
            path: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_appointments_config_validation() {
        let mut config = AppointmentsConfig {
            recent_window_days: 0,
        };
        assert!(config.validate().is_err());

        config.recent_window_days = 3651;
        assert!(config.validate().is_err());

        config.recent_window_days = 90;
        assert!(config.validate().is_ok());
        assert_eq!(config.recent_window().as_days(), 90);
    }

    #[test]
    fn test_batch_config_validation() {
        let mut config = BatchConfig { concurrency: 0 };
        assert!(config.validate().is_err());

        config.concurrency = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }
}
