//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PatientIndexConfig;
use crate::domain::errors::PatientIndexError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "patient-index.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PatientIndexConfig
/// 4. Applies environment variable overrides (PATIENT_INDEX_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use patient_index::config::loader::load_config;
///
/// let config = load_config("patient-index.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PatientIndexConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PatientIndexError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PatientIndexError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PatientIndexConfig = toml::from_str(&contents)
        .map_err(|e| PatientIndexError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Resolves the effective configuration
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is used
/// if present in the working directory; otherwise built-in defaults apply.
/// Environment overrides and validation happen in every case.
///
/// # Errors
///
/// Same as [`load_config`].
pub fn resolve_config(explicit: Option<&str>) -> Result<PatientIndexConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            let mut config = PatientIndexConfig::default();
            finish(&mut config)?;
            Ok(config)
        }
    }
}

fn finish(config: &mut PatientIndexConfig) -> Result<()> {
    apply_env_overrides(config);

    config.validate().map_err(|e| {
        PatientIndexError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PatientIndexError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PatientIndexError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PATIENT_INDEX_* prefix
///
/// Environment variables follow the pattern: PATIENT_INDEX_<SECTION>_<KEY>,
/// e.g. PATIENT_INDEX_DATA_PATH. Unparseable numeric values are ignored.
fn apply_env_overrides(config: &mut PatientIndexConfig) {
    if let Ok(val) = std::env::var("PATIENT_INDEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("PATIENT_INDEX_DATA_PATH") {
        config.data.path = val;
    }

    if let Ok(val) = std::env::var("PATIENT_INDEX_APPOINTMENTS_RECENT_WINDOW_DAYS") {
        if let Ok(days) = val.parse() {
            config.appointments.recent_window_days = days;
        }
    }

    if let Ok(val) = std::env::var("PATIENT_INDEX_BATCH_CONCURRENCY") {
        if let Ok(concurrency) = val.parse() {
            config.batch.concurrency = concurrency;
        }
    }

    if let Ok(val) = std::env::var("PATIENT_INDEX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PATIENT_INDEX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PATIENT_INDEX_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
