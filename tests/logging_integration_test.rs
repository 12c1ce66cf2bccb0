//! Integration tests for logging functionality
//!
//! A global subscriber can only be installed once per process, so the
//! initialization path is exercised by a single test.

use patient_index::config::LoggingConfig;
use patient_index::core::PatientIndex;
use patient_index::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "/var/log/patient-index");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_file_logging_creates_directory_and_log() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };
    assert!(!log_path.exists());

    std::env::remove_var("RUST_LOG");
    let guard = init_logging("info", &config).unwrap();
    let fixture =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/patients.json");
    let index = PatientIndex::load(fixture).unwrap();
    assert_eq!(index.len(), 3);
    drop(guard);

    assert!(log_path.exists());
    let log_file = log_path.join("patient-index.log");
    let contents = std::fs::read_to_string(log_file).unwrap();
    assert!(contents.contains("Patient data loaded"));

    // A second subscriber cannot be installed
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}
