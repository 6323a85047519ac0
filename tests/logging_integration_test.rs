//! Integration tests for logging functionality

use concierge::config::LoggingConfig;
use concierge::logging::{init_logging, proxy_settings, LOG_FILE_PREFIX};
use std::env::VarError;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
    assert_eq!(config.local_path, "/var/log/concierge");
}

// The global subscriber can only be installed once per process, so this file
// holds the only test that installs one.
#[test]
fn test_init_logging_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "daily".to_string(),
    };

    let guard = init_logging("info", &config).unwrap();
    assert!(guard.has_file_output());
    assert!(log_path.is_dir());

    tracing::info!(target: "concierge", marker = "integration", "Logging test event");
    drop(guard);

    let files: Vec<_> = std::fs::read_dir(&log_path)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX))
        .collect();
    assert_eq!(files.len(), 1);

    let contents = std::fs::read_to_string(files[0].path()).unwrap();
    let line = contents
        .lines()
        .find(|line| line.contains("Logging test event"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["fields"]["marker"], "integration");

    // A second subscriber is refused rather than panicking
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}

#[test]
fn test_invalid_level_rejected_before_install() {
    assert!(init_logging("loud", &LoggingConfig::default()).is_err());
}

#[test]
fn test_proxy_settings_detection() {
    let found = proxy_settings(|name| {
        if name == "http_proxy" {
            Ok("http://proxy.example:8080".to_string())
        } else {
            Err(VarError::NotPresent)
        }
    });
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, "http_proxy");
}
