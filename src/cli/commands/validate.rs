//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Concierge configuration file.

use crate::cli::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  EMPI Environment: {}", config.empi.environment);
        println!("  EMPI URL: {}", config.empi.endpoint_url());
        println!("  Processing ID: {}", config.empi.environment.processing_id());
        println!("  Timeout: {}s", config.empi.timeout_seconds);
        if config.empi.cache_minutes == 0 {
            println!("  Cache: disabled");
        } else {
            println!("  Cache: {} minutes", config.empi.cache_minutes);
        }
        println!("  Fake Mode: {}", config.empi.fake);
        if config.logging.local_enabled {
            println!(
                "  Log Files: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  Log Files: disabled");
        }
        println!();
        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let args = ValidateArgs {};
        assert_eq!(args.execute("missing-concierge.toml").await.unwrap(), EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_validate_invalid_rotation() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[logging]\nlocal_rotation = \"weekly\"\n").unwrap();

        let args = ValidateArgs {};
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(args.execute(&path).await.unwrap(), EXIT_CONFIG);
    }
}
