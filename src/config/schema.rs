//! Configuration schema types

use crate::adapters::empi::Endpoint;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main Concierge configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConciergeConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// EMPI connection settings
    #[serde(default)]
    pub empi: EmpiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConciergeConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.empi.validate()?;
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

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
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

/// EMPI connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpiConfig {
    /// Target environment (production, testing, development)
    #[serde(default)]
    pub environment: Endpoint,

    /// Service URL, overriding the environment's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Per-lookup timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// How long found patients stay cached; 0 disables the cache
    #[serde(default = "default_cache_minutes")]
    pub cache_minutes: u64,

    /// Answer every lookup with a synthetic patient instead of calling the EMPI
    #[serde(default)]
    pub fake: bool,
}

impl Default for EmpiConfig {
    fn default() -> Self {
        Self {
            environment: Endpoint::default(),
            url: None,
            timeout_seconds: default_timeout_seconds(),
            cache_minutes: default_cache_minutes(),
            fake: false,
        }
    }
}

impl EmpiConfig {
    /// URL lookups are sent to
    pub fn endpoint_url(&self) -> &str {
        self.url.as_deref().unwrap_or_else(|| self.environment.url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_minutes.saturating_mul(60))
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(url) = &self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("empi.url must start with http:// or https://".to_string());
            }
            url::Url::parse(url).map_err(|e| format!("empi.url '{url}' is invalid: {e}"))?;
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 60 {
            return Err(format!(
                "empi.timeout_seconds must be between 1 and 60, got {}",
                self.timeout_seconds
            ));
        }

        if self.cache_minutes > 24 * 60 {
            return Err(format!(
                "empi.cache_minutes must be at most 1440, got {}",
                self.cache_minutes
            ));
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
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

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
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

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    2
}

fn default_cache_minutes() -> u64 {
    5
}

fn default_local_path() -> String {
    "/var/log/concierge".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: ConciergeConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.empi.environment, Endpoint::Development);
        assert_eq!(config.empi.timeout(), Duration::from_secs(2));
        assert_eq!(config.empi.cache_ttl(), Duration::from_secs(300));
        assert!(!config.empi.fake);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
        };

        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_url_override() {
        let mut config = EmpiConfig {
            environment: Endpoint::Testing,
            ..EmpiConfig::default()
        };
        assert_eq!(config.endpoint_url(), Endpoint::Testing.url());

        config.url = Some("http://localhost:8080/mpi".to_string());
        assert_eq!(config.endpoint_url(), "http://localhost:8080/mpi");
        assert!(config.validate().is_ok());

        config.url = Some("ftp://localhost".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empi_timeout_bounds() {
        let mut config = EmpiConfig::default();

        config.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.timeout_seconds = 61;
        assert!(config.validate().is_err());

        config.timeout_seconds = 60;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cache_can_be_disabled() {
        let config: EmpiConfig = toml::from_str("cache_minutes = 0").unwrap();
        assert_eq!(config.cache_ttl(), Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cache_ttl_saturates_without_validation() {
        let config = EmpiConfig {
            cache_minutes: u64::MAX,
            ..EmpiConfig::default()
        };
        assert_eq!(config.cache_ttl(), Duration::from_secs(u64::MAX));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "size".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_environment_rejected() {
        let result: std::result::Result<EmpiConfig, _> = toml::from_str("environment = \"staging\"");
        assert!(result.is_err());
    }
}
