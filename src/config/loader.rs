//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ConciergeConfig;
use crate::domain::errors::ConciergeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ConciergeConfig
/// 4. Applies environment variable overrides (CONCIERGE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use concierge::config::loader::load_config;
///
/// let config = load_config("concierge.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ConciergeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConciergeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ConciergeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: ConciergeConfig = toml::from_str(&contents)
        .map_err(|e| ConciergeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads configuration from `path` if it exists, otherwise starts from defaults
///
/// Environment overrides and validation apply either way, so a deployment can
/// be configured purely through `CONCIERGE_*` variables.
///
/// # Errors
///
/// As [`load_config`].
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ConciergeConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        finish(ConciergeConfig::default())
    }
}

fn finish(mut config: ConciergeConfig) -> Result<ConciergeConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ConciergeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are reported
/// together.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ConciergeError::Other(format!("invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
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
        return Err(ConciergeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CONCIERGE_* prefix
///
/// Environment variables follow the pattern: CONCIERGE_<SECTION>_<KEY>
/// For example: CONCIERGE_EMPI_ENVIRONMENT, CONCIERGE_EMPI_FAKE
///
/// # Errors
///
/// Returns an error if an override cannot be parsed
fn apply_env_overrides(config: &mut ConciergeConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("CONCIERGE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // EMPI overrides
    if let Ok(val) = std::env::var("CONCIERGE_EMPI_ENVIRONMENT") {
        config.empi.environment = val
            .parse()
            .map_err(|e| ConciergeError::Configuration(format!("CONCIERGE_EMPI_ENVIRONMENT: {e}")))?;
    }
    if let Ok(val) = std::env::var("CONCIERGE_EMPI_URL") {
        config.empi.url = Some(val);
    }
    if let Ok(val) = std::env::var("CONCIERGE_EMPI_TIMEOUT_SECONDS") {
        config.empi.timeout_seconds = parse_override("CONCIERGE_EMPI_TIMEOUT_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("CONCIERGE_EMPI_CACHE_MINUTES") {
        config.empi.cache_minutes = parse_override("CONCIERGE_EMPI_CACHE_MINUTES", &val)?;
    }
    if let Ok(val) = std::env::var("CONCIERGE_EMPI_FAKE") {
        config.empi.fake = parse_override("CONCIERGE_EMPI_FAKE", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CONCIERGE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("CONCIERGE_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("CONCIERGE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConciergeError::Configuration(format!("{name}: invalid value '{value}': {e}")))
}
