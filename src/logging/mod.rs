//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human readable console logs on stderr
//! - JSON-formatted local log files with daily or hourly rotation
//! - `RUST_LOG` filtering
//!
//! # Example
//!
//! ```no_run
//! use concierge::logging::init_logging;
//! use concierge::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard, LOG_FILE_PREFIX};

const PROXY_VARIABLES: [&str; 4] = ["http_proxy", "https_proxy", "HTTP_PROXY", "HTTPS_PROXY"];

/// Proxy variables set in the environment, with their values
///
/// `lookup` is normally `std::env::var`.
pub fn proxy_settings<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    PROXY_VARIABLES
        .iter()
        .filter_map(|&name| lookup(name).ok().map(|value| (name, value)))
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

/// Warn about proxy variables, a frequent cause of EMPI connection failures
pub fn warn_on_proxy_settings() {
    for (name, value) in proxy_settings(|name| std::env::var(name)) {
        tracing::warn!(
            variable = name,
            value = %value,
            "Proxy configured; EMPI requests will be routed through it"
        );
    }
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use concierge::log_error_with_context;
/// use concierge::domain::ConciergeError;
///
/// let error = ConciergeError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log the outcome of a resolution or mapping
///
/// # Example
///
/// ```no_run
/// use concierge::log_resolution;
/// use concierge::domain::Identifier;
///
/// let identifier = Identifier::new("http://snomed.info/sct", "768839008");
/// log_resolution!(&identifier, true);
/// ```
#[macro_export]
macro_rules! log_resolution {
    ($identifier:expr, $found:expr) => {
        tracing::info!(
            system = %$identifier.system,
            value = %$identifier.value,
            found = $found,
            "Resolved identifier"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn test_proxy_settings() {
        let found = proxy_settings(|name| match name {
            "https_proxy" => Ok("http://proxy:3128".to_string()),
            "HTTP_PROXY" => Ok(String::new()),
            _ => Err(VarError::NotPresent),
        });
        assert_eq!(found, vec![("https_proxy", "http://proxy:3128".to_string())]);
    }

    #[test]
    fn test_no_proxy_settings() {
        assert!(proxy_settings(|_| Err(VarError::NotPresent)).is_empty());
    }
}
