//! Configuration management for Concierge.
//!
//! # Overview
//!
//! Concierge uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CONCIERGE_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use concierge::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("concierge.toml")?;
//!
//! println!("EMPI: {} ({})", config.empi.environment, config.empi.endpoint_url());
//! println!("Cache: {} minutes", config.empi.cache_minutes);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`EmpiConfig`] - EMPI environment, URL override, timeout, cache, fake mode
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [empi]
//! environment = "testing"
//! timeout_seconds = 2
//! cache_minutes = 5
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/concierge"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, ConciergeConfig, EmpiConfig, LoggingConfig};
