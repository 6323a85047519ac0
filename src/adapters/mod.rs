//! Identifier systems and external integrations for Concierge.
//!
//! - [`sds`] - SDS job roles: static-table resolver and SNOMED CT mapping
//! - [`snomed`] - SNOMED CT identifier validation
//! - [`empi`] - Enterprise Master Patient Index (EMPI) demographics queries
//!
//! # Design Pattern
//!
//! Each identifier system plugs into the [`SystemRegistry`] through the
//! [`Resolver`](crate::core::Resolver) and [`Mapper`](crate::core::Mapper)
//! traits. Network access sits behind the
//! [`EmpiTransport`](empi::EmpiTransport) trait so lookups can be tested
//! against stubs or a mock server.
//!
//! ```rust,no_run
//! use concierge::adapters::build_registry;
//! use concierge::config::EmpiConfig;
//! use concierge::domain::ids::{Identifier, SDS_JOB_ROLE_NAME, SNOMED_CT};
//!
//! # async fn example() -> concierge::domain::Result<()> {
//! let registry = build_registry(&EmpiConfig::default())?;
//!
//! let concept = registry
//!     .map(&Identifier::new(SDS_JOB_ROLE_NAME, "R0050"), SNOMED_CT)
//!     .await?;
//! assert_eq!(concept.value, "768839008");
//! # Ok(())
//! # }
//! ```

pub mod empi;
pub mod sds;
pub mod snomed;

use crate::config::EmpiConfig;
use crate::core::SystemRegistry;
use crate::domain::Result;
use empi::EmpiService;
use std::sync::Arc;

/// Register every built-in identifier system against `empi`
///
/// # Errors
///
/// Fails if any system is already bound in `registry`.
pub fn register_all(registry: &mut SystemRegistry, empi: &Arc<EmpiService>) -> Result<()> {
    sds::register(registry)?;
    empi.register_resolvers(registry)?;
    Ok(())
}

/// Build a registry with every built-in identifier system, backed by an EMPI
/// service for the given configuration
///
/// # Errors
///
/// Fails if the EMPI HTTP client cannot be built.
pub fn build_registry(config: &EmpiConfig) -> Result<SystemRegistry> {
    let empi = Arc::new(EmpiService::from_config(config)?);
    let mut registry = SystemRegistry::new();
    register_all(&mut registry, &empi)?;
    Ok(registry)
}
