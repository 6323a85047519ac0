//! NHS Spine Directory Service (SDS) job roles
//!
//! Resolution of SDS job role codes from a static table, plus a partial
//! mapping between job roles and SNOMED CT occupation concepts.

pub mod mapping;
pub mod roles;

pub use mapping::{RoleConceptMap, SdsToSnomed, SnomedToSds};
pub use roles::{RoleResolver, RoleTable};

use crate::core::SystemRegistry;
use crate::domain::ids::{SDS_JOB_ROLE_NAME, SNOMED_CT};
use crate::domain::Result;
use std::sync::Arc;

/// Register the SDS job role system, its resolver and both mapping directions
///
/// # Errors
///
/// Fails if any of the bindings is already taken.
pub fn register(registry: &mut SystemRegistry) -> Result<()> {
    let table = Arc::new(RoleTable::builtin());
    let map = Arc::new(RoleConceptMap::builtin());

    registry.register("SDS Job Roles", SDS_JOB_ROLE_NAME);
    registry.register("SNOMED CT", SNOMED_CT);
    registry.register_resolver(SDS_JOB_ROLE_NAME, RoleResolver::new(Arc::clone(&table)))?;
    registry.register_mapper(SDS_JOB_ROLE_NAME, SNOMED_CT, SdsToSnomed::new(Arc::clone(&map)))?;
    registry.register_mapper(SNOMED_CT, SDS_JOB_ROLE_NAME, SnomedToSds::new(map))?;

    tracing::info!(roles = table.len(), "Registered SDS job roles");
    Ok(())
}
