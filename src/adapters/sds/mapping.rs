//! SDS job role ↔ SNOMED CT occupation mapping
//!
//! The forward table is hand curated and intentionally partial. The reverse
//! table is its inversion; where several roles share a concept the first
//! entry in table order wins.

use crate::adapters::snomed::SctId;
use crate::core::Mapper;
use crate::domain::ids::{SDS_JOB_ROLE_NAME, SNOMED_CT};
use crate::domain::{Identifier, IdentifierError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

const SDS_TO_SNOMED: &[(&str, u64)] = &[
    ("R0050", 768839008),
    ("R0030", 158890004),
    // no concept for senior lecturer, so it shares consultant's
    ("R0040", 768839008),
    ("R0070", 309396002),
    ("R0080", 397908005),
    ("R0100", 224529009),
    ("R0110", 302211009),
    ("R0120", 224530004),
    ("R0130", 224531000),
    ("R0140", 224532007),
    ("R0150", 158972004),
    ("R0260", 62247001),
    ("R0370", 309454000),
    ("R0790", 159033005),
    ("R0018", 309418004),
    ("R1760", 394572006),
];

/// Bidirectional index between role codes and SNOMED CT concept ids
#[derive(Debug, Default)]
pub struct RoleConceptMap {
    forward: HashMap<String, u64>,
    reverse: HashMap<u64, String>,
}

impl RoleConceptMap {
    /// Build both directions from ordered `(role code, concept id)` pairs
    pub fn new(entries: &[(&str, u64)]) -> Self {
        let mut map = Self::default();
        for &(code, concept) in entries {
            map.forward.entry(code.to_string()).or_insert(concept);
            map.reverse
                .entry(concept)
                .or_insert_with(|| code.to_string());
        }
        map
    }

    /// The curated table shipped with the crate
    pub fn builtin() -> Self {
        Self::new(SDS_TO_SNOMED)
    }

    pub fn concept_for_role(&self, code: &str) -> Option<u64> {
        self.forward.get(code).copied()
    }

    pub fn role_for_concept(&self, concept: u64) -> Option<&str> {
        self.reverse.get(&concept).map(String::as_str)
    }
}

/// Maps SDS job role codes to SNOMED CT concepts
pub struct SdsToSnomed {
    map: Arc<RoleConceptMap>,
}

impl SdsToSnomed {
    pub fn new(map: Arc<RoleConceptMap>) -> Self {
        Self { map }
    }
}

#[async_trait]
impl Mapper for SdsToSnomed {
    async fn map(&self, identifier: &Identifier) -> Result<Identifier> {
        self.map
            .concept_for_role(&identifier.value)
            .map(|concept| Identifier::new(SNOMED_CT, concept.to_string()))
            .ok_or_else(|| IdentifierError::not_found(SNOMED_CT, &identifier.value).into())
    }
}

/// Maps SNOMED CT concepts back to SDS job role codes
///
/// Input must be a valid SCTID denoting a concept; anything else is rejected
/// before the table is consulted.
pub struct SnomedToSds {
    map: Arc<RoleConceptMap>,
}

impl SnomedToSds {
    pub fn new(map: Arc<RoleConceptMap>) -> Self {
        Self { map }
    }
}

#[async_trait]
impl Mapper for SnomedToSds {
    async fn map(&self, identifier: &Identifier) -> Result<Identifier> {
        let concept = SctId::parse(&identifier.value).map_err(IdentifierError::InvalidIdentifier)?;
        if !concept.is_concept() {
            return Err(IdentifierError::InvalidIdentifier(format!(
                "cannot map from SNOMED CT: expected a concept, got {concept}"
            ))
            .into());
        }

        self.map
            .role_for_concept(concept.as_u64())
            .map(|code| Identifier::new(SDS_JOB_ROLE_NAME, code))
            .ok_or_else(|| IdentifierError::not_found(SDS_JOB_ROLE_NAME, &identifier.value).into())
    }
}
