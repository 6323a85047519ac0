//! Identifier types and well-known identifier systems
//!
//! An [`Identifier`] is a `(system, value)` pair. System URIs are canonical and
//! case-sensitive; values compare as exact strings.

use super::datatypes::{Period, Reference};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SNOMED CT
pub const SNOMED_CT: &str = "http://snomed.info/sct";

/// NHS Spine Directory Service job role names
pub const SDS_JOB_ROLE_NAME: &str =
    "https://fhir.nhs.uk/STU3/CodeSystem/CareConnect-SDSJobRoleName-1";

/// NHS number
pub const NHS_NUMBER: &str = "https://fhir.nhs.uk/Id/nhs-number";

/// Internal (ephemeral) NHS Wales EMPI identifier
pub const EMPI_NUMBER: &str = "https://fhir.wales.nhs.uk/Id/empi-number";

/// Purpose of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
    Old,
}

/// An identifier within a named system
///
/// # Examples
///
/// ```
/// use concierge::domain::ids::{Identifier, SNOMED_CT};
///
/// let id = Identifier::new(SNOMED_CT, "768839008");
/// assert_eq!(id.system, SNOMED_CT);
/// assert_eq!(id.to_string(), "http://snomed.info/sct|768839008");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Purpose of this identifier, if known
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<IdentifierUse>,

    /// Namespace URI
    pub system: String,

    /// Value, unique within the system
    pub value: String,

    /// Period during which the identifier is/was valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization that issued the identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Reference>,
}

impl Identifier {
    /// Creates an identifier with no metadata
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            use_: None,
            system: system.into(),
            value: value.into(),
            period: None,
            assigner: None,
        }
    }

    /// Sets the identifier use
    pub fn with_use(mut self, use_: IdentifierUse) -> Self {
        self.use_ = Some(use_);
        self
    }

    /// Sets the assigning organization
    pub fn with_assigner(mut self, assigner: Reference) -> Self {
        self.assigner = Some(assigner);
        self
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.system, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality_is_exact() {
        let a = Identifier::new(SDS_JOB_ROLE_NAME, "R0050");
        let b = Identifier::new(SDS_JOB_ROLE_NAME, "r0050");
        assert_ne!(a, b);
        assert_eq!(a, Identifier::new(SDS_JOB_ROLE_NAME, "R0050"));
    }

    #[test]
    fn test_identifier_serialization_omits_empty_metadata() {
        let id = Identifier::new(NHS_NUMBER, "7253698428");
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"system": NHS_NUMBER, "value": "7253698428"})
        );
    }

    #[test]
    fn test_identifier_with_metadata() {
        let id = Identifier::new(NHS_NUMBER, "7253698428")
            .with_use(IdentifierUse::Official)
            .with_assigner(Reference::organization("NHS"));
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["use"], "official");
        assert_eq!(json["assigner"]["display"], "NHS");

        let back: Identifier = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
