//! General-purpose data types shared by identifiers and patients
//!
//! Shapes follow the FHIR datatypes of the same names, trimmed to the fields
//! the EMPI actually populates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time period with optional bounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Starting date, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,

    /// Ending date, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl Period {
    /// Builds a period from optional bounds, or `None` when both are unknown
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        if start.is_none() && end.is_none() {
            None
        } else {
            Some(Self { start, end })
        }
    }
}

/// A reference from one resource to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Literal reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Type the reference refers to, e.g. Organization
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Text alternative for the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Reference {
    /// Reference to an organization known only by its code
    pub fn organization(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            reference: Some(code.clone()),
            type_: Some("Organization".to_string()),
            display: Some(code),
        }
    }
}

/// A postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Full address as free text, one component per line
    pub text: String,
    pub line: String,
    pub city: String,
    pub district: String,
    pub postal_code: String,
    pub country: String,

    /// Time period when the address was/is in use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Telecommunications form of a contact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointSystem {
    Phone,
    Email,
}

/// Purpose of a contact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointUse {
    Home,
    Work,
}

/// A technology-mediated contact point (telephone, email)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub system: ContactPointSystem,
    pub value: String,

    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<ContactPointUse>,

    /// Free-text description, e.g. the field label supplied by the source system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ContactPoint {
    /// Creates a telephone contact point
    pub fn phone(value: impl Into<String>) -> Self {
        Self {
            system: ContactPointSystem::Phone,
            value: value.into(),
            use_: None,
            description: None,
        }
    }

    /// Creates an email contact point
    pub fn email(value: impl Into<String>) -> Self {
        Self {
            system: ContactPointSystem::Email,
            value: value.into(),
            use_: None,
            description: None,
        }
    }

    /// Sets the use
    pub fn with_use(mut self, use_: ContactPointUse) -> Self {
        self.use_ = Some(use_);
        self
    }

    /// Sets the description; empty descriptions are ignored
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(description);
        }
        self
    }
}
