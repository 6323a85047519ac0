//! Patient domain model
//!
//! The canonical demographic record produced by EMPI lookups.

use super::datatypes::{Address, ContactPoint};
use super::ids::Identifier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Demographic details of a patient
///
/// A `Patient` is always fully normalized; a lookup that matches nobody
/// yields `None` rather than a record with blank fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Family name
    pub last_name: String,

    /// Given names, space separated
    pub first_names: String,

    pub title: String,

    /// Administrative gender as supplied by the source system
    pub gender: String,

    #[serde(rename = "dateBirth", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "dateDeath", default)]
    pub death_date: Option<NaiveDate>,

    /// Registered general practice code
    pub surgery: String,

    /// Registered general practitioner code
    pub general_practitioner: String,

    /// Identifiers in source order
    pub identifiers: Vec<Identifier>,

    /// Addresses in source order
    pub addresses: Vec<Address>,

    /// Telephone and email contact points in source order
    pub telecom: Vec<ContactPoint>,
}

impl Patient {
    /// Returns the first identifier issued within the given system
    pub fn identifier(&self, system: &str) -> Option<&Identifier> {
        self.identifiers.iter().find(|id| id.system == system)
    }
}
