//! Resolution results
//!
//! A resolver returns one of a closed set of record kinds, depending on the
//! identifier system it is bound to.

use super::patient::Patient;
use super::role::Role;
use serde::{Deserialize, Serialize};

/// The record an identifier denotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Record {
    /// A staff job role
    Role(Role),

    /// A patient's demographic record
    Patient(Box<Patient>),
}

impl Record {
    /// Returns the role, if this record is one
    pub fn as_role(&self) -> Option<&Role> {
        match self {
            Record::Role(role) => Some(role),
            _ => None,
        }
    }

    /// Returns the patient, if this record is one
    pub fn as_patient(&self) -> Option<&Patient> {
        match self {
            Record::Patient(patient) => Some(patient.as_ref()),
            _ => None,
        }
    }
}

impl From<Role> for Record {
    fn from(role: Role) -> Self {
        Record::Role(role)
    }
}

impl From<Patient> for Record {
    fn from(patient: Patient) -> Self {
        Record::Patient(Box::new(patient))
    }
}
