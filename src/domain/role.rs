//! Staff job role model

use serde::{Deserialize, Serialize};

/// A job role from a staff-role code system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Human-readable job title
    pub job_title: String,

    /// Whether the code has been closed for new use
    pub deprecated: bool,
}

impl Role {
    pub fn new(job_title: impl Into<String>, deprecated: bool) -> Self {
        Self {
            job_title: job_title.into(),
            deprecated,
        }
    }
}
