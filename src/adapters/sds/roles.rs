//! SDS job role table and resolver
//!
//! The table is line oriented: a role code, whitespace, then the job title.
//! A trailing `(Closed)` token marks the code deprecated and is not part of
//! the title.

use crate::core::Resolver;
use crate::domain::{Identifier, IdentifierError, Record, Result, Role};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// The SDS job role names code system, as published by NHS Digital
const JOB_ROLES: &str = include_str!("job_roles.tsv");

const CLOSED_MARKER: &str = "(Closed)";

/// Forward (code → role) and title (title → code) indices over the job role table
#[derive(Debug, Default)]
pub struct RoleTable {
    roles: HashMap<String, Role>,
    codes_by_title: HashMap<String, String>,
}

impl RoleTable {
    /// Parse a job role table
    ///
    /// Blank lines are skipped. When two codes share a title, the title index
    /// keeps the first one.
    pub fn parse(data: &str) -> Self {
        let mut table = Self::default();

        for line in data.lines() {
            let mut words: Vec<&str> = line.split_whitespace().collect();
            let Some((&code, _)) = words.split_first() else {
                continue;
            };

            let deprecated = words.len() > 1 && words.last() == Some(&CLOSED_MARKER);
            if deprecated {
                words.pop();
            }
            let job_title = words[1..].join(" ");

            table
                .codes_by_title
                .entry(job_title.clone())
                .or_insert_with(|| code.to_string());
            table
                .roles
                .insert(code.to_string(), Role::new(job_title, deprecated));
        }

        table
    }

    /// The table shipped with the crate
    pub fn builtin() -> Self {
        Self::parse(JOB_ROLES)
    }

    /// Look up a role by its exact (case-sensitive) code
    pub fn get(&self, code: &str) -> Option<&Role> {
        self.roles.get(code)
    }

    /// Look up a role code by its exact job title
    pub fn code_for_title(&self, job_title: &str) -> Option<&str> {
        self.codes_by_title.get(job_title).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Resolves SDS job role codes to [`Role`] records
pub struct RoleResolver {
    table: Arc<RoleTable>,
}

impl RoleResolver {
    pub fn new(table: Arc<RoleTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl Resolver for RoleResolver {
    async fn resolve(&self, identifier: &Identifier) -> Result<Record> {
        self.table
            .get(&identifier.value)
            .cloned()
            .map(Record::from)
            .ok_or_else(|| IdentifierError::not_found(&identifier.system, &identifier.value).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SDS_JOB_ROLE_NAME;

    #[test]
    fn test_builtin_table_consultant() {
        let table = RoleTable::builtin();
        let role = table.get("R0050").unwrap();
        assert_eq!(role.job_title, "Consultant");
        assert!(!role.deprecated);
    }

    #[test]
    fn test_closed_marker_sets_deprecated() {
        let table = RoleTable::builtin();
        let role = table.get("R0120").unwrap();
        assert_eq!(role.job_title, "Senior Registrar");
        assert!(role.deprecated);
        assert_eq!(table.code_for_title("Registrar"), Some("R0130"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = RoleTable::builtin();
        assert!(table.get("r0050").is_none());
        assert!(table.get(" R0050").is_none());
    }

    #[test]
    fn test_duplicate_titles_keep_first_code() {
        let table = RoleTable::builtin();
        assert_eq!(table.code_for_title("Occupational Therapist"), Some("R0950"));
        assert_eq!(table.code_for_title("Home Help"), Some("R9630"));
        assert!(table.get("R9550").is_some());
    }

    #[test]
    fn test_parse_skips_blank_lines_and_collapses_whitespace() {
        let table = RoleTable::parse("\nA1\tChief   Cook \n\n   \nA2 Bottle Washer (Closed)\nA3\n");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("A1").unwrap().job_title, "Chief Cook");
        assert_eq!(table.get("A2").unwrap(), &Role::new("Bottle Washer", true));
        assert_eq!(table.get("A3").unwrap().job_title, "");
    }

    #[test]
    fn test_marker_alone_is_a_title() {
        let table = RoleTable::parse("A1 (Closed)");
        assert_eq!(table.get("A1").unwrap(), &Role::new("", true));
    }

    #[tokio::test]
    async fn test_resolver() {
        let resolver = RoleResolver::new(Arc::new(RoleTable::builtin()));

        let record = resolver
            .resolve(&Identifier::new(SDS_JOB_ROLE_NAME, "R0050"))
            .await
            .unwrap();
        assert_eq!(record.as_role().unwrap().job_title, "Consultant");

        let err = resolver
            .resolve(&Identifier::new(SDS_JOB_ROLE_NAME, "R9999"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
