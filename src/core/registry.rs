//! Identifier system registry
//!
//! The registry binds identifier-system URIs to display names, to a
//! [`Resolver`] and to [`Mapper`]s keyed by `(source, target)` system pairs.
//! It is populated once at start-up and shared read-only afterwards
//! (typically as `Arc<SystemRegistry>`); it performs no I/O itself.

use crate::domain::{Identifier, IdentifierError, Record, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves a value within one identifier system to the record it denotes
///
/// Implementations return [`IdentifierError::NotFound`] for absent values.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve the identifier's value
    async fn resolve(&self, identifier: &Identifier) -> Result<Record>;
}

/// Maps an identifier from one system to the corresponding identifier in another
///
/// A mapper is bound to exactly one direction; the reverse direction needs
/// its own mapper.
#[async_trait]
pub trait Mapper: Send + Sync {
    /// Map the identifier into the mapper's target system
    async fn map(&self, identifier: &Identifier) -> Result<Identifier>;
}

/// Table of identifier systems and their bound capabilities
///
/// # Example
///
/// ```no_run
/// use concierge::adapters::sds;
/// use concierge::core::SystemRegistry;
/// use concierge::domain::ids::{Identifier, SDS_JOB_ROLE_NAME, SNOMED_CT};
///
/// # async fn example() -> concierge::domain::Result<()> {
/// let mut registry = SystemRegistry::new();
/// sds::register(&mut registry)?;
///
/// let role = registry.resolve(&Identifier::new(SDS_JOB_ROLE_NAME, "R0050")).await?;
/// let concept = registry
///     .map(&Identifier::new(SDS_JOB_ROLE_NAME, "R0050"), SNOMED_CT)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SystemRegistry {
    names: HashMap<String, String>,
    resolvers: HashMap<String, Arc<dyn Resolver>>,
    mappers: HashMap<(String, String), Arc<dyn Mapper>>,
}

impl SystemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a display name for a system URI
    ///
    /// Re-registering a URI replaces its name.
    pub fn register(&mut self, name: impl Into<String>, uri: impl Into<String>) {
        let (name, uri) = (name.into(), uri.into());
        tracing::debug!(uri = %uri, name = %name, "Registered identifier system");
        self.names.insert(uri, name);
    }

    /// Bind a resolver to a system URI
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::DuplicateBinding`] if a resolver is already bound.
    pub fn register_resolver(
        &mut self,
        uri: impl Into<String>,
        resolver: impl Resolver + 'static,
    ) -> Result<()> {
        let uri = uri.into();
        if self.resolvers.contains_key(&uri) {
            return Err(IdentifierError::DuplicateBinding(format!("resolver for {uri}")).into());
        }
        tracing::debug!(uri = %uri, "Registered resolver");
        self.resolvers.insert(uri, Arc::new(resolver));
        Ok(())
    }

    /// Bind a mapper to the `(source, target)` system pair
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::DuplicateBinding`] if a mapper is already bound.
    pub fn register_mapper(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        mapper: impl Mapper + 'static,
    ) -> Result<()> {
        let key = (source.into(), target.into());
        if self.mappers.contains_key(&key) {
            return Err(IdentifierError::DuplicateBinding(format!(
                "mapper from {} to {}",
                key.0, key.1
            ))
            .into());
        }
        tracing::debug!(source = %key.0, target = %key.1, "Registered mapper");
        self.mappers.insert(key, Arc::new(mapper));
        Ok(())
    }

    /// Display name of a registered system
    pub fn system_name(&self, uri: &str) -> Option<&str> {
        self.names.get(uri).map(String::as_str)
    }

    /// All registered systems as `(uri, name)`, sorted by URI
    pub fn systems(&self) -> Vec<(&str, &str)> {
        let mut systems: Vec<(&str, &str)> = self
            .names
            .iter()
            .map(|(uri, name)| (uri.as_str(), name.as_str()))
            .collect();
        systems.sort_unstable();
        systems
    }

    pub fn has_resolver(&self, uri: &str) -> bool {
        self.resolvers.contains_key(uri)
    }

    pub fn has_mapper(&self, source: &str, target: &str) -> bool {
        self.mappers
            .contains_key(&(source.to_string(), target.to_string()))
    }

    /// Resolve an identifier using the resolver bound to its system
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::UnknownSystem`] without calling anything if no
    /// resolver is bound, otherwise whatever the resolver returns.
    pub async fn resolve(&self, identifier: &Identifier) -> Result<Record> {
        let resolver = self
            .resolvers
            .get(&identifier.system)
            .ok_or_else(|| IdentifierError::UnknownSystem(identifier.system.clone()))?;

        tracing::debug!(system = %identifier.system, value = %identifier.value, "Resolving identifier");
        resolver.resolve(identifier).await
    }

    /// Map an identifier into the target system
    ///
    /// Only a directly registered `(identifier.system, target)` mapper is
    /// consulted; mappings are never chained or inverted implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::UnknownSystem`] without calling anything if no
    /// mapper is bound for the pair, otherwise whatever the mapper returns.
    pub async fn map(&self, identifier: &Identifier, target: &str) -> Result<Identifier> {
        let key = (identifier.system.clone(), target.to_string());
        let mapper = self.mappers.get(&key).ok_or_else(|| {
            IdentifierError::UnknownSystem(format!("no mapping from {} to {}", key.0, key.1))
        })?;

        tracing::debug!(
            source = %identifier.system,
            target = %target,
            value = %identifier.value,
            "Mapping identifier"
        );
        mapper.map(identifier).await
    }
}
