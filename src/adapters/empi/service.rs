//! EMPI lookup service
//!
//! Ties the client to configuration: input validation, the patient cache,
//! fake mode and the per-call timeout. The service also exposes every
//! authority as a resolvable identifier system.

use super::authority::Authority;
use super::client::EmpiClient;
use super::transport::{EmpiTransport, HttpTransport};
use crate::config::EmpiConfig;
use crate::core::{PatientCache, Resolver, SystemRegistry};
use crate::domain::{
    Address, ContactPoint, ContactPointUse, Identifier, IdentifierError, IdentifierUse, Patient,
    Record, Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

/// Patient lookups against one configured EMPI environment
pub struct EmpiService {
    client: EmpiClient,
    cache: PatientCache,
    endpoint_url: String,
    processing_id: &'static str,
    timeout: Duration,
    fake: bool,
}

impl EmpiService {
    /// Build a service that talks HTTP to the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &EmpiConfig) -> Result<Self> {
        Ok(Self::with_transport(config, Arc::new(HttpTransport::new()?)))
    }

    /// Build a service over an arbitrary transport
    pub fn with_transport(config: &EmpiConfig, transport: Arc<dyn EmpiTransport>) -> Self {
        Self {
            client: EmpiClient::new(transport),
            cache: PatientCache::new(config.cache_ttl()),
            endpoint_url: config.endpoint_url().to_string(),
            processing_id: config.environment.processing_id(),
            timeout: config.timeout(),
            fake: config.fake,
        }
    }

    pub fn cache(&self) -> &PatientCache {
        &self.cache
    }

    pub fn is_fake(&self) -> bool {
        self.fake
    }

    /// Look up a patient by authority code and identifier value
    ///
    /// Returns `Ok(None)` when the EMPI knows no such patient. Found
    /// patients are cached; absence and failures are not.
    ///
    /// # Errors
    ///
    /// Rejects unknown authorities and implausible values before any remote
    /// work, and otherwise propagates EMPI timeouts, transport failures and
    /// malformed responses.
    pub async fn lookup(&self, authority_code: &str, value: &str) -> Result<Option<Patient>> {
        let authority = Authority::from_code(authority_code)?;
        authority.validate_value(value)?;

        let key = PatientCache::key(authority.code(), value);
        if let Some(patient) = self.cache.get(&key) {
            tracing::debug!(authority = %authority, value = %value, "Patient cache hit");
            return Ok(Some(patient));
        }

        let patient = if self.fake {
            tracing::debug!(authority = %authority, value = %value, "Returning fake patient");
            Some(fake_patient(authority, value))
        } else {
            self.client
                .lookup(
                    &self.endpoint_url,
                    self.processing_id,
                    authority,
                    value,
                    self.timeout,
                )
                .await?
        };

        if let Some(patient) = &patient {
            self.cache.insert(key, patient.clone());
        }
        Ok(patient)
    }

    /// Register every authority's identifier system with a resolver backed by this service
    ///
    /// # Errors
    ///
    /// Fails if any authority's system already has a resolver.
    pub fn register_resolvers(self: &Arc<Self>, registry: &mut SystemRegistry) -> Result<()> {
        for &authority in Authority::all() {
            registry.register(authority.display_name(), authority.system_uri());
            registry.register_resolver(
                authority.system_uri(),
                EmpiResolver {
                    service: Arc::clone(self),
                    authority,
                },
            )?;
        }
        tracing::info!(
            systems = Authority::all().len(),
            fake = self.fake,
            url = %self.endpoint_url,
            "Registered EMPI identifier systems"
        );
        Ok(())
    }
}

/// Resolves identifiers of one authority through the EMPI
struct EmpiResolver {
    service: Arc<EmpiService>,
    authority: Authority,
}

#[async_trait]
impl Resolver for EmpiResolver {
    async fn resolve(&self, identifier: &Identifier) -> Result<Record> {
        self.service
            .lookup(self.authority.code(), &identifier.value)
            .await?
            .map(Record::from)
            .ok_or_else(|| IdentifierError::not_found(&identifier.system, &identifier.value).into())
    }
}

/// A fixed synthetic patient carrying the requested identifier
pub fn fake_patient(authority: Authority, value: &str) -> Patient {
    Patient {
        last_name: "DUMMY".to_string(),
        first_names: "ALBERT".to_string(),
        title: "DR".to_string(),
        gender: "M".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1960, 1, 1),
        death_date: None,
        surgery: "W95010".to_string(),
        general_practitioner: "G9342400".to_string(),
        identifiers: vec![
            Identifier::new(authority.system_uri(), value).with_use(IdentifierUse::Official),
            Identifier::new("103", "M1147907").with_use(IdentifierUse::Official),
        ],
        addresses: vec![Address {
            text: "59 Robins Hill\nBrackla\nBRIDGEND\nCF31 2PJ\nWALES".to_string(),
            line: "59 Robins Hill".to_string(),
            city: "Brackla".to_string(),
            district: "BRIDGEND".to_string(),
            postal_code: "CF31 2PJ".to_string(),
            country: "WALES".to_string(),
            period: None,
        }],
        telecom: vec![
            ContactPoint::phone("02920747747")
                .with_use(ContactPointUse::Work)
                .with_description("Work number"),
            ContactPoint::email("test@test.com")
                .with_use(ContactPointUse::Work)
                .with_description("Work email"),
        ],
    }
}
