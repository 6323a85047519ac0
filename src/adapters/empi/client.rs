//! EMPI demographics query client

use super::authority::Authority;
use super::request::IdentifierRequest;
use super::response::parse_patient;
use super::transport::EmpiTransport;
use crate::domain::{EmpiError, Patient, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Performs single patient lookups against an EMPI endpoint
///
/// The client holds no endpoint state; every call names its target, which
/// keeps it usable against any environment or a mock server.
#[derive(Clone)]
pub struct EmpiClient {
    transport: Arc<dyn EmpiTransport>,
}

impl EmpiClient {
    pub fn new(transport: Arc<dyn EmpiTransport>) -> Self {
        Self { transport }
    }

    /// Look up a patient by an identifier issued by `authority`
    ///
    /// Returns `Ok(None)` when the EMPI has no matching patient. The whole
    /// exchange, including reading the body, is bounded by `timeout`;
    /// dropping the returned future abandons the request.
    ///
    /// # Errors
    ///
    /// Returns [`EmpiError::Timeout`], [`EmpiError::TransportFailure`] or
    /// [`EmpiError::MalformedResponse`].
    pub async fn lookup(
        &self,
        endpoint_url: &str,
        processing_id: &str,
        authority: Authority,
        value: &str,
        timeout: Duration,
    ) -> Result<Option<Patient>> {
        let request = IdentifierRequest::new(value, authority, processing_id);
        tracing::debug!(
            authority = %authority,
            value = %value,
            message_control_id = %request.message_control_id,
            url = %endpoint_url,
            "Sending EMPI demographics query"
        );

        let start = Instant::now();
        let body = tokio::time::timeout(
            timeout,
            self.transport.post(endpoint_url, request.to_xml(), timeout),
        )
        .await
        .map_err(|_| {
            EmpiError::Timeout(format!("no response from {endpoint_url} within {timeout:?}"))
        })??;

        let patient = parse_patient(&body)?;
        tracing::info!(
            authority = %authority,
            found = patient.is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "EMPI lookup complete"
        );
        Ok(patient)
    }
}
