//! HTTP transport for EMPI requests
//!
//! The [`EmpiTransport`] trait is the seam between the protocol code and the
//! network, so the client can be exercised against an in-memory stub.

use crate::domain::{EmpiError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

pub const SOAP_ACTION: &str = "http://apps.wales.nhs.uk/mpi/InvokePatientDemographicsQuery";

pub const CONTENT_TYPE_XML: &str = "text/xml; charset=\"utf-8\"";

/// Posts a request document and returns the response body
#[async_trait]
pub trait EmpiTransport: Send + Sync {
    /// Send `body` to `url`, giving up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns [`EmpiError::Timeout`] if no complete response arrives in
    /// time, and [`EmpiError::TransportFailure`] for connection errors and
    /// non-2xx statuses.
    async fn post(&self, url: &str, body: String, timeout: Duration) -> Result<String>;
}

/// [`EmpiTransport`] over a pooled `reqwest` client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with the SOAP headers preset
    ///
    /// # Errors
    ///
    /// Returns a transport failure if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_XML));
        headers.insert("SOAPAction", HeaderValue::from_static(SOAP_ACTION));

        let client = ClientBuilder::new()
            .default_headers(headers)
            .build()
            .map_err(|e| EmpiError::TransportFailure(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl EmpiTransport for HttpTransport {
    async fn post(&self, url: &str, body: String, timeout: Duration) -> Result<String> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .body(body)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmpiError::TransportFailure(format!("{url} returned HTTP {status}")).into());
        }

        let text = response.text().await.map_err(|e| request_error(url, e))?;
        tracing::trace!(url = %url, bytes = text.len(), "Received EMPI response");
        Ok(text)
    }
}

fn request_error(url: &str, error: reqwest::Error) -> EmpiError {
    if error.is_timeout() {
        EmpiError::Timeout(format!("{url}: {error}"))
    } else {
        EmpiError::TransportFailure(format!("{url}: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConciergeError;

    #[tokio::test]
    async fn test_post_sends_soap_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/PatientDemographicsQueryWS.asmx")
            .match_header("content-type", CONTENT_TYPE_XML)
            .match_header("soapaction", SOAP_ACTION)
            .match_body("<request/>")
            .with_status(200)
            .with_body("<response/>")
            .create_async()
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/PatientDemographicsQueryWS.asmx", server.url());
        let body = transport
            .post(&url, "<request/>".to_string(), Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(body, "<response/>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(500)
            .with_body("<fault/>")
            .create_async()
            .await;

        let transport = HttpTransport::new().unwrap();
        let err = transport
            .post(&server.url(), String::new(), Duration::from_secs(2))
            .await
            .unwrap_err();
        assert!(matches!(err, ConciergeError::Empi(EmpiError::TransportFailure(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let transport = HttpTransport::new().unwrap();
        let err = transport
            .post("http://127.0.0.1:1/", String::new(), Duration::from_secs(2))
            .await
            .unwrap_err();
        assert!(matches!(err, ConciergeError::Empi(EmpiError::TransportFailure(_))));
    }

    #[tokio::test]
    async fn test_silent_server_is_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept connections and hold them open without ever replying
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let transport = HttpTransport::new().unwrap();
        let err = transport
            .post(
                &format!("http://{addr}/"),
                "<request/>".to_string(),
                Duration::from_millis(200),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ConciergeError::Empi(EmpiError::Timeout(_))));

        server.abort();
    }
}
