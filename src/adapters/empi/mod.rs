//! Enterprise Master Patient Index (EMPI) adapter
//!
//! The EMPI answers HL7 v2.5 patient demographics queries (`QBP^Q22`),
//! encoded as XML and wrapped in SOAP. This module builds those requests,
//! posts them over HTTP and normalizes the `RSP^K22` reply into a
//! [`Patient`](crate::domain::Patient).
//!
//! # Example
//!
//! ```no_run
//! use concierge::adapters::empi::EmpiService;
//! use concierge::config::EmpiConfig;
//!
//! # async fn example() -> concierge::domain::Result<()> {
//! let service = EmpiService::from_config(&EmpiConfig::default())?;
//! if let Some(patient) = service.lookup("NHS", "1234567890").await? {
//!     println!("{} {}", patient.first_names, patient.last_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod authority;
pub mod client;
pub mod document;
pub mod endpoint;
pub mod request;
pub mod response;
pub mod service;
pub mod transport;

pub use authority::Authority;
pub use client::EmpiClient;
pub use endpoint::Endpoint;
pub use request::IdentifierRequest;
pub use response::parse_patient;
pub use service::{fake_patient, EmpiService};
pub use transport::{EmpiTransport, HttpTransport};
