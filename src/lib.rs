// Concierge - Identifier resolution and EMPI lookup
// Copyright (c) 2025 Concierge Contributors
// Licensed under the MIT License

//! # Concierge - identifier resolution and EMPI lookup
//!
//! Concierge resolves and cross-maps identifiers (codes that denote patients,
//! practitioners and job roles) across independent coding systems, either
//! from static in-memory tables or by querying the Welsh Enterprise Master
//! Patient Index (EMPI) over its HL7 v2 XML/SOAP interface.
//!
//! ## Architecture
//!
//! - [`domain`] - Identifiers, records and error types
//! - [`core`] - The system registry and the patient cache
//! - [`adapters`] - Identifier systems: SDS job roles, SNOMED CT, EMPI
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use concierge::adapters::build_registry;
//! use concierge::config::load_config;
//! use concierge::domain::ids::{Identifier, NHS_NUMBER, SDS_JOB_ROLE_NAME};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("concierge.toml")?;
//!     let registry = build_registry(&config.empi)?;
//!
//!     // Static table
//!     let role = registry.resolve(&Identifier::new(SDS_JOB_ROLE_NAME, "R0050")).await?;
//!
//!     // Remote lookup through the EMPI
//!     let patient = registry.resolve(&Identifier::new(NHS_NUMBER, "1234567890")).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`]. Absent values are
//! reported as [`domain::IdentifierError::NotFound`], distinct from input
//! rejected before any I/O and from remote failures:
//!
//! ```rust,no_run
//! use concierge::core::SystemRegistry;
//! use concierge::domain::Identifier;
//!
//! # async fn example(registry: &SystemRegistry, identifier: &Identifier) {
//! match registry.resolve(identifier).await {
//!     Ok(record) => println!("{record:?}"),
//!     Err(e) if e.is_not_found() => println!("no match"),
//!     Err(e) if e.is_remote_failure() => eprintln!("EMPI unavailable: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
