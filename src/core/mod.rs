//! Core resolution machinery for Concierge.
//!
//! # Modules
//!
//! - [`registry`] - identifier systems, resolver and mapper bindings, dispatch
//! - [`cache`] - short-TTL memoization of patient lookups
//!
//! The registry is built once at start-up, then shared read-only:
//!
//! ```rust,no_run
//! use concierge::adapters::sds;
//! use concierge::core::SystemRegistry;
//! use std::sync::Arc;
//!
//! # fn example() -> concierge::domain::Result<()> {
//! let mut registry = SystemRegistry::new();
//! sds::register(&mut registry)?;
//! let registry = Arc::new(registry);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod registry;

pub use cache::PatientCache;
pub use registry::{Mapper, Resolver, SystemRegistry};
