//! Domain models and types for Concierge.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`Identifier`]) and the well-known system URIs
//! - **Records** a resolver can return ([`Record`], [`Role`], [`Patient`])
//! - **Datatypes** shared by records ([`Address`], [`ContactPoint`], [`Period`], [`Reference`])
//! - **Error types** ([`ConciergeError`], [`IdentifierError`], [`EmpiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ConciergeError>`]; the identifier
//! and EMPI error families convert with `?`:
//!
//! ```rust
//! use concierge::domain::{IdentifierError, Result};
//!
//! fn example(system: &str) -> Result<()> {
//!     if system.is_empty() {
//!         return Err(IdentifierError::UnknownSystem(system.to_string()).into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod datatypes;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod record;
pub mod result;
pub mod role;

// Re-export commonly used types for convenience
pub use datatypes::{Address, ContactPoint, ContactPointSystem, ContactPointUse, Period, Reference};
pub use errors::{ConciergeError, EmpiError, IdentifierError};
pub use ids::{Identifier, IdentifierUse};
pub use patient::Patient;
pub use record::Record;
pub use result::Result;
pub use role::Role;
