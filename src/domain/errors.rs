//! Domain error types
//!
//! This module defines the error hierarchy for Concierge.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Concierge error type
///
/// This is the primary error type used throughout the crate.
/// It wraps the identifier and EMPI error families and provides context
/// for the ambient concerns (configuration, I/O, serialization).
#[derive(Debug, Error)]
pub enum ConciergeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Identifier registry, resolution and mapping errors
    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// EMPI adapter errors
    #[error("EMPI error: {0}")]
    Empi(#[from] EmpiError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ConciergeError {
    /// Returns true if this error is an ordinary "value absent" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConciergeError::Identifier(IdentifierError::NotFound { .. }))
    }

    /// Returns true if the input was rejected before any remote work was attempted
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            ConciergeError::Identifier(
                IdentifierError::UnknownSystem(_) | IdentifierError::InvalidIdentifier(_)
            ) | ConciergeError::Empi(EmpiError::InvalidAuthority(_))
        )
    }

    /// Returns true if the remote EMPI call failed (timeout, transport or malformed response)
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            ConciergeError::Empi(
                EmpiError::Timeout(_)
                    | EmpiError::TransportFailure(_)
                    | EmpiError::MalformedResponse(_)
            )
        )
    }
}

/// Identifier registry errors
///
/// Raised by the system registry and by the resolvers and mappers bound to it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// No resolver or mapper is bound for the requested system (or system pair)
    #[error("Unknown identifier system: {0}")]
    UnknownSystem(String),

    /// The value is not present in the system. Expected, not exceptional.
    #[error("Not found: {system}|{value}")]
    NotFound { system: String, value: String },

    /// The value is not well-formed for its system
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A resolver or mapper is already bound for this key
    #[error("Duplicate binding: {0}")]
    DuplicateBinding(String),
}

impl IdentifierError {
    /// Creates a NotFound error for a system and value
    pub fn not_found(system: impl Into<String>, value: impl Into<String>) -> Self {
        IdentifierError::NotFound {
            system: system.into(),
            value: value.into(),
        }
    }
}

/// EMPI-specific errors
///
/// Errors that occur when querying the enterprise master patient index.
/// These errors don't expose third-party HTTP client or XML parser types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmpiError {
    /// Authority code outside the closed set
    #[error("Invalid authority: {0}")]
    InvalidAuthority(String),

    /// The remote call exceeded its deadline and was aborted
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Connection failure, non-2xx status or unreadable body
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// A 2xx response that does not have the expected document structure
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ConciergeError {
    fn from(err: std::io::Error) -> Self {
        ConciergeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ConciergeError {
    fn from(err: serde_json::Error) -> Self {
        ConciergeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ConciergeError {
    fn from(err: toml::de::Error) -> Self {
        ConciergeError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concierge_error_display() {
        let err = ConciergeError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_identifier_error_conversion() {
        let err: ConciergeError = IdentifierError::UnknownSystem("urn:x".to_string()).into();
        assert!(matches!(err, ConciergeError::Identifier(_)));
        assert!(err.is_rejected_input());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        let err = IdentifierError::not_found("http://snomed.info/sct", "22298006");
        assert_eq!(err.to_string(), "Not found: http://snomed.info/sct|22298006");
        let err: ConciergeError = err.into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empi_error_classification() {
        let timeout: ConciergeError = EmpiError::Timeout("2s".to_string()).into();
        let transport: ConciergeError = EmpiError::TransportFailure("refused".to_string()).into();
        let authority: ConciergeError = EmpiError::InvalidAuthority("ZZZ".to_string()).into();

        assert!(timeout.is_remote_failure());
        assert!(transport.is_remote_failure());
        assert!(!authority.is_remote_failure());
        assert!(authority.is_rejected_input());
        assert_ne!(
            EmpiError::Timeout("x".to_string()),
            EmpiError::TransportFailure("x".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ConciergeError = io_err.into();
        assert!(matches!(err, ConciergeError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ConciergeError = json_err.into();
        assert!(matches!(err, ConciergeError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ConciergeError = toml_err.into();
        assert!(matches!(err, ConciergeError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
