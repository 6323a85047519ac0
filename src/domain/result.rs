//! Result type alias for Concierge
//!
//! This module provides a convenient Result type alias that uses ConciergeError
//! as the error type.

use super::errors::ConciergeError;

/// Result type alias for Concierge operations
///
/// # Examples
///
/// ```
/// use concierge::domain::result::Result;
/// use concierge::domain::errors::ConciergeError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ConciergeError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ConciergeError>;
