//! `ValidationError` - a field identifier paired with a message.

use std::fmt;

/// A single validation failure: which field was invalid and why.
///
/// Carried, in order, by the `Invalid` classification and repeated verbatim
/// through reclassification.
///
/// # Examples
///
/// ```rust
/// use railcar::outcome::ValidationError;
///
/// let error = ValidationError::new("email", "must contain '@'");
/// assert_eq!(error.identifier(), "email");
/// assert_eq!(error.message(), "must contain '@'");
/// assert_eq!(error.to_string(), "email: must contain '@'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    identifier: String,
    message: String,
}

impl ValidationError {
    /// Creates a validation error for the given field identifier and message.
    #[inline]
    pub fn new(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// Returns the identifier of the field that failed validation.
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the human-readable description of the failure.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.identifier, self.message)
    }
}
