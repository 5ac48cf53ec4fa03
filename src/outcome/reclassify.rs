//! Reclassification - status-preserving re-typing of a non-success outcome.
//!
//! Every combinator that short-circuits needs to hand a non-success
//! `Outcome<T>` onward as an `Outcome<U>`; this module provides that
//! conversion. The classification and its error content (messages,
//! validation errors, correlation id) are carried verbatim - nothing is
//! summarized, synthesized, or dropped.

use super::Outcome;

impl<T> Outcome<T> {
    /// Converts a non-success outcome into a non-success outcome of another
    /// payload type, preserving its classification and error content.
    ///
    /// For `NotFound`, `Unauthorized`, `Forbidden`, and `Conflict` the
    /// destination is built with the parameterless constructor when the
    /// source carries no messages, and repeats the message list exactly
    /// otherwise. `CriticalError` and `Unavailable` repeat the list
    /// unconditionally, `Invalid` keeps its validation errors in order, and
    /// `Error` keeps both its messages and its correlation identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// let source: Outcome<i32> =
    ///     Outcome::error_with_correlation_id(["boom"], "req-42");
    /// let destination: Outcome<String> = source.reclassify();
    ///
    /// assert_eq!(destination.errors(), ["boom"]);
    /// assert_eq!(destination.correlation_id(), Some("req-42"));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a `Success`: a success has no non-success
    /// classification to preserve, so calling this on one is a contract
    /// violation.
    #[must_use]
    pub fn reclassify<U>(self) -> Outcome<U> {
        match self {
            Self::Success(_) => {
                panic!("attempted to reclassify a success outcome")
            }
            Self::NotFound(errors) => {
                if errors.is_empty() {
                    Outcome::not_found()
                } else {
                    Outcome::NotFound(errors)
                }
            }
            Self::Unauthorized(errors) => {
                if errors.is_empty() {
                    Outcome::unauthorized()
                } else {
                    Outcome::Unauthorized(errors)
                }
            }
            Self::Forbidden(errors) => {
                if errors.is_empty() {
                    Outcome::forbidden()
                } else {
                    Outcome::Forbidden(errors)
                }
            }
            Self::Invalid(errors) => Outcome::Invalid(errors),
            Self::Error {
                errors,
                correlation_id,
            } => Outcome::Error {
                errors,
                correlation_id,
            },
            Self::Conflict(errors) => {
                if errors.is_empty() {
                    Outcome::conflict()
                } else {
                    Outcome::Conflict(errors)
                }
            }
            // CriticalError and Unavailable pass the list through even when
            // empty; the upstream constructor surface draws this distinction
            // and it is kept as-is.
            Self::CriticalError(errors) => Outcome::CriticalError(errors),
            Self::Unavailable(errors) => Outcome::Unavailable(errors),
            Self::NoContent => Outcome::NoContent,
        }
    }
}
