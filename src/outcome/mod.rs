//! `Outcome` type - a success payload or one of nine non-success
//! classifications.
//!
//! This module provides the `Outcome<T>` type, a tagged union representing
//! either a success carrying a payload of type `T` or a non-success
//! classification carrying its error content:
//!
//! - `NotFound`, `Unauthorized`, `Forbidden`, `Conflict`, `Unavailable` -
//!   an ordered (possibly empty) list of error messages
//! - `Invalid` - an ordered list of validation errors (field + message)
//! - `Error` - error messages plus an optional correlation identifier
//! - `CriticalError` - error messages
//! - `NoContent` - nothing
//!
//! Outcomes are value objects: immutable after construction, compared by
//! classification and payload, with no identity beyond that.
//!
//! # Examples
//!
//! ```rust
//! use railcar::outcome::{Outcome, Status};
//!
//! let found: Outcome<i32> = Outcome::success(42);
//! assert!(found.is_success());
//! assert_eq!(found.value(), &42);
//!
//! let missing: Outcome<i32> = Outcome::not_found_with(["no such record"]);
//! assert_eq!(missing.status(), Status::NotFound);
//! assert_eq!(missing.errors(), ["no such record"]);
//! ```

mod reclassify;
mod status;
mod validation;

pub use status::Status;
pub use validation::ValidationError;

use std::future::{Ready, ready};

/// A success payload or one of nine non-success classifications.
///
/// Exactly one variant is active per instance; the payload is accessible
/// only through `Success`. Error content (messages, validation errors,
/// correlation id) is immutable after construction.
///
/// # Examples
///
/// ```rust
/// use railcar::outcome::{Outcome, ValidationError};
///
/// let ok: Outcome<String> = Outcome::success("hello".to_string());
/// let invalid: Outcome<String> =
///     Outcome::invalid([ValidationError::new("name", "must not be empty")]);
///
/// assert!(ok.is_success());
/// assert!(!invalid.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T> {
    /// A successful outcome carrying the payload.
    Success(T),
    /// The requested resource does not exist.
    NotFound(Vec<String>),
    /// The caller is not authenticated.
    Unauthorized(Vec<String>),
    /// The caller is authenticated but not permitted.
    Forbidden(Vec<String>),
    /// Input failed validation.
    Invalid(Vec<ValidationError>),
    /// The operation failed; carries an optional correlation identifier
    /// used to trace the request across system boundaries.
    Error {
        /// Ordered error messages.
        errors: Vec<String>,
        /// Opaque trace token, carried verbatim across reclassification.
        correlation_id: Option<String>,
    },
    /// The operation conflicts with current state.
    Conflict(Vec<String>),
    /// The operation failed in a way that requires operator attention.
    CriticalError(Vec<String>),
    /// A dependency of the operation is unavailable.
    Unavailable(Vec<String>),
    /// The operation succeeded but produced nothing to return.
    NoContent,
}

fn collect_messages<I, S>(errors: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    errors.into_iter().map(Into::into).collect()
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome carrying `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// let outcome = Outcome::success(42);
    /// assert_eq!(outcome.value(), &42);
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `NotFound` outcome with no error messages.
    #[inline]
    #[must_use]
    pub const fn not_found() -> Self {
        Self::NotFound(Vec::new())
    }

    /// Creates a `NotFound` outcome carrying the given error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::not_found_with(["missing"]);
    /// assert_eq!(outcome.errors(), ["missing"]);
    /// ```
    #[inline]
    pub fn not_found_with<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotFound(collect_messages(errors))
    }

    /// Creates an `Unauthorized` outcome with no error messages.
    #[inline]
    #[must_use]
    pub const fn unauthorized() -> Self {
        Self::Unauthorized(Vec::new())
    }

    /// Creates an `Unauthorized` outcome carrying the given error messages.
    #[inline]
    pub fn unauthorized_with<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Unauthorized(collect_messages(errors))
    }

    /// Creates a `Forbidden` outcome with no error messages.
    #[inline]
    #[must_use]
    pub const fn forbidden() -> Self {
        Self::Forbidden(Vec::new())
    }

    /// Creates a `Forbidden` outcome carrying the given error messages.
    #[inline]
    pub fn forbidden_with<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Forbidden(collect_messages(errors))
    }

    /// Creates an `Invalid` outcome carrying the given validation errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::{Outcome, ValidationError};
    ///
    /// let outcome: Outcome<i32> =
    ///     Outcome::invalid([ValidationError::new("age", "must be positive")]);
    /// assert_eq!(outcome.validation_errors().len(), 1);
    /// ```
    #[inline]
    pub fn invalid<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    /// Creates an `Error` outcome carrying the given error messages and no
    /// correlation identifier.
    #[inline]
    pub fn error<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Error {
            errors: collect_messages(errors),
            correlation_id: None,
        }
    }

    /// Creates an `Error` outcome carrying the given error messages and a
    /// correlation identifier.
    ///
    /// The correlation identifier is an opaque trace token; it survives
    /// reclassification unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> =
    ///     Outcome::error_with_correlation_id(["boom"], "req-123");
    /// assert_eq!(outcome.correlation_id(), Some("req-123"));
    /// ```
    #[inline]
    pub fn error_with_correlation_id<I, S>(errors: I, correlation_id: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Error {
            errors: collect_messages(errors),
            correlation_id: Some(correlation_id.into()),
        }
    }

    /// Creates a `Conflict` outcome with no error messages.
    #[inline]
    #[must_use]
    pub const fn conflict() -> Self {
        Self::Conflict(Vec::new())
    }

    /// Creates a `Conflict` outcome carrying the given error messages.
    #[inline]
    pub fn conflict_with<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Conflict(collect_messages(errors))
    }

    /// Creates a `CriticalError` outcome carrying the given error messages.
    #[inline]
    pub fn critical_error<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CriticalError(collect_messages(errors))
    }

    /// Creates an `Unavailable` outcome carrying the given error messages.
    #[inline]
    pub fn unavailable<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Unavailable(collect_messages(errors))
    }

    /// Creates a `NoContent` outcome.
    #[inline]
    #[must_use]
    pub const fn no_content() -> Self {
        Self::NoContent
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Returns `true` if this outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// assert!(Outcome::success(1).is_success());
    /// assert!(!Outcome::<i32>::not_found().is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the classification of this outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::{Outcome, Status};
    ///
    /// assert_eq!(Outcome::success(1).status(), Status::Success);
    /// assert_eq!(Outcome::<i32>::conflict().status(), Status::Conflict);
    /// ```
    #[inline]
    pub const fn status(&self) -> Status {
        match self {
            Self::Success(_) => Status::Success,
            Self::NotFound(_) => Status::NotFound,
            Self::Unauthorized(_) => Status::Unauthorized,
            Self::Forbidden(_) => Status::Forbidden,
            Self::Invalid(_) => Status::Invalid,
            Self::Error { .. } => Status::Error,
            Self::Conflict(_) => Status::Conflict,
            Self::CriticalError(_) => Status::CriticalError,
            Self::Unavailable(_) => Status::Unavailable,
            Self::NoContent => Status::NoContent,
        }
    }

    // =========================================================================
    // Payload Access
    // =========================================================================

    /// Returns a reference to the success payload.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is not a `Success`. Reading the payload off a
    /// non-success outcome is a contract violation; use [`Self::as_success`]
    /// for a non-panicking accessor.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            other => panic!(
                "attempted to read a success payload off a {} outcome",
                other.status()
            ),
        }
    }

    /// Consumes the outcome and returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is not a `Success`.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            other => panic!(
                "attempted to read a success payload off a {} outcome",
                other.status()
            ),
        }
    }

    /// Returns a reference to the success payload if present.
    #[inline]
    pub const fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the success payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).into_success(), Some(5));
    /// assert_eq!(Outcome::<i32>::no_content().into_success(), None);
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    // =========================================================================
    // Error Content Access
    // =========================================================================

    /// Returns the error messages carried by this outcome.
    ///
    /// `Success`, `Invalid`, and `NoContent` carry none; `Invalid` exposes
    /// its content through [`Self::validation_errors`] instead.
    #[inline]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::NotFound(errors)
            | Self::Unauthorized(errors)
            | Self::Forbidden(errors)
            | Self::Error { errors, .. }
            | Self::Conflict(errors)
            | Self::CriticalError(errors)
            | Self::Unavailable(errors) => errors,
            Self::Success(_) | Self::Invalid(_) | Self::NoContent => &[],
        }
    }

    /// Returns the validation errors carried by an `Invalid` outcome.
    ///
    /// Every other classification carries none.
    #[inline]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }

    /// Returns the correlation identifier carried by an `Error` outcome.
    #[inline]
    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            Self::Error {
                correlation_id: Some(id),
                ..
            } => Some(id),
            _ => None,
        }
    }
}

// =============================================================================
// IntoFuture
// =============================================================================

/// An already-available outcome enters an asynchronous chain as a ready
/// future, so immediate and in-flight sources compose uniformly.
///
/// # Examples
///
/// ```rust
/// use railcar::prelude::*;
/// use std::future::IntoFuture;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = Outcome::success(1)
///     .into_future()
///     .combine(|x| Outcome::success(x + 1))
///     .await;
/// assert_eq!(outcome, Outcome::success((1, 2)));
/// # });
/// ```
impl<T> std::future::IntoFuture for Outcome<T> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}
