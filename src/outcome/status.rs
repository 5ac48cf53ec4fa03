//! `Status` - the closed set of outcome classifications.

use std::fmt;

/// The classification of an [`Outcome`](super::Outcome), without its payload
/// or error content.
///
/// The set is closed: dispatch over non-success statuses is an exhaustive
/// `match`, so an out-of-set status is a compile-time impossibility rather
/// than a runtime condition.
///
/// # Examples
///
/// ```rust
/// use railcar::outcome::{Outcome, Status};
///
/// let outcome: Outcome<i32> = Outcome::unavailable(["maintenance window"]);
/// assert_eq!(outcome.status(), Status::Unavailable);
/// assert_eq!(outcome.status().to_string(), "Unavailable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The operation succeeded with a payload.
    Success,
    /// The requested resource does not exist.
    NotFound,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not permitted.
    Forbidden,
    /// Input failed validation.
    Invalid,
    /// The operation failed.
    Error,
    /// The operation conflicts with current state.
    Conflict,
    /// The operation failed in a way that requires operator attention.
    CriticalError,
    /// A dependency of the operation is unavailable.
    Unavailable,
    /// The operation succeeded but produced nothing to return.
    NoContent,
}

impl fmt::Display for Status {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "Success",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::Invalid => "Invalid",
            Self::Error => "Error",
            Self::Conflict => "Conflict",
            Self::CriticalError => "CriticalError",
            Self::Unavailable => "Unavailable",
            Self::NoContent => "NoContent",
        };
        formatter.write_str(name)
    }
}
