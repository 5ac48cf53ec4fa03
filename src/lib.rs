//! # railcar
//!
//! Railway-oriented result combinators for Rust.
//!
//! ## Overview
//!
//! This library provides a status-carrying outcome type and a small algebra
//! for composing multi-step, possibly asynchronous, fallible operations
//! without manual branching at every step. It includes:
//!
//! - **`Outcome<T>`**: a tagged union of a success payload or one of nine
//!   non-success classifications (not-found, unauthorized, forbidden,
//!   invalid, error, conflict, critical-error, unavailable, no-content)
//! - **Reclassification**: status-preserving re-typing of a non-success
//!   outcome, carrying its error content verbatim
//! - **Combine**: an operator that extends a success tuple by one element via
//!   a dependent fallible step, short-circuiting on the first failure
//! - **Tap / TapError**: side-effect hooks fired on success / non-success
//!   without altering the outcome
//! - **Async forms**: every combinator works whether the outcome is already
//!   available or is produced by a future, and whether the step itself is
//!   synchronous or asynchronous
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`, `Status`, and
//!   `ValidationError`
//!
//! ## Example
//!
//! ```rust
//! use railcar::prelude::*;
//!
//! fn find_user(id: u32) -> Outcome<String> {
//!     if id == 7 {
//!         Outcome::success("alice".to_string())
//!     } else {
//!         Outcome::not_found_with(["no such user"])
//!     }
//! }
//!
//! let outcome = Outcome::success(7_u32)
//!     .combine(|id| find_user(id))
//!     .combine(|_id, name: String| Outcome::success(name.len()));
//!
//! assert_eq!(
//!     outcome,
//!     Outcome::success((7_u32, "alice".to_string(), 5_usize)),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railcar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain::{Combine, CombineAsync, OutcomeFutureExt};
    pub use crate::outcome::{Outcome, Status, ValidationError};
}

pub mod chain;
pub mod outcome;
