//! The outcome algebra - combine chains and tap hooks.
//!
//! This module provides the combinators that compose multi-step fallible
//! operations over [`Outcome`](crate::outcome::Outcome):
//!
//! - [`Combine`] / [`CombineAsync`]: extend a success tuple by one element
//!   via a dependent fallible step, short-circuiting on the first failure
//! - `tap` / `tap_error` (inherent on `Outcome`): side-effect hooks fired on
//!   success / non-success without altering the outcome
//! - [`OutcomeFutureExt`]: the same operations on any future that yields an
//!   outcome, so immediate and in-flight sources compose identically
//!
//! Every combinator is a pure transformation of its inputs; no state
//! persists between invocations. Within one chain, a step's outcome is fully
//! known before the next step begins - the data dependency itself enforces
//! sequential, never-concurrent execution.
//!
//! # Examples
//!
//! ```rust
//! use railcar::prelude::*;
//!
//! let outcome = Outcome::success(2_u32)
//!     .combine(|x| Outcome::success(x * 10))
//!     .combine(|x, y| Outcome::success(x + y));
//!
//! assert_eq!(outcome, Outcome::success((2, 20, 22)));
//! ```

mod combine;
mod future;
mod tap;

pub use combine::{Combine, CombineAsync, Value};
pub use future::OutcomeFutureExt;
