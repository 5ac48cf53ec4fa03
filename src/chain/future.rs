//! `OutcomeFutureExt` - the algebra over in-flight outcomes.
//!
//! Any `Future` that yields an `Outcome<T>` gets the same surface as an
//! already-available outcome: `combine`, `combine_async`, `tap`,
//! `tap_error`, and their asynchronous action forms. Each method awaits the
//! source first and then delegates, so the branching contract is exactly
//! that of the synchronous forms and steps still run strictly in dependency
//! order.
//!
//! Combined with [`Outcome`]'s `IntoFuture` implementation, every mix of
//! {immediate, in-flight} source and {synchronous, asynchronous} step is
//! covered by the same few names.
//!
//! # Examples
//!
//! ```rust
//! use railcar::prelude::*;
//!
//! async fn load() -> Outcome<i32> {
//!     Outcome::success(1)
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let outcome = load()
//!     .combine(|x| Outcome::success(x + 1))
//!     .combine_async(async |x, y| Outcome::success(x + y))
//!     .await;
//!
//! assert_eq!(outcome, Outcome::success((1, 2, 3)));
//! # });
//! ```

use std::future::Future;

use super::combine::{Combine, CombineAsync};
use crate::outcome::Outcome;

/// Extension methods for futures that yield an [`Outcome`].
///
/// Blanket-implemented for every `Future<Output = Outcome<T>>`. Each method
/// awaits the source outcome and then applies the corresponding operation
/// from the synchronous surface.
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the source, then widens it with a synchronous step.
    ///
    /// See [`Combine::combine`].
    fn combine<F, Marker>(
        self,
        step: F,
    ) -> impl Future<Output = <Outcome<T> as Combine<F, Marker>>::Output>
    where
        Outcome<T>: Combine<F, Marker>,
    {
        async move { self.await.combine(step) }
    }

    /// Awaits the source, then widens it with an asynchronous step.
    ///
    /// See [`CombineAsync::combine_async`].
    fn combine_async<F, Marker>(
        self,
        step: F,
    ) -> impl Future<Output = <Outcome<T> as CombineAsync<F, Marker>>::Output>
    where
        Outcome<T>: CombineAsync<F, Marker>,
    {
        async move { self.await.combine_async(step).await }
    }

    /// Awaits the source, then invokes `action` with the payload if it is a
    /// `Success`, returning it unchanged.
    ///
    /// See [`Outcome::tap`].
    fn tap<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap(action) }
    }

    /// Awaits the source, then invokes the asynchronous `action` with the
    /// payload if it is a `Success`, returning it unchanged.
    ///
    /// See [`Outcome::tap_async`].
    fn tap_async<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: AsyncFnOnce(&T),
    {
        async move { self.await.tap_async(action).await }
    }

    /// Awaits the source, then invokes `action` if it is not a `Success`,
    /// returning it unchanged.
    ///
    /// See [`Outcome::tap_error`].
    fn tap_error<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(),
    {
        async move { self.await.tap_error(action) }
    }

    /// Awaits the source, then invokes the asynchronous `action` if it is
    /// not a `Success`, returning it unchanged.
    ///
    /// See [`Outcome::tap_error_async`].
    fn tap_error_async<F>(self, action: F) -> impl Future<Output = Outcome<T>>
    where
        F: AsyncFnOnce(),
    {
        async move { self.await.tap_error_async(action).await }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
