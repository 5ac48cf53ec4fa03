//! `Combine` - widening a success tuple by one dependent fallible step.
//!
//! A chain starts from a bare `Outcome<T0>` and grows a tuple one element at
//! a time: each step receives the values accumulated so far and produces the
//! next element, or a non-success outcome that ends the chain. Chains either
//! fully succeed with the complete tuple or report exactly one failure
//! classification - never a partial success.
//!
//! The per-arity implementations (tuple widths 2 through 15, producing
//! tuples of up to 16 elements) are generated by a single `macro_rules!`
//! definition rather than written out by hand.
//!
//! # Examples
//!
//! ```rust
//! use railcar::prelude::*;
//!
//! let outcome = Outcome::success(1)
//!     .combine(|x| Outcome::success(x + 1))
//!     .combine(|x, y| Outcome::success(x + y));
//!
//! assert_eq!(outcome, Outcome::success((1, 2, 3)));
//!
//! // The first failure wins and later steps never run.
//! let outcome = Outcome::success(1)
//!     .combine(|_x| Outcome::<i32>::not_found_with(["missing"]))
//!     .combine(|_x, _y| Outcome::success(0));
//!
//! assert_eq!(outcome, Outcome::not_found_with(["missing"]));
//! ```

use crate::outcome::Outcome;

/// Marker selecting the implementation that starts a chain from a bare
/// (non-tuple) success value.
///
/// Rust resolves which `Combine` implementation applies to a call from the
/// step function's signature; this marker keeps the scalar-start
/// implementation coherent with the tuple-widening ones. It is never
/// constructed.
#[derive(Debug, Clone, Copy)]
pub struct Value;

/// Extends a success payload by one element via a dependent fallible step.
///
/// Implemented for `Outcome<T0>` with a one-argument step (starting a
/// chain), and for `Outcome<(T0, ..., Tn-1)>` with an n-argument step
/// (widening it). The step receives the accumulated values unpacked, by
/// value; elements are therefore required to be `Clone`, since each is both
/// handed to the step and retained in the widened tuple.
///
/// Semantics:
///
/// 1. A non-success input short-circuits: it is
///    [reclassified](Outcome::reclassify) to the widened payload type and
///    the step is never invoked.
/// 2. A non-success step outcome is reclassified the same way - the failure
///    classification comes from the step's own outcome, not the input.
/// 3. Otherwise the step's value is appended and the widened tuple returned
///    as a success.
///
/// # Examples
///
/// ```rust
/// use railcar::prelude::*;
///
/// let outcome = Outcome::success(1).combine(|x| Outcome::success(x + 1));
/// assert_eq!(outcome, Outcome::success((1, 2)));
/// ```
pub trait Combine<F, Marker>: Sized {
    /// The outcome carrying the widened tuple.
    type Output;

    /// Runs `step` against the accumulated success values, widening the
    /// tuple on success and short-circuiting on any failure.
    fn combine(self, step: F) -> Self::Output;
}

/// The asynchronous form of [`Combine`]: the step returns a future of an
/// outcome and the chain suspends until it resolves.
///
/// The branching contract is identical to the synchronous form, and a step's
/// outcome is fully known before any subsequent step begins.
///
/// # Examples
///
/// ```rust
/// use railcar::prelude::*;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = Outcome::success(1)
///     .combine_async(async |x| Outcome::success(x + 1))
///     .await;
/// assert_eq!(outcome, Outcome::success((1, 2)));
/// # });
/// ```
#[allow(async_fn_in_trait)]
pub trait CombineAsync<F, Marker>: Sized {
    /// The outcome carrying the widened tuple.
    type Output;

    /// Runs `step` against the accumulated success values, awaiting its
    /// outcome, widening the tuple on success and short-circuiting on any
    /// failure.
    async fn combine_async(self, step: F) -> Self::Output;
}

impl<T0, N, F> Combine<F, Value> for Outcome<T0>
where
    T0: Clone,
    F: FnOnce(T0) -> Outcome<N>,
{
    type Output = Outcome<(T0, N)>;

    fn combine(self, step: F) -> Self::Output {
        let value = match self {
            Self::Success(value) => value,
            other => return other.reclassify(),
        };
        match step(value.clone()) {
            Outcome::Success(next) => Outcome::Success((value, next)),
            other => other.reclassify(),
        }
    }
}

impl<T0, N, F> CombineAsync<F, Value> for Outcome<T0>
where
    T0: Clone,
    F: AsyncFnOnce(T0) -> Outcome<N>,
{
    type Output = Outcome<(T0, N)>;

    async fn combine_async(self, step: F) -> Self::Output {
        let value = match self {
            Self::Success(value) => value,
            other => return other.reclassify(),
        };
        match step(value.clone()).await {
            Outcome::Success(next) => Outcome::Success((value, next)),
            other => other.reclassify(),
        }
    }
}

macro_rules! impl_combine {
    ($(($T:ident, $value:ident)),+) => {
        impl<$($T,)+ N, F> Combine<F, ($($T,)+)> for Outcome<($($T,)+)>
        where
            $($T: Clone,)+
            F: FnOnce($($T),+) -> Outcome<N>,
        {
            type Output = Outcome<($($T,)+ N)>;

            fn combine(self, step: F) -> Self::Output {
                let ($($value,)+) = match self {
                    Self::Success(values) => values,
                    other => return other.reclassify(),
                };
                match step($($value.clone()),+) {
                    Outcome::Success(next) => Outcome::Success(($($value,)+ next)),
                    other => other.reclassify(),
                }
            }
        }

        impl<$($T,)+ N, F> CombineAsync<F, ($($T,)+)> for Outcome<($($T,)+)>
        where
            $($T: Clone,)+
            F: AsyncFnOnce($($T),+) -> Outcome<N>,
        {
            type Output = Outcome<($($T,)+ N)>;

            async fn combine_async(self, step: F) -> Self::Output {
                let ($($value,)+) = match self {
                    Self::Success(values) => values,
                    other => return other.reclassify(),
                };
                match step($($value.clone()),+).await {
                    Outcome::Success(next) => Outcome::Success(($($value,)+ next)),
                    other => other.reclassify(),
                }
            }
        }
    };
}

impl_combine!((T0, value0), (T1, value1));
impl_combine!((T0, value0), (T1, value1), (T2, value2));
impl_combine!((T0, value0), (T1, value1), (T2, value2), (T3, value3));
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7),
    (T8, value8)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7),
    (T8, value8),
    (T9, value9)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7),
    (T8, value8),
    (T9, value9),
    (T10, value10)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7),
    (T8, value8),
    (T9, value9),
    (T10, value10),
    (T11, value11)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7),
    (T8, value8),
    (T9, value9),
    (T10, value10),
    (T11, value11),
    (T12, value12)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7),
    (T8, value8),
    (T9, value9),
    (T10, value10),
    (T11, value11),
    (T12, value12),
    (T13, value13)
);
impl_combine!(
    (T0, value0),
    (T1, value1),
    (T2, value2),
    (T3, value3),
    (T4, value4),
    (T5, value5),
    (T6, value6),
    (T7, value7),
    (T8, value8),
    (T9, value9),
    (T10, value10),
    (T11, value11),
    (T12, value12),
    (T13, value13),
    (T14, value14)
);
