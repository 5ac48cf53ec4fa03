//! Property-based tests for the outcome algebra.
//!
//! Using proptest, these verify the laws the combinators must satisfy for
//! arbitrary error content and step outcomes:
//!
//! - **Status preservation**: reclassification never changes the
//!   classification, the message list, the validation errors, or the
//!   correlation id
//! - **Short-circuit**: a non-success input is returned as-is and the step
//!   never runs
//! - **Propagation**: a step's failure classification wins regardless of the
//!   accumulated values
//! - **Associativity**: fluent and staged chain-building agree
//! - **Sync/async equivalence**: the same step outcomes produce identical
//!   final outcomes on both surfaces

use proptest::prelude::*;
use railcar::outcome::{Outcome, ValidationError};
use railcar::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn messages() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 0..4)
}

fn validation_errors() -> impl Strategy<Value = Vec<ValidationError>> {
    prop::collection::vec(
        ("[a-z]{1,8}", "[a-z ]{1,16}")
            .prop_map(|(field, message)| ValidationError::new(field, message)),
        1..4,
    )
}

fn non_success() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        messages().prop_map(Outcome::not_found_with),
        messages().prop_map(Outcome::unauthorized_with),
        messages().prop_map(Outcome::forbidden_with),
        validation_errors().prop_map(Outcome::invalid),
        (messages(), prop::option::of("[a-z0-9-]{1,12}")).prop_map(|(errors, id)| match id {
            Some(id) => Outcome::error_with_correlation_id(errors, id),
            None => Outcome::error(errors),
        }),
        messages().prop_map(Outcome::conflict_with),
        messages().prop_map(Outcome::critical_error),
        messages().prop_map(Outcome::unavailable),
        Just(Outcome::no_content()),
    ]
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

// =============================================================================
// Reclassification Laws
// =============================================================================

proptest! {
    /// Reclassifying any non-success outcome preserves its status tag.
    #[test]
    fn prop_reclassify_preserves_status(source in non_success()) {
        let status = source.status();
        let destination: Outcome<String> = source.reclassify();
        prop_assert_eq!(destination.status(), status);
    }

    /// Reclassifying preserves the message list exactly, in order.
    #[test]
    fn prop_reclassify_preserves_messages(source in non_success()) {
        let errors = source.errors().to_vec();
        let destination: Outcome<String> = source.reclassify();
        prop_assert_eq!(destination.errors(), errors);
    }

    /// Reclassifying preserves validation errors exactly, in order.
    #[test]
    fn prop_reclassify_preserves_validation_errors(errors in validation_errors()) {
        let source: Outcome<i32> = Outcome::invalid(errors.clone());
        let destination: Outcome<String> = source.reclassify();
        prop_assert_eq!(destination.validation_errors(), errors);
    }

    /// The correlation id survives reclassification exactly.
    #[test]
    fn prop_reclassify_preserves_correlation_id(
        errors in messages(),
        id in "[a-z0-9-]{1,12}",
    ) {
        let source: Outcome<i32> = Outcome::error_with_correlation_id(errors, id.clone());
        let destination: Outcome<String> = source.reclassify();
        prop_assert_eq!(destination.correlation_id(), Some(id.as_str()));
    }

    /// Reclassifying twice through distinct payload types changes nothing.
    #[test]
    fn prop_reclassify_is_stable_across_types(source in non_success()) {
        let expected = source.clone();
        let round_tripped: Outcome<i32> =
            source.reclassify::<String>().reclassify::<Vec<u8>>().reclassify();
        prop_assert_eq!(round_tripped, expected);
    }
}

// =============================================================================
// Combine Laws
// =============================================================================

proptest! {
    /// A non-success input short-circuits: the step never runs and the
    /// classification and content are returned as-is.
    #[test]
    fn prop_combine_short_circuits(source in non_success()) {
        let status = source.status();
        let errors = source.errors().to_vec();
        let correlation_id = source.correlation_id().map(str::to_owned);

        let mut invoked = false;
        let outcome = source.combine(|x| {
            invoked = true;
            Outcome::success(x + 1)
        });

        prop_assert!(!invoked);
        prop_assert_eq!(outcome.status(), status);
        prop_assert_eq!(outcome.errors(), errors);
        prop_assert_eq!(
            outcome.correlation_id(),
            correlation_id.as_deref()
        );
    }

    /// A step's failure wins regardless of the accumulated values.
    #[test]
    fn prop_step_failure_wins(a in any::<i32>(), b in any::<i32>(), failure in non_success()) {
        let expected: Outcome<(i32, i32, i32)> = failure.clone().reclassify();
        let outcome = Outcome::success((a, b)).combine(|_, _: i32| failure);
        prop_assert_eq!(outcome, expected);
    }

    /// A successful step appends its value to the tuple.
    #[test]
    fn prop_successful_step_appends(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let outcome = Outcome::success((a, b)).combine(|_, _: i32| Outcome::success(c));
        prop_assert_eq!(outcome, Outcome::success((a, b, c)));
    }

    /// Fluent and staged chain-building agree for deterministic steps.
    #[test]
    fn prop_chain_grouping_is_immaterial(seed in any::<i32>()) {
        let step1 = |x: i32| Outcome::success(x.wrapping_add(1));
        let step2 = |x: i32, y: i32| Outcome::success(x.wrapping_mul(y));

        let fluent = Outcome::success(seed).combine(step1).combine(step2);

        let staged_first = Outcome::success(seed).combine(step1);
        let staged = staged_first.combine(step2);

        prop_assert_eq!(fluent, staged);
    }
}

// =============================================================================
// Sync / Async Equivalence
// =============================================================================

proptest! {
    /// For the same step outcomes, the asynchronous chain produces an
    /// outcome identical to the synchronous one.
    #[test]
    fn prop_async_chain_matches_sync_chain(
        source in non_success(),
        seed in any::<i32>(),
    ) {
        let sync_failure = source
            .clone()
            .combine(|x| Outcome::success(x.wrapping_add(1)));
        let async_failure = block_on(
            source.combine_async(async |x| Outcome::success(x.wrapping_add(1))),
        );
        prop_assert_eq!(sync_failure, async_failure);

        let sync_success = Outcome::success(seed)
            .combine(|x| Outcome::success(x.wrapping_add(1)))
            .combine(|x: i32, y: i32| Outcome::success(x.wrapping_mul(y)));
        let async_success = block_on(
            Outcome::success(seed)
                .combine_async(async |x| Outcome::success(x.wrapping_add(1)))
                .combine_async(async |x: i32, y: i32| Outcome::success(x.wrapping_mul(y))),
        );
        prop_assert_eq!(sync_success, async_success);
    }

    /// Exactly one of tap / tap_error fires for any outcome.
    #[test]
    fn prop_taps_are_mutually_exclusive(
        outcome in prop_oneof![
            any::<i32>().prop_map(Outcome::success),
            non_success(),
        ],
    ) {
        let mut tapped = 0_u32;
        let mut error_tapped = 0_u32;

        let _ = outcome
            .tap(|_| tapped += 1)
            .tap_error(|| error_tapped += 1);

        prop_assert_eq!(tapped + error_tapped, 1);
    }
}
