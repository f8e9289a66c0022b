//! Structural invariants of `Outcome`.
//!
//! If any of these fail, the type has grown state or behaviour it promised
//! not to have.

use super::common::outcome_strategy;
use outcome::contracts::{check_exactly_one_branch, check_variant_exclusive};
use outcome::{err, ok, Outcome};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

// ============================================================================
// THREAD SAFETY
// ============================================================================

fn assert_send_sync<T: Send + Sync>() {}

/// Outcome adds no interior state, so it is Send + Sync exactly when its
/// contents are.
#[test]
fn invariant_send_sync_follows_contents() {
    assert_send_sync::<Outcome<i32, String>>();
    assert_send_sync::<Outcome<Arc<str>, std::io::ErrorKind>>();
}

/// Concurrent readers observe the same value without synchronization.
#[test]
fn invariant_shared_reads_agree() {
    let shared = Arc::new(ok::<Vec<u32>, String>((0..100).collect()));

    let sums: Vec<u32> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                scope.spawn(move || (*shared).as_ref().map_or(0, |v| v.iter().sum::<u32>()))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(sums.iter().all(|&sum| sum == 4950));
    assert_eq!(*shared, ok((0..100).collect()));
}

// ============================================================================
// SIZE
// ============================================================================

/// The enum costs at most one tag on top of the larger variant.
#[test]
fn invariant_no_hidden_state() {
    assert_eq!(std::mem::size_of::<Outcome<(), ()>>(), 1);
    assert!(std::mem::size_of::<Outcome<u64, u32>>() <= 16);
    assert_eq!(
        std::mem::size_of::<Outcome<Box<u8>, ()>>(),
        std::mem::size_of::<Result<Box<u8>, ()>>()
    );
}

// ============================================================================
// VARIANT EXCLUSIVITY
// ============================================================================

proptest! {
    #[test]
    fn prop_exactly_one_variant(outcome in outcome_strategy()) {
        check_variant_exclusive(&outcome);
        prop_assert!(outcome.is_ok() ^ outcome.is_err());
        prop_assert!(outcome.clone().ok().is_some() ^ outcome.err().is_some());
    }

    #[test]
    fn prop_match_with_runs_one_branch(outcome in outcome_strategy()) {
        let was_ok = outcome.is_ok();
        let branch = check_exactly_one_branch(outcome, |_| "ok", |_| "err");
        prop_assert_eq!(branch, if was_ok { "ok" } else { "err" });
    }

    /// Combinators never change which variant an outcome is in unless their
    /// contract says they may.
    #[test]
    fn prop_variant_preserving_combinators(outcome in outcome_strategy()) {
        let was_ok = outcome.is_ok();
        prop_assert_eq!(outcome.clone().map(|x| x ^ 1).is_ok(), was_ok);
        prop_assert_eq!(outcome.clone().map_err(|e| e + "!").is_ok(), was_ok);
        prop_assert_eq!(outcome.clone().inspect(|_| {}).inspect_err(|_| {}), outcome.clone());
        prop_assert_eq!(outcome.clone().or(err::<i64, ()>(())).is_ok(), was_ok);
        prop_assert_eq!(outcome.and(ok::<u8, String>(0)).is_ok(), was_ok);
    }
}
