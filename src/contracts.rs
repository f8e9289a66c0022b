//! Runtime contracts for the `Outcome` algebra.
//!
//! This module provides debug-mode assertions that check the laws the
//! combinators promise. These contracts:
//!
//! 1. Are **zero-cost in release builds** (guarded by `cfg!(debug_assertions)`;
//!    `check_exactly_one_branch` reduces to a plain `match_with`)
//! 2. Provide **early failure detection** when combinators are changed
//! 3. State each law **exactly**, for one concrete outcome and function
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function in this module checks a law that callers rely on when they
//! refactor a chain of combinators. Weakening one silently breaks that.
//!
//! | Contract Function             | Law                                              |
//! |-------------------------------|--------------------------------------------------|
//! | `check_variant_exclusive`     | `is_ok() != is_err()`                            |
//! | `check_functor_identity`      | `o.map(id) == o`                                 |
//! | `check_functor_composition`   | `o.map(f).map(g) == o.map(g ∘ f)`                |
//! | `check_err_untouched`         | `err(e).map(f) == err(e)`, `f` never called      |
//! | `check_left_identity`         | `ok(v).and_then(f) == f(v)`                      |
//! | `check_right_identity`        | `o.and_then(ok) == o`                            |
//! | `check_associativity`         | `o.and_then(f).and_then(g) == o.and_then(f >=> g)` |
//! | `check_exactly_one_branch`    | `match_with` runs one branch                     |
//!
//! # Usage
//!
//! ```
//! use outcome::contracts::*;
//! use outcome::ok;
//!
//! // In debug builds, this panics if the law is violated
//! check_functor_composition(&ok::<i32, ()>(3), |x| x + 1, |x| x * 2);
//! ```

use crate::testing::CallCounter;
use crate::types::{ok, Outcome};
use std::fmt::Debug;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that thread-safety is inherited from the contents.
/// If `Outcome` ever grew interior state, the crate would stop building.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    // INVARIANT: send_sync_propagates
    assert_send_sync::<Outcome<u64, String>>();
    assert_send_sync::<Outcome<Vec<u8>, std::io::ErrorKind>>();
};

/// Static assertion that the enum adds at most one tag word to its contents.
const _: () = {
    // INVARIANT: no_hidden_state
    assert!(std::mem::size_of::<Outcome<u64, u64>>() <= 2 * std::mem::size_of::<u64>());
    assert!(std::mem::size_of::<Outcome<(), ()>>() == 1);
};

// ============================================================================
// VARIANT CONTRACTS
// ============================================================================

/// Check that exactly one variant is populated.
#[inline]
pub fn check_variant_exclusive<T, E>(outcome: &Outcome<T, E>) {
    // INVARIANT: variant_exclusive
    debug_assert!(
        outcome.is_ok() != outcome.is_err(),
        "Contract violation: variant_exclusive - is_ok() == is_err() == {}",
        outcome.is_ok()
    );
}

// ============================================================================
// FUNCTOR CONTRACTS
// ============================================================================

/// Check `o.map(|x| x) == o`.
#[inline]
pub fn check_functor_identity<T, E>(outcome: &Outcome<T, E>)
where
    T: Clone + PartialEq + Debug,
    E: Clone + PartialEq + Debug,
{
    if cfg!(debug_assertions) {
        // INVARIANT: functor_identity
        let mapped = outcome.clone().map(|value| value);
        debug_assert_eq!(
            &mapped, outcome,
            "Contract violation: functor_identity - map(id) changed the outcome"
        );
    }
}

/// Check `o.map(f).map(g) == o.map(|x| g(f(x)))`.
#[inline]
pub fn check_functor_composition<T, E, U, V, F, G>(outcome: &Outcome<T, E>, f: F, g: G)
where
    T: Clone,
    E: Clone + PartialEq + Debug,
    V: PartialEq + Debug,
    F: Fn(T) -> U,
    G: Fn(U) -> V,
{
    if cfg!(debug_assertions) {
        // INVARIANT: functor_composition
        let stepwise = outcome.clone().map(&f).map(&g);
        let composed = outcome.clone().map(|value| g(f(value)));
        debug_assert_eq!(
            stepwise, composed,
            "Contract violation: functor_composition - map(f).map(g) != map(g . f)"
        );
    }
}

/// Check that `map` leaves an `Err` alone and never calls `f` on it, and calls
/// `f` exactly once on an `Ok`.
#[inline]
pub fn check_err_untouched<T, E, U, F>(outcome: &Outcome<T, E>, f: F)
where
    T: Clone,
    E: Clone + PartialEq + Debug,
    F: FnOnce(T) -> U,
{
    if cfg!(debug_assertions) {
        // INVARIANT: err_untouched
        let counter = CallCounter::new();
        let mapped = outcome.clone().map(counter.wrap(f));
        match outcome {
            Outcome::Ok(_) => debug_assert_eq!(
                counter.calls(),
                1,
                "Contract violation: err_untouched - map called f {} times on Ok",
                counter.calls()
            ),
            Outcome::Err(error) => {
                debug_assert_eq!(
                    counter.calls(),
                    0,
                    "Contract violation: err_untouched - map called f on Err"
                );
                debug_assert_eq!(
                    mapped.err().as_ref(),
                    Some(error),
                    "Contract violation: err_untouched - map changed the error"
                );
            }
        }
    }
}

// ============================================================================
// MONAD CONTRACTS
// ============================================================================

/// Check `ok(v).and_then(f) == f(v)`.
#[inline]
pub fn check_left_identity<T, U, E, F>(value: T, f: F)
where
    T: Clone,
    U: PartialEq + Debug,
    E: PartialEq + Debug,
    F: Fn(T) -> Outcome<U, E>,
{
    if cfg!(debug_assertions) {
        // INVARIANT: left_identity
        let bound = ok(value.clone()).and_then(&f);
        let direct = f(value);
        debug_assert_eq!(
            bound, direct,
            "Contract violation: left_identity - ok(v).and_then(f) != f(v)"
        );
    }
}

/// Check `o.and_then(ok) == o`.
#[inline]
pub fn check_right_identity<T, E>(outcome: &Outcome<T, E>)
where
    T: Clone + PartialEq + Debug,
    E: Clone + PartialEq + Debug,
{
    if cfg!(debug_assertions) {
        // INVARIANT: right_identity
        let bound = outcome.clone().and_then(ok);
        debug_assert_eq!(
            &bound, outcome,
            "Contract violation: right_identity - and_then(ok) changed the outcome"
        );
    }
}

/// Check `o.and_then(f).and_then(g) == o.and_then(|x| f(x).and_then(g))`.
#[inline]
pub fn check_associativity<T, U, V, E, F, G>(outcome: &Outcome<T, E>, f: F, g: G)
where
    T: Clone,
    E: Clone + PartialEq + Debug,
    V: PartialEq + Debug,
    F: Fn(T) -> Outcome<U, E>,
    G: Fn(U) -> Outcome<V, E>,
{
    if cfg!(debug_assertions) {
        // INVARIANT: associativity
        let left = outcome.clone().and_then(&f).and_then(&g);
        let right = outcome.clone().and_then(|value| f(value).and_then(&g));
        debug_assert_eq!(
            left, right,
            "Contract violation: associativity - bind is not associative here"
        );
    }
}

// ============================================================================
// ELIMINATION CONTRACTS
// ============================================================================

/// Run `match_with`, checking that exactly the branch for the populated
/// variant executed. Returns the branch's result.
#[inline]
pub fn check_exactly_one_branch<T, E, R, OnOk, OnErr>(
    outcome: Outcome<T, E>,
    on_ok: OnOk,
    on_err: OnErr,
) -> R
where
    OnOk: FnOnce(T) -> R,
    OnErr: FnOnce(E) -> R,
{
    if !cfg!(debug_assertions) {
        return outcome.match_with(on_ok, on_err);
    }

    let was_ok = outcome.is_ok();
    let ok_calls = CallCounter::new();
    let err_calls = CallCounter::new();

    let result = outcome.match_with(ok_calls.wrap(on_ok), err_calls.wrap(on_err));

    // INVARIANT: exactly_one_branch
    debug_assert_eq!(
        ok_calls.calls() + err_calls.calls(),
        1,
        "Contract violation: exactly_one_branch - {} branches ran",
        ok_calls.calls() + err_calls.calls()
    );
    debug_assert_eq!(
        ok_calls.calls() == 1,
        was_ok,
        "Contract violation: exactly_one_branch - wrong branch ran"
    );

    result
}
