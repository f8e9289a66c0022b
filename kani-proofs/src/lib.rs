// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the `Outcome` combinators.
//!
//! Property tests sample the input space; these proofs cover all of it for
//! small domains (every `i8` value, every error byte, every step function in a
//! fixed family).
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Exclusive**: exactly one of `is_ok`/`is_err` holds
//! 2. **Functor laws**: identity and composition for `map`
//! 3. **Monad laws**: left identity, right identity, associativity for `and_then`
//! 4. **Totality**: no combinator other than `unwrap`/`unwrap_err` panics
//! 5. **Elimination**: `match_with` runs exactly one branch

use outcome::{err, ok, Outcome};

/// Build an outcome from symbolic parts.
pub fn make(is_ok: bool, value: i8, error: u8) -> Outcome<i8, u8> {
    if is_ok {
        ok(value)
    } else {
        err(error)
    }
}

/// A family of step functions covering success, failure, and identity.
pub fn step(choice: u8, n: i8) -> Outcome<i8, u8> {
    match choice % 4 {
        0 => ok(n),
        1 => ok(n.wrapping_mul(3)),
        2 => {
            if n >= 0 {
                ok(n)
            } else {
                err(n.unsigned_abs())
            }
        }
        _ => err(choice),
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify exactly one variant is populated.
    #[kani::proof]
    fn verify_variant_exclusive() {
        let outcome = make(kani::any(), kani::any(), kani::any());
        kani::assert(
            outcome.is_ok() != outcome.is_err(),
            "is_ok and is_err must disagree",
        );
    }

    /// Verify `map(id)` is the identity and composition distributes.
    #[kani::proof]
    fn verify_functor_laws() {
        let outcome = make(kani::any(), kani::any(), kani::any());
        let k: i8 = kani::any();

        kani::assert(outcome.map(|x| x) == outcome, "map(id) must be identity");

        let f = |x: i8| x.wrapping_add(k);
        let g = |x: i8| x.wrapping_mul(2);
        kani::assert(
            outcome.map(f).map(g) == outcome.map(|x| g(f(x))),
            "map(f).map(g) must equal map(g . f)",
        );
    }

    /// Verify `map` leaves an `Err` untouched.
    #[kani::proof]
    fn verify_map_preserves_err() {
        let error: u8 = kani::any();
        let mapped = err::<i8, u8>(error).map(|x| x.wrapping_neg());
        kani::assert(mapped == err(error), "map must not touch Err");
    }

    /// Verify the three monad laws over the step family.
    #[kani::proof]
    fn verify_monad_laws() {
        let value: i8 = kani::any();
        let outcome = make(kani::any(), kani::any(), kani::any());
        let a: u8 = kani::any();
        let b: u8 = kani::any();
        let f = |n: i8| step(a, n);
        let g = |n: i8| step(b, n);

        kani::assert(ok(value).and_then(f) == f(value), "left identity");
        kani::assert(outcome.and_then(ok) == outcome, "right identity");
        kani::assert(
            outcome.and_then(f).and_then(g) == outcome.and_then(|x| f(x).and_then(g)),
            "associativity",
        );
    }

    /// Verify the total combinators never panic and agree with their tables.
    #[kani::proof]
    fn verify_total_combinators() {
        let outcome = make(kani::any(), kani::any(), kani::any());
        let other = make(kani::any(), kani::any(), kani::any());
        let default: i8 = kani::any();

        let unwrapped = outcome.unwrap_or(default);
        match outcome {
            Outcome::Ok(v) => kani::assert(unwrapped == v, "unwrap_or on Ok"),
            Outcome::Err(_) => kani::assert(unwrapped == default, "unwrap_or on Err"),
        }

        let anded = outcome.and(other);
        let ored = outcome.or(other);
        if outcome.is_ok() {
            kani::assert(anded == other, "Ok.and(o) == o");
            kani::assert(ored == outcome, "Ok.or(o) == Ok");
        } else {
            kani::assert(anded == outcome, "Err.and(o) == Err");
            kani::assert(ored == other, "Err.or(o) == o");
        }
    }

    /// Verify `match_with` runs exactly one branch.
    #[kani::proof]
    fn verify_match_with_one_branch() {
        let outcome = make(kani::any(), kani::any(), kani::any());
        let mut ok_calls = 0u8;
        let mut err_calls = 0u8;

        let took_ok = outcome.match_with(
            |_| {
                ok_calls += 1;
                true
            },
            |_| {
                err_calls += 1;
                false
            },
        );

        kani::assert(ok_calls + err_calls == 1, "exactly one branch runs");
        kani::assert(took_ok == outcome.is_ok(), "the branch matches the variant");
    }
}
