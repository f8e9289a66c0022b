// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary chains of combinators.
//!
//! Replays the same sequence of operations on an `Outcome` and on a standard
//! `Result` and requires them to agree after every step. The fuzzer picks the
//! starting variant, the operations, and their arguments.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use outcome::contracts::{check_exactly_one_branch, check_variant_exclusive};
use outcome::{err, ok, Outcome};

/// One step of a chain. Arguments feed the closures so they are not constant.
#[derive(Debug, Clone, Copy, Arbitrary)]
enum Op {
    Map(i32),
    MapErr(u8),
    AndThen { divisor: i32 },
    And(Option<i32>),
    Or(Option<i32>),
    OrElse { recover: bool },
    Flatten,
}

/// Fuzz input: a starting value and up to 64 operations.
#[derive(Debug, Arbitrary)]
struct ChainInput {
    start: Result<i32, u8>,
    ops: Vec<Op>,
}

fn apply_outcome(outcome: Outcome<i32, u8>, op: Op) -> Outcome<i32, u8> {
    match op {
        Op::Map(k) => outcome.map(|v| v.wrapping_add(k)),
        Op::MapErr(k) => outcome.map_err(|e| e ^ k),
        Op::AndThen { divisor } => outcome.and_then(|v| {
            if divisor == 0 {
                err(0)
            } else {
                ok(v.wrapping_div(divisor))
            }
        }),
        Op::And(other) => outcome.and(other.map_or(err(1), ok)),
        Op::Or(other) => outcome.or(other.map_or(err(2), ok)),
        Op::OrElse { recover } => outcome.or_else(|e| {
            if recover {
                ok(i32::from(e))
            } else {
                err(e.wrapping_add(1))
            }
        }),
        Op::Flatten => ok::<Outcome<i32, u8>, u8>(outcome).flatten(),
    }
}

fn apply_result(result: Result<i32, u8>, op: Op) -> Result<i32, u8> {
    match op {
        Op::Map(k) => result.map(|v| v.wrapping_add(k)),
        Op::MapErr(k) => result.map_err(|e| e ^ k),
        Op::AndThen { divisor } => result.and_then(|v| {
            if divisor == 0 {
                Err(0)
            } else {
                Ok(v.wrapping_div(divisor))
            }
        }),
        Op::And(other) => result.and(other.ok_or(1)),
        Op::Or(other) => result.or(other.ok_or(2)),
        Op::OrElse { recover } => result.or_else(|e| {
            if recover {
                Ok(i32::from(e))
            } else {
                Err(e.wrapping_add(1))
            }
        }),
        Op::Flatten => result,
    }
}

/// Every combinator must agree with the standard library at every step.
///
/// A mismatch means one of the `match` arms in `combinators.rs` sends a value
/// to the wrong variant or transforms the wrong channel.
fuzz_target!(|input: ChainInput| {
    let mut outcome = Outcome::from(input.start);
    let mut result = input.start;

    for op in input.ops.into_iter().take(64) {
        outcome = apply_outcome(outcome, op);
        result = apply_result(result, op);

        // INVARIANT 1: exactly one variant is populated
        check_variant_exclusive(&outcome);

        // INVARIANT 2: agreement with the oracle
        assert_eq!(
            outcome.into_result(),
            result,
            "Outcome diverged from Result after {:?}",
            op
        );
    }

    // INVARIANT 3: elimination runs the branch for the final variant
    let expected = result.is_ok();
    let took_ok = check_exactly_one_branch(outcome, |_| true, |_| false);
    assert_eq!(took_ok, expected);
});
