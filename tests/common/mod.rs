//! Shared test utilities and fixtures.

#![allow(dead_code)]

use outcome::{err, ok, Outcome};
use proptest::prelude::*;

// Re-export canonical test utilities from outcome::testing
pub use outcome::testing::CallCounter;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short lowercase error messages.
pub fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}").unwrap()
}

/// Either variant, roughly half of each.
pub fn outcome_strategy() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(ok::<i64, String>),
        message_strategy().prop_map(err::<i64, String>),
    ]
}

/// The same distribution as `outcome_strategy`, as a standard `Result`.
pub fn result_strategy() -> impl Strategy<Value = Result<i64, String>> {
    outcome_strategy().prop_map(Outcome::into_result)
}

// ============================================================================
// CONTINUATIONS
// ============================================================================

/// Fails on odd input.
pub fn halve(n: i64) -> Outcome<i64, String> {
    if n % 2 == 0 {
        ok(n / 2)
    } else {
        err(format!("{} is odd", n))
    }
}

/// Fails on negative input.
pub fn non_negative(n: i64) -> Outcome<i64, String> {
    if n >= 0 {
        ok(n)
    } else {
        err(format!("{} is negative", n))
    }
}

/// `halve` over standard `Result`, for differential checks.
pub fn halve_result(n: i64) -> Result<i64, String> {
    halve(n).into_result()
}

/// `non_negative` over standard `Result`, for differential checks.
pub fn non_negative_result(n: i64) -> Result<i64, String> {
    non_negative(n).into_result()
}
