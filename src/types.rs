// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `Outcome` sum type and its constructors.
//!
//! An `Outcome<T, E>` is exactly one of two things: a success carrying a `T`,
//! or a failure carrying an `E`. There is no third state and no way to change
//! the variant after construction, so every operation in this crate is a pure
//! function from one outcome to another value.
//!
//! # Invariants
//!
//! - **Exclusive**: `is_ok() != is_err()` for every value.
//! - **Immutable**: no `&mut` access to the contained value is offered.
//! - **Independent parameters**: `T` and `E` share no bounds. Traits such as
//!   `PartialEq` or `Display` are implemented only when both sides provide them.
//!
//! # Interop
//!
//! `Outcome` converts losslessly to and from `core::result::Result`, so code at
//! the boundary can still use `?`:
//!
//! ```
//! use outcome::{ok, Outcome};
//!
//! fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
//!     let outcome: Outcome<u32, _> = input.parse::<u32>().into();
//!     let doubled = outcome.map(|n| n * 2).into_result()?;
//!     Ok(doubled)
//! }
//!
//! assert_eq!(parse("21"), Ok(42));
//! assert_eq!(ok::<_, ()>(1).into_result(), Ok(1));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either a success (`Ok`) or a failure (`Err`), never both.
///
/// Ordering follows declaration order: every `Ok` sorts before every `Err`,
/// and values of the same variant compare by their contents.
///
/// With the `serde` feature the representation is externally tagged:
/// `{"Ok": value}` or `{"Err": error}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Contains the success value.
    Ok(T),
    /// Contains the error value.
    Err(E),
}

/// Construct a successful outcome.
///
/// A free function rather than `Outcome::ok`, because `ok()` on a value is the
/// conversion into `Option<T>`.
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Construct a failed outcome.
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Convert into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

/// Renders as `Ok(value)` or `Err(error)` using the contents' `Display`.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({})", value),
            Outcome::Err(error) => write!(f, "Err({})", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
