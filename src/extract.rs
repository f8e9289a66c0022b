// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting values out of an `Outcome`.
//!
//! Two surfaces:
//!
//! 1. **Total**: `unwrap_or`, `unwrap_or_else`, `unwrap_or_default`. Always
//!    return a value.
//!
//! 2. **Partial**: `unwrap`, `expect`, `unwrap_err`, `expect_err`. Panic when
//!    the other variant is present. These are the only operations in the crate
//!    that can fail. Each has a `try_` sibling (`try_unwrap`, `try_unwrap_err`)
//!    that reports the mismatch as an [`UnwrapError`] instead of panicking.
//!
//! Prefer `match_with`, `map`, or `and_then` over the partial surface whenever
//! the variant is not already known.

use crate::types::Outcome;
use std::error::Error;
use std::fmt;

/// Which variant an unwrap found instead of the one it expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Found {
    /// Expected `Err`, found `Ok`.
    Ok,
    /// Expected `Ok`, found `Err`.
    Err,
}

/// Views a payload as the error it is, for `source()`.
type CauseOf<X> = fn(&X) -> &(dyn Error + 'static);

/// An unwrap found the wrong variant.
///
/// Carries the value that was found. `Display` shows that value's own
/// description, so `Err(2)` fails with the message `"2"`. Any payload with
/// `Debug` and `Display` makes this a `std::error::Error`.
///
/// `source()` is empty unless the failure came from
/// [`Outcome::try_unwrap_with_source`] or [`UnwrapError::with_source`], which
/// require the payload to be an error and report it as the cause.
pub struct UnwrapError<X> {
    found: Found,
    value: X,
    cause: Option<CauseOf<X>>,
}

impl<X> UnwrapError<X> {
    /// Expected `Ok`, found `Err` holding `error`.
    pub fn found_err(error: X) -> Self {
        UnwrapError {
            found: Found::Err,
            value: error,
            cause: None,
        }
    }

    /// Expected `Err`, found `Ok` holding `value`.
    pub fn found_ok(value: X) -> Self {
        UnwrapError {
            found: Found::Ok,
            value,
            cause: None,
        }
    }

    /// The variant that was found.
    pub fn found(&self) -> Found {
        self.found
    }

    /// The value that was found in place of the expected one.
    pub fn value(&self) -> &X {
        &self.value
    }

    /// Take the found value back.
    pub fn into_inner(self) -> X {
        self.value
    }
}

impl<X: Error + 'static> UnwrapError<X> {
    /// Report the found value as this failure's `source()`.
    pub fn with_source(mut self) -> Self {
        self.cause = Some(as_cause::<X>);
        self
    }
}

fn as_cause<X: Error + 'static>(value: &X) -> &(dyn Error + 'static) {
    value
}

impl<X: Clone> Clone for UnwrapError<X> {
    fn clone(&self) -> Self {
        UnwrapError {
            found: self.found,
            value: self.value.clone(),
            cause: self.cause,
        }
    }
}

// Equality is about what was found. Whether a cause is attached is not compared.
impl<X: PartialEq> PartialEq for UnwrapError<X> {
    fn eq(&self, other: &Self) -> bool {
        self.found == other.found && self.value == other.value
    }
}

impl<X: Eq> Eq for UnwrapError<X> {}

impl<X: fmt::Debug> fmt::Debug for UnwrapError<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnwrapError")
            .field("found", &self.found)
            .field("value", &self.value)
            .field("has_source", &self.cause.is_some())
            .finish()
    }
}

impl<X: fmt::Display> fmt::Display for UnwrapError<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<X: fmt::Debug + fmt::Display> Error for UnwrapError<X> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.map(|cause| cause(&self.value))
    }
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // TOTAL
    // =========================================================================

    /// The success value, or `default` on `Err`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// The success value, or one computed from the error.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => op(error),
        }
    }

    /// The success value, or `T::default()` on `Err`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => T::default(),
        }
    }

    /// The success value, or an [`UnwrapError`] carrying the error.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError<E>> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(UnwrapError::found_err(error)),
        }
    }

    /// Like [`try_unwrap`](Self::try_unwrap), with the error kept as the
    /// failure's `source()`.
    #[inline]
    pub fn try_unwrap_with_source(self) -> Result<T, UnwrapError<E>>
    where
        E: Error + 'static,
    {
        self.try_unwrap().map_err(UnwrapError::with_source)
    }

    /// The error value, or an [`UnwrapError`] carrying the success.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError<T>> {
        match self {
            Outcome::Ok(value) => Err(UnwrapError::found_ok(value)),
            Outcome::Err(error) => Ok(error),
        }
    }

    // =========================================================================
    // PARTIAL
    // =========================================================================

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err`, with a message containing the error's `Debug` output.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                unwrap_failed("called `Outcome::unwrap()` on an `Err` value", &error)
            }
        }
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err` with `msg` followed by the error's `Debug` output.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => unwrap_failed(msg, &error),
        }
    }

    /// The error value.
    ///
    /// # Panics
    ///
    /// Panics on `Ok`, with a message containing the value's `Debug` output.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => {
                unwrap_failed("called `Outcome::unwrap_err()` on an `Ok` value", &value)
            }
            Outcome::Err(error) => error,
        }
    }

    /// The error value.
    ///
    /// # Panics
    ///
    /// Panics on `Ok` with `msg` followed by the value's `Debug` output.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => unwrap_failed(msg, &value),
            Outcome::Err(error) => error,
        }
    }
}

// Kept out of line so the happy path of every `unwrap` stays small.
#[inline(never)]
#[cold]
#[track_caller]
fn unwrap_failed(msg: &str, found: &dyn fmt::Debug) -> ! {
    panic!("{}: {:?}", msg, found)
}
