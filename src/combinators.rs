// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Queries and combinators: the transformation algebra over `Outcome`.
//!
//! Everything here is total. No function in this module panics, and each
//! closure argument runs at most once, only on the variant it is named for.
//!
//! | Operation      | On `Ok(v)`          | On `Err(e)`          |
//! |----------------|---------------------|----------------------|
//! | `map(f)`       | `Ok(f(v))`          | `Err(e)`             |
//! | `map_err(f)`   | `Ok(v)`             | `Err(f(e))`          |
//! | `and_then(f)`  | `f(v)`              | `Err(e)`             |
//! | `and(o)`       | `o`                 | `Err(e)`             |
//! | `or(o)`        | `Ok(v)`             | `o`                  |
//! | `or_else(f)`   | `Ok(v)`             | `f(e)`               |
//! | `match_with`   | `on_ok(v)`          | `on_err(e)`          |
//!
//! # Laws
//!
//! `map` is a functor and `and_then` is monadic bind, with `ok` as unit:
//!
//! - `o.map(|x| x) == o`
//! - `o.map(f).map(g) == o.map(|x| g(f(x)))`
//! - `ok(v).and_then(f) == f(v)`
//! - `o.and_then(ok) == o`
//! - `o.and_then(f).and_then(g) == o.and_then(|x| f(x).and_then(g))`
//!
//! See `contracts` for executable versions of these.

use crate::types::Outcome;

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Outcome::Ok(value) => predicate(value),
            Outcome::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(error) => predicate(error),
        }
    }

    /// Borrow the contents: `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // OPTION CONVERSIONS
    // =========================================================================

    /// The success value, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// The error value, discarding any success.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    // =========================================================================
    // TRANSFORMATIONS
    // =========================================================================

    /// Transform the success value. An `Err` passes through untouched and `f`
    /// is not called.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the error value. An `Ok` passes through untouched.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(op(error)),
        }
    }

    /// Apply `f` to the success value, or return `default` on `Err`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => default,
        }
    }

    /// Apply `f` to the success value, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => default(error),
        }
    }

    /// Call `f` with a reference to the success value, then return `self`.
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Outcome::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Call `f` with a reference to the error value, then return `self`.
    #[inline]
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Outcome::Err(ref error) = self {
            f(error);
        }
        self
    }

    // =========================================================================
    // SEQUENCING
    // =========================================================================

    /// Monadic bind. Chain a computation that may itself fail; the first `Err`
    /// short-circuits the rest of the chain.
    ///
    /// ```
    /// use outcome::{err, ok, Outcome};
    ///
    /// fn half(n: u32) -> Outcome<u32, String> {
    ///     if n % 2 == 0 { ok(n / 2) } else { err(format!("{} is odd", n)) }
    /// }
    ///
    /// assert_eq!(ok(12).and_then(half).and_then(half), ok(3));
    /// assert_eq!(ok(6).and_then(half).and_then(half), err("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// `other` if this is `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// This value if `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => other,
        }
    }

    /// This value if `Ok`, otherwise recover by calling `op` with the error.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => op(error),
        }
    }

    // =========================================================================
    // ELIMINATION
    // =========================================================================

    /// Exhaustive case analysis. Exactly one of the two branches runs.
    ///
    /// This is the canonical way out of the algebra and back to plain values.
    ///
    /// ```
    /// use outcome::{ok, Outcome};
    ///
    /// let n: Outcome<i32, &str> = ok(5);
    /// assert_eq!(n.match_with(|x| x + 1, |_| -1), 6);
    /// ```
    #[inline]
    pub fn match_with<R, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    /// Iterate over the success value. Yields one item for `Ok`, none for `Err`.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// `Ok(None)` becomes `None`; `Ok(Some(v))` and `Err(e)` move inside `Some`.
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Outcome::Ok(Some(value)) => Some(Outcome::Ok(value)),
            Outcome::Ok(None) => None,
            Outcome::Err(error) => Some(Outcome::Err(error)),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect an iterator of outcomes, stopping at the first `Err`.
///
/// ```
/// use outcome::{err, ok, Outcome};
///
/// let items: Vec<Outcome<u8, &str>> = vec![ok(1), ok(2)];
/// let all: Outcome<Vec<u8>, &str> = items.into_iter().collect();
/// assert_eq!(all, ok(vec![1, 2]));
///
/// let items: Vec<Outcome<u8, &str>> = vec![ok(1), err("a"), err("b")];
/// let first_err: Outcome<Vec<u8>, &str> = items.into_iter().collect();
/// assert_eq!(first_err, err("a"));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
