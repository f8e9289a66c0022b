//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::Cell;

/// Counts how many times the closures it wraps were called.
///
/// Used to prove that a combinator did (or did not) invoke its argument:
///
/// ```
/// use outcome::err;
/// use outcome::testing::CallCounter;
///
/// let counter = CallCounter::new();
/// let _ = err::<i32, &str>("e").map(counter.wrap(|x: i32| x + 1));
/// assert_eq!(counter.calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Record one call.
    pub fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Wrap a one-shot closure so each call is recorded.
    pub fn wrap<'a, A, R>(&'a self, f: impl FnOnce(A) -> R + 'a) -> impl FnOnce(A) -> R + 'a {
        move |arg| {
            self.hit();
            f(arg)
        }
    }

    /// Wrap a reusable closure so each call is recorded.
    pub fn wrap_fn<'a, A, R>(&'a self, f: impl Fn(A) -> R + 'a) -> impl Fn(A) -> R + 'a {
        move |arg| {
            self.hit();
            f(arg)
        }
    }
}
