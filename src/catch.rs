// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a panicking computation into an `Outcome`.
//!
//! `Outcome::catch` runs a closure under `catch_unwind` and reports an unwind
//! as `Err(Panicked)`. Only unwinding panics can be caught: under
//! `panic = "abort"` the process still terminates.

use crate::types::Outcome;
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, UnwindSafe};

/// Message recorded when a panic payload is neither `&str` nor `String`.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// A computation panicked instead of returning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// A panic with the given message, as if from `panic!("{message}")`.
    pub fn new(message: impl Into<String>) -> Self {
        Panicked {
            message: message.into(),
        }
    }

    /// The panic message, or [`OPAQUE_PAYLOAD`] if the payload was not a string.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => OPAQUE_PAYLOAD.to_string(),
            },
        };
        Panicked { message }
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computation panicked: {}", self.message)
    }
}

impl Error for Panicked {}

impl<T> Outcome<T, Panicked> {
    /// Run `f`, capturing a panic as `Err(Panicked)`.
    ///
    /// ```
    /// use outcome::{ok, Outcome};
    ///
    /// assert_eq!(Outcome::catch(|| 5), ok(5));
    ///
    /// let failed = Outcome::<i32, _>::catch(|| panic!("error"));
    /// assert_eq!(failed.unwrap_err().message(), "error");
    /// ```
    pub fn catch<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => Outcome::Ok(value),
            Err(payload) => Outcome::Err(Panicked::from_payload(payload)),
        }
    }
}
