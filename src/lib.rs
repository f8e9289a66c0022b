//! A `Result`-style sum type with a checked combinator algebra.
//!
//! `Outcome<T, E>` is either `Ok(T)` or `Err(E)`, never both and never
//! neither. It is immutable, and every operation on it is a pure function, so
//! it can be shared across threads whenever `T` and `E` can.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│ combinators.rs │────▶│ extract.rs  │
//! │ (Outcome,   │     │ (map, and_then,│     │ (unwrap_or, │
//! │  ok, err)   │     │  match_with)   │     │  unwrap)    │
//! └─────────────┘     └────────────────┘     └─────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                     │
//! │  (functor and monad laws as debug-mode checks)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Module        | Provides                                          |
//! |---------------|---------------------------------------------------|
//! | `types`       | `Outcome`, `ok`, `err`, `Display`, `Result` interop |
//! | `combinators` | Queries, `map` family, `and_then`, `match_with`   |
//! | `extract`     | `unwrap_or` family, `unwrap`, `UnwrapError`       |
//! | `catch`       | `Outcome::catch`, `Panicked`                      |
//! | `contracts`   | Law checks that panic in debug builds             |
//!
//! # Usage
//!
//! ```
//! use outcome::{err, ok, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>()
//!         .map_err(|e| format!("{}: {}", raw, e))
//!         .into()
//! }
//!
//! let port = parse_port("8080")
//!     .and_then(|p| if p >= 1024 { ok(p) } else { err(format!("{} is privileged", p)) })
//!     .map(|p| p + 1);
//!
//! assert_eq!(port, ok(8081));
//! assert_eq!(parse_port("80").unwrap_or(0), 80);
//! assert_eq!(port.match_with(|p| p.to_string(), |e| e), "8081");
//! ```

// Module declarations
mod catch;
mod combinators;
pub mod contracts;
mod extract;
pub mod testing;
mod types;

// Re-exports for public API
pub use catch::{Panicked, OPAQUE_PAYLOAD};
pub use extract::{Found, UnwrapError};
pub use types::{err, ok, Outcome};
