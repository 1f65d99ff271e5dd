//! # Outcome
//!
//! A Result algebra for Rust: one value that says "this produced a value" or
//! "this failed with a reason", plus the combinators to inspect, transform,
//! chain and aggregate it without checking a flag at every call site.
//!
//! ## Quick Example
//!
//! ```rust
//! use outcome::{aggregate, try_with, Outcome};
//!
//! fn parse_age(raw: &str) -> Outcome<u8, String> {
//!     Outcome::from_result(raw.trim().parse::<u8>())
//!         .with_context(format!("parsing {:?}", raw))
//!         .filter_or(|age| *age >= 18, "too young".to_string())
//! }
//!
//! assert_eq!(parse_age("30"), Outcome::Ok(30));
//! assert_eq!(parse_age("17"), Outcome::Err("too young".to_string()));
//!
//! // All must succeed: the first failure is reported
//! let ages = aggregate::all(["21", "x", "40"].map(parse_age));
//! assert_eq!(
//!     ages,
//!     Outcome::Err("parsing \"x\": invalid digit found in string".to_string())
//! );
//!
//! // Panics inside a wrapped call become errors
//! let loaded = try_with("loading", || -> u8 { panic!("boom") });
//! assert_eq!(loaded, Outcome::Err("loading: boom".to_string()));
//! ```
//!
//! ## Features
//!
//! - `promise` (default): the [`promise`] module, adapting outcomes to futures.
//!   Without it the crate has no dependencies.
//! - `tracing`: the [`trace`] module, for recording outcomes as they flow past
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`Captured`]
//! - `proptest`: `Arbitrary` for [`Outcome`]
//! - `try_trait` (nightly): `?` on [`Outcome`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod aggregate;
pub mod capture;
pub mod context;
pub mod outcome;
#[cfg(feature = "promise")]
pub mod promise;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;
#[cfg(feature = "try_trait")]
mod try_trait;

// Re-exports
pub use aggregate::{all, any, try_any};
pub use capture::{attempt, try_with, Captured};
pub use context::ContextError;
pub use outcome::{
    err, ok, Handlers, Outcome, DEFAULT_FILTER_MESSAGE, DEFAULT_VALIDATION_MESSAGE,
};
#[cfg(feature = "promise")]
pub use promise::Promise;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::{all, any, try_any};
    pub use crate::capture::{attempt, try_with, Captured};
    pub use crate::context::ContextError;
    pub use crate::outcome::{err, ok, Handlers, Outcome};
    #[cfg(feature = "tracing")]
    pub use crate::trace::OutcomeTracingExt;
}
