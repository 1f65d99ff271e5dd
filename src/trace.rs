//! Tracing support for outcomes.
//!
//! The algebra itself never logs. This module adds an opt-in extension trait
//! for call sites that want an outcome recorded as it flows past. Feature-gated
//! behind `#[cfg(feature = "tracing")]`.

use std::fmt;

use crate::capture::{attempt, Captured};
use crate::Outcome;

/// Extension trait for recording outcomes with `tracing`.
///
/// Every method returns the outcome unchanged.
pub trait OutcomeTracingExt<T, E>: Sized {
    /// Emit a `debug` event on `Ok` and a `warn` event carrying the error on `Err`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome::trace::OutcomeTracingExt;
    ///
    /// let config = load_config(path)
    ///     .log_outcome("load_config")
    ///     .unwrap_or_default();
    /// ```
    fn log_outcome(self, operation: &str) -> Self
    where
        E: fmt::Display;

    /// Emit an `error` event if this is an `Err`; successes are silent.
    fn log_err(self, operation: &str) -> Self
    where
        E: fmt::Display;
}

impl<T, E> OutcomeTracingExt<T, E> for Outcome<T, E> {
    fn log_outcome(self, operation: &str) -> Self
    where
        E: fmt::Display,
    {
        match &self {
            Outcome::Ok(_) => tracing::debug!(operation, "operation succeeded"),
            Outcome::Err(error) => tracing::warn!(operation, error = %error, "operation failed"),
        }
        self
    }

    fn log_err(self, operation: &str) -> Self
    where
        E: fmt::Display,
    {
        if let Outcome::Err(error) = &self {
            tracing::error!(operation, error = %error, "operation failed");
        }
        self
    }
}

/// Run [`attempt`] inside `span`, recording a captured panic as an `error` event.
///
/// # Example
///
/// ```rust,ignore
/// use outcome::trace::attempt_in_span;
///
/// let rows = attempt_in_span(tracing::info_span!("import", file = %path), || import(path));
/// ```
pub fn attempt_in_span<T, F>(span: tracing::Span, operation: F) -> Outcome<T, Captured>
where
    F: FnOnce() -> T,
{
    span.in_scope(|| {
        attempt(operation).inspect_err(|captured| {
            tracing::error!(panic = %captured, "captured panic");
        })
    })
}
