//! Structured context for outcome errors
//!
//! [`Outcome::with_context`](crate::Outcome::with_context) flattens an error into
//! a string. When the original error value still matters to the caller, use
//! [`Outcome::context`] instead: it wraps the error in a [`ContextError`] that
//! keeps the error intact and records each label in a trail.
//!
//! The `Display` form matches the flat string form, outermost label first:
//!
//! ```
//! use outcome::{ContextError, Outcome};
//!
//! let r: Outcome<(), &str> = Outcome::Err("connection refused");
//! let r = r.wrap_context("opening pool").context("starting server");
//!
//! let err: ContextError<&str> = r.unwrap_err();
//! assert_eq!(err.inner(), &"connection refused");
//! assert_eq!(err.to_string(), "starting server: opening pool: connection refused");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Outcome;

/// An error together with the labels attached to it on its way out.
///
/// Labels are stored innermost first, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    error: E,
    trail: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap an error with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            trail: Vec::new(),
        }
    }

    /// Add an outer label.
    ///
    /// ```
    /// use outcome::ContextError;
    ///
    /// let err = ContextError::new("eof").context("reading header").context("loading");
    /// assert_eq!(err.trail(), &["reading header", "loading"]);
    /// ```
    pub fn context(mut self, label: impl Into<String>) -> Self {
        self.trail.push(label.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Discard the trail and return the wrapped error.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Labels, innermost first.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }

    /// The label added last, if any.
    pub fn outermost(&self) -> Option<&str> {
        self.trail.last().map(String::as_str)
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.trail.iter().rev() {
            write!(f, "{}: ", label)?;
        }
        write!(f, "{}", self.error)
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

/// Lets a [`ContextError`] gain another label through [`Outcome::context`]
/// instead of being wrapped a second time.
pub trait IntoContextError {
    /// The error being labelled
    type Inner;

    /// Convert into a `ContextError`, keeping any existing trail.
    fn into_context_error(self) -> ContextError<Self::Inner>;
}

impl<E> IntoContextError for ContextError<E> {
    type Inner = E;

    fn into_context_error(self) -> ContextError<E> {
        self
    }
}

impl<T, E> Outcome<T, E> {
    /// Label the error, keeping the original error value.
    ///
    /// Calling `context` again on the result extends the same trail.
    pub fn context(self, label: impl Into<String>) -> Outcome<T, ContextError<E::Inner>>
    where
        E: IntoContextError,
    {
        self.map_err(|error| error.into_context_error().context(label))
    }

    /// Start a context trail on a plain error.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<(), std::io::Error> =
    ///     Outcome::Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    /// let err = r.wrap_context("reading config").unwrap_err();
    /// assert_eq!(err.to_string(), "reading config: missing");
    /// ```
    pub fn wrap_context(self, label: impl Into<String>) -> Outcome<T, ContextError<E>> {
        self.map_err(|error| ContextError::new(error).context(label))
    }
}
