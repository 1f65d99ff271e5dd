//! The `Outcome` type: a value that either succeeded or failed.
//!
//! # Outcome vs Result
//!
//! `Outcome<T, E>` has the same two shapes as `std::result::Result`, but it carries
//! the full combinator algebra of this crate as inherent methods: predicate
//! filtering, default-message validation, handler-based dispatch, aggregation and
//! a promise-style adapter. Conversions to and from `Result` are free, so an
//! `Outcome` can sit at the edge of code that otherwise uses `?`.
//!
//! # Ok-Biased Convention
//!
//! Transformations and chaining (`map`, `and_then`, `filter`, `inspect`) act on the
//! `Ok` payload and pass `Err` through untouched. The `_err` counterparts
//! (`map_err`, `or_else`, `inspect_err`) do the opposite.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from_result(raw.parse::<u16>())
//!         .map_err(|e| e.to_string())
//!         .filter_or(|port| *port >= 1024, "privileged port".to_string())
//! }
//!
//! assert_eq!(parse_port("8080"), Outcome::Ok(8080));
//! assert_eq!(parse_port("80"), Outcome::Err("privileged port".to_string()));
//! assert!(parse_port("http").is_err());
//! ```

use std::fmt;

/// Error produced by [`Outcome::validate`] when the predicate rejects the value.
pub const DEFAULT_VALIDATION_MESSAGE: &str = "validation failed";

/// Error produced by [`Outcome::filter`] when the predicate rejects the value.
pub const DEFAULT_FILTER_MESSAGE: &str = "filter predicate failed";

/// A value that is either `Ok(T)` or `Err(E)`.
///
/// Every combinator consumes `self` and returns a new `Outcome`; nothing in the
/// algebra mutates an existing value. Two outcomes with the same variant and
/// equal payloads compare equal.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let doubled = Outcome::<i32, &str>::Ok(21)
///     .map(|n| n * 2)
///     .and_then(|n| if n > 40 { Outcome::Ok(n) } else { Outcome::Err("too small") });
///
/// assert_eq!(doubled, Outcome::Ok(42));
///
/// let message = doubled.fold(|n| format!("got {}", n), |e| format!("failed: {}", e));
/// assert_eq!(message, "got 42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The operation produced a value
    Ok(T),
    /// The operation failed with an error
    Err(E),
}

/// Build a successful outcome.
///
/// ```rust
/// use outcome::{ok, Outcome};
///
/// let r: Outcome<i32, String> = ok(7);
/// assert_eq!(r, Outcome::Ok(7));
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Build a failed outcome.
///
/// ```rust
/// use outcome::{err, Outcome};
///
/// let r: Outcome<i32, &str> = err("missing");
/// assert_eq!(r, Outcome::Err("missing"));
/// ```
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// The pair of handlers consumed by [`Outcome::match_with`].
///
/// Both fields are required, so a dispatch that forgets one of the variants
/// does not compile.
pub struct Handlers<F, G> {
    /// Invoked with the success payload
    pub ok: F,
    /// Invoked with the error payload
    pub err: G,
}

impl<F, G> fmt::Debug for Handlers<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers").finish_non_exhaustive()
    }
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Keep `value` if `predicate` accepts it, otherwise fail with
    /// [`DEFAULT_VALIDATION_MESSAGE`].
    ///
    /// The predicate is called directly; a panicking predicate is not captured.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{Outcome, DEFAULT_VALIDATION_MESSAGE};
    ///
    /// let adult = Outcome::<u8, String>::validate(30, |age| *age >= 18);
    /// assert_eq!(adult, Outcome::Ok(30));
    ///
    /// let minor = Outcome::<u8, String>::validate(12, |age| *age >= 18);
    /// assert_eq!(minor, Outcome::Err(DEFAULT_VALIDATION_MESSAGE.to_string()));
    /// ```
    pub fn validate<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: From<&'static str>,
    {
        Self::validate_or(value, predicate, E::from(DEFAULT_VALIDATION_MESSAGE))
    }

    /// Keep `value` if `predicate` accepts it, otherwise fail with `error`.
    ///
    /// `error` is evaluated by the caller whether or not it ends up being used.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let r = Outcome::validate_or(17, |age| *age >= 18, "too young");
    /// assert_eq!(r, Outcome::Err("too young"));
    /// ```
    pub fn validate_or<P>(value: T, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Outcome::Ok(value)
        } else {
            Outcome::Err(error)
        }
    }

    /// Create an outcome from a `Result`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<i32, std::num::ParseIntError> = Outcome::from_result("12".parse());
    /// assert_eq!(r.ok(), Some(12));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }

    /// Create an outcome from an `Option`, failing with `error` on `None`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from_option(Some(1), "empty"), Outcome::Ok(1));
    /// assert_eq!(Outcome::<i32, _>::from_option(None, "empty"), Outcome::Err("empty"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(error),
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    // ========== Inspectors ==========

    /// Returns `true` if this is an `Ok`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert!(Outcome::<i32, ()>::Ok(1).is_ok());
    /// assert!(!Outcome::<i32, ()>::Err(()).is_ok());
    /// ```
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns `true` if this is an `Ok` whose payload satisfies `f`.
    #[inline]
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => false,
        }
    }

    /// Returns `true` if this is an `Err` whose payload satisfies `f`.
    #[inline]
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(error) => f(error),
        }
    }

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Convert to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    // ========== Extractors ==========

    /// Extract the success payload, panicking on `Err`.
    ///
    /// Calling this on an `Err` is a programming error, not a recoverable
    /// failure; use [`unwrap_or`](Self::unwrap_or) or
    /// [`unwrap_or_else`](Self::unwrap_or_else) when the error is expected.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Err`, with the error's `Debug` rendering.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(3).unwrap(), 3);
    /// ```
    ///
    /// ```rust,should_panic
    /// use outcome::Outcome;
    ///
    /// Outcome::<i32, &str>::Err("boom").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {:?}", error)
            }
        }
    }

    /// Extract the success payload with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the error's `Debug` rendering if the value is an `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic!("{}: {:?}", msg, error),
        }
    }

    /// Extract the error payload, panicking on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => {
                panic!("called `Outcome::unwrap_err()` on an `Ok` value: {:?}", value)
            }
            Outcome::Err(error) => error,
        }
    }

    /// Extract the error payload with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => panic!("{}: {:?}", msg, value),
            Outcome::Err(error) => error,
        }
    }

    /// Return the success payload or `default`.
    ///
    /// `default` is evaluated eagerly, even when the outcome is `Ok`. Use
    /// [`unwrap_or_else`](Self::unwrap_or_else) to defer the work.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(1).unwrap_or(0), 1);
    /// assert_eq!(Outcome::<i32, &str>::Err("x").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Return the success payload or compute one from the error.
    ///
    /// `f` only runs on the `Err` path.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let len = Outcome::<usize, &str>::Err("four").unwrap_or_else(|e| e.len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => f(error),
        }
    }

    /// Return the success payload or `T::default()`.
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

    /// The success payload, or `None` for an `Err`.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// The error payload, or `None` for an `Ok`.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Apply `f` to the success payload, or return `default` for an `Err`.
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

    /// Apply `f` to the success payload, or `default` to the error.
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

    // ========== Pattern Dispatch ==========

    /// Run exactly one of the two handlers and return what it returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{Handlers, Outcome};
    ///
    /// let status = Outcome::<u32, String>::Err("disk full".into()).match_with(Handlers {
    ///     ok: |written: u32| format!("wrote {} bytes", written),
    ///     err: |e: String| format!("write failed: {}", e),
    /// });
    /// assert_eq!(status, "write failed: disk full");
    /// ```
    #[inline]
    pub fn match_with<U, F, G>(self, handlers: Handlers<F, G>) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        self.fold(handlers.ok, handlers.err)
    }

    /// Fold both variants into a single value.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(r.fold(|n| n * 10, |e| e.len() as i32), 20);
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_ok: F, on_err: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    // ========== Transformations ==========

    /// Transform the success payload, passing errors through unchanged.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(2).map(|n| n + 1), Outcome::Ok(3));
    /// assert_eq!(Outcome::<i32, &str>::Err("e").map(|n| n + 1), Outcome::Err("e"));
    /// ```
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

    /// Transform the error payload, passing successes through unchanged.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let r = Outcome::<i32, &str>::Err("bad").map_err(|e| e.to_uppercase());
    /// assert_eq!(r, Outcome::Err("BAD".to_string()));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Transform both payloads.
    #[inline]
    pub fn bimap<U, E2, F, G>(self, f: F, g: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(g(error)),
        }
    }

    /// Reject a success payload that fails `predicate`, using
    /// [`DEFAULT_FILTER_MESSAGE`] as the error.
    ///
    /// Errors pass through and the predicate is not called.
    ///
    /// ```rust
    /// use outcome::{Outcome, DEFAULT_FILTER_MESSAGE};
    ///
    /// let odd: Outcome<i32, String> = Outcome::Ok(5);
    /// assert_eq!(
    ///     odd.filter(|n| n % 2 == 0),
    ///     Outcome::Err(DEFAULT_FILTER_MESSAGE.to_string())
    /// );
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: From<&'static str>,
    {
        match self {
            Outcome::Ok(value) if predicate(&value) => Outcome::Ok(value),
            Outcome::Ok(_) => Outcome::Err(E::from(DEFAULT_FILTER_MESSAGE)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Reject a success payload that fails `predicate`, using `error`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let even = |n: &i32| n % 2 == 0;
    /// assert_eq!(Outcome::Ok(5).filter_or(even, "not even"), Outcome::Err("not even"));
    /// assert_eq!(Outcome::Ok(4).filter_or(even, "not even"), Outcome::Ok(4));
    /// ```
    #[inline]
    pub fn filter_or<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Ok(value) if predicate(&value) => Outcome::Ok(value),
            Outcome::Ok(_) => Outcome::Err(error),
            Outcome::Err(original) => Outcome::Err(original),
        }
    }

    /// Pair two successes; the first error wins.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let a: Outcome<i32, &str> = Outcome::Ok(1);
    /// assert_eq!(a.zip(Outcome::Ok("one")), Outcome::Ok((1, "one")));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => Outcome::Ok((a, b)),
            (Outcome::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    // ========== Chaining ==========

    /// Chain a dependent step that may itself fail.
    ///
    /// `f` only runs on `Ok`; the first `Err` in a chain short-circuits every
    /// step after it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(8).and_then(half).and_then(half), Outcome::Ok(2));
    /// assert_eq!(
    ///     Outcome::Ok(6).and_then(half).and_then(half),
    ///     Outcome::Err("3 is odd".to_string())
    /// );
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

    /// Recover from an error with a step that may itself fail.
    ///
    /// `f` only runs on `Err`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let cached: Outcome<&str, &str> = Outcome::Err("miss");
    /// let value = cached.or_else(|_| Outcome::<&str, &str>::Ok("fresh"));
    /// assert_eq!(value, Outcome::Ok("fresh"));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => f(error),
        }
    }

    /// Return `other` if this is `Ok`, otherwise this error.
    ///
    /// `other` is built by the caller before the call, whichever branch is taken.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Return this success, otherwise `other`.
    ///
    /// `other` is built by the caller before the call, whichever branch is taken.
    #[inline]
    pub fn or<E2>(self, other: Outcome<T, E2>) -> Outcome<T, E2> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => other,
        }
    }

    // ========== Observation ==========

    /// Call `f` with a reference to the success payload, then return self.
    ///
    /// A panic inside `f` is not caught.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let r = Outcome::<i32, &str>::Ok(9).inspect(|n| seen.push(*n));
    /// assert_eq!(r, Outcome::Ok(9));
    /// assert_eq!(seen, vec![9]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Call `f` with a reference to the error payload, then return self.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(error) = &self {
            f(error);
        }
        self
    }

    // ========== Iterator Support ==========

    /// Iterate over the success payload, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().ok().into_iter()
    }

    /// Iterate mutably over the success payload, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.as_mut().ok().into_iter()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T: Clone, E> Outcome<&T, E> {
    /// Clone the borrowed success payload.
    #[inline]
    pub fn cloned(self) -> Outcome<T, E> {
        self.map(Clone::clone)
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    /// Returns `Outcome::Ok(T::default())`.
    fn default() -> Self {
        Outcome::Ok(T::default())
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().ok().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructors() {
        let r: Outcome<i32, &str> = ok(1);
        assert_eq!(r, Outcome::Ok(1));
        let r: Outcome<i32, &str> = err("e");
        assert_eq!(r, Outcome::Err("e"));
    }

    #[test]
    fn test_ok_inspectors_and_extractors() {
        let r: Outcome<&str, i32> = Outcome::Ok("v");
        assert!(r.is_ok());
        assert!(!r.is_err());
        assert_eq!(r.unwrap(), "v");
        assert_eq!(r.ok(), Some("v"));
        assert_eq!(r.err(), None);
    }

    #[test]
    fn test_err_inspectors_and_extractors() {
        let r: Outcome<i32, &str> = Outcome::Err("e");
        assert!(r.is_err());
        assert!(!r.is_ok());
        assert_eq!(r.unwrap_or(9), 9);
        assert_eq!(r.err(), Some("e"));
        assert_eq!(r.ok(), None);
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value: \"boom\"")]
    fn test_unwrap_panics_on_err() {
        let r: Outcome<i32, &str> = Outcome::Err("boom");
        r.unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_err()` on an `Ok` value: 3")]
    fn test_unwrap_err_panics_on_ok() {
        let r: Outcome<i32, &str> = Outcome::Ok(3);
        r.unwrap_err();
    }

    #[test]
    #[should_panic(expected = "config missing: \"no file\"")]
    fn test_expect_panics_with_message() {
        let r: Outcome<i32, &str> = Outcome::Err("no file");
        r.expect("config missing");
    }

    #[test]
    fn test_expect_err_returns_error() {
        let r: Outcome<i32, &str> = Outcome::Err("no file");
        assert_eq!(r.expect_err("should fail"), "no file");
    }

    #[test]
    fn test_unwrap_or_is_eager() {
        let calls = Cell::new(0);
        let make_default = || {
            calls.set(calls.get() + 1);
            0
        };
        let r: Outcome<i32, &str> = Outcome::Ok(5);
        assert_eq!(r.unwrap_or(make_default()), 5);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let r: Outcome<i32, &str> = Outcome::Ok(5);
        let v = r.unwrap_or_else(|_| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(v, 5);
        assert_eq!(calls.get(), 0);

        let r: Outcome<usize, &str> = Outcome::Err("four");
        assert_eq!(r.unwrap_or_else(|e| e.len()), 4);
    }

    #[test]
    fn test_unwrap_or_default() {
        let r: Outcome<Vec<i32>, &str> = Outcome::Err("e");
        assert!(r.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_map_or_variants() {
        let r: Outcome<i32, &str> = Outcome::Ok(2);
        assert_eq!(r.map_or(0, |n| n * 3), 6);
        let r: Outcome<i32, &str> = Outcome::Err("abc");
        assert_eq!(r.map_or_else(|e| e.len() as i32, |n| n * 3), 3);
    }

    #[test]
    fn test_is_ok_and_is_err_and() {
        let r: Outcome<i32, &str> = Outcome::Ok(4);
        assert!(r.is_ok_and(|n| n > 3));
        assert!(!r.is_err_and(|_| true));
        let r: Outcome<i32, &str> = Outcome::Err("x");
        assert!(r.is_err_and(|e| e == "x"));
    }

    #[test]
    fn test_match_with_runs_one_handler() {
        let ok_calls = Cell::new(0);
        let err_calls = Cell::new(0);

        let r: Outcome<i32, &str> = Outcome::Ok(1);
        let out = r.match_with(Handlers {
            ok: |n: i32| {
                ok_calls.set(ok_calls.get() + 1);
                n + 1
            },
            err: |_: &str| {
                err_calls.set(err_calls.get() + 1);
                0
            },
        });

        assert_eq!(out, 2);
        assert_eq!(ok_calls.get(), 1);
        assert_eq!(err_calls.get(), 0);
    }

    #[test]
    fn test_match_with_err_branch() {
        let r: Outcome<i32, &str> = Outcome::Err("bad");
        let out = r.match_with(Handlers {
            ok: |n: i32| n.to_string(),
            err: |e: &str| format!("error: {}", e),
        });
        assert_eq!(out, "error: bad");
    }

    #[test]
    fn test_map_skips_err() {
        let called = Cell::new(false);
        let r: Outcome<i32, &str> = Outcome::Err("e");
        let mapped = r.map(|n| {
            called.set(true);
            n
        });
        assert_eq!(mapped, Outcome::Err("e"));
        assert!(!called.get());
    }

    #[test]
    fn test_map_err_skips_ok() {
        let called = Cell::new(false);
        let r: Outcome<i32, &str> = Outcome::Ok(1);
        let mapped = r.map_err(|e| {
            called.set(true);
            e.len()
        });
        assert_eq!(mapped, Outcome::Ok(1));
        assert!(!called.get());
    }

    #[test]
    fn test_bimap() {
        let r: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(r.bimap(|n| n + 1, |e| e.len()), Outcome::Ok(2));
        let r: Outcome<i32, &str> = Outcome::Err("abc");
        assert_eq!(r.bimap(|n| n + 1, |e| e.len()), Outcome::Err(3));
    }

    #[test]
    fn test_filter_or() {
        let even = |n: &i32| n % 2 == 0;
        assert_eq!(
            Outcome::Ok(5).filter_or(even, "not even"),
            Outcome::Err("not even")
        );
        assert_eq!(Outcome::Ok(4).filter_or(even, "not even"), Outcome::Ok(4));
    }

    #[test]
    fn test_filter_default_message() {
        let r: Outcome<i32, String> = Outcome::Ok(5);
        assert_eq!(
            r.filter(|n| n % 2 == 0),
            Outcome::Err(DEFAULT_FILTER_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_filter_skips_predicate_on_err() {
        let called = Cell::new(false);
        let r: Outcome<i32, &str> = Outcome::Err("first");
        let filtered = r.filter_or(
            |_| {
                called.set(true);
                false
            },
            "second",
        );
        assert_eq!(filtered, Outcome::Err("first"));
        assert!(!called.get());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            Outcome::validate_or(17, |a| *a >= 18, "too young"),
            Outcome::Err("too young")
        );
        assert_eq!(
            Outcome::validate_or(21, |a| *a >= 18, "too young"),
            Outcome::Ok(21)
        );
        assert_eq!(
            Outcome::<i32, String>::validate(17, |a| *a >= 18),
            Outcome::Err(DEFAULT_VALIDATION_MESSAGE.to_string())
        );
    }

    #[test]
    #[should_panic(expected = "predicate exploded")]
    fn test_validate_does_not_capture_predicate_panic() {
        let _ = Outcome::validate_or(1, |_| panic!("predicate exploded"), "unused");
    }

    #[test]
    fn test_and_then_short_circuits() {
        let called = Cell::new(false);
        let r: Outcome<i32, &str> = Outcome::Err("stop");
        let chained = r.and_then(|n| {
            called.set(true);
            Outcome::Ok(n + 1)
        });
        assert_eq!(chained, Outcome::Err("stop"));
        assert!(!called.get());
    }

    #[test]
    fn test_and_then_flattens() {
        let r: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(r.and_then(|_| Outcome::<i32, &str>::Err("late")), Outcome::Err("late"));
    }

    #[test]
    fn test_or_else_recovers() {
        let r: Outcome<i32, &str> = Outcome::Err("miss");
        assert_eq!(r.or_else(|_| Outcome::<i32, ()>::Ok(7)), Outcome::Ok(7));

        let called = Cell::new(false);
        let r: Outcome<i32, &str> = Outcome::Ok(1);
        let kept = r.or_else(|_| {
            called.set(true);
            Outcome::<i32, &str>::Ok(2)
        });
        assert_eq!(kept, Outcome::Ok(1));
        assert!(!called.get());
    }

    #[test]
    fn test_and_or() {
        let a: Outcome<i32, &str> = Outcome::Ok(1);
        let b: Outcome<&str, &str> = Outcome::Err("b");
        assert_eq!(a.and(b), Outcome::Err("b"));

        let a: Outcome<i32, &str> = Outcome::Err("a");
        assert_eq!(a.and(Outcome::<i32, &str>::Ok(2)), Outcome::Err("a"));

        let a: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(a.or(Outcome::<i32, &str>::Ok(2)), Outcome::Ok(1));

        let a: Outcome<i32, &str> = Outcome::Err("a");
        assert_eq!(a.or(Outcome::<i32, &str>::Err("b")), Outcome::Err("b"));
    }

    #[test]
    fn test_inspect_returns_self() {
        let seen = Cell::new(0);
        let r: Outcome<i32, &str> = Outcome::Ok(3);
        assert_eq!(r.inspect(|n| seen.set(*n)), Outcome::Ok(3));
        assert_eq!(seen.get(), 3);

        let r: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(r.inspect(|_| seen.set(100)), Outcome::Err("e"));
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_inspect_err() {
        let seen = Cell::new("");
        let r: Outcome<i32, &str> = Outcome::Err("oops");
        assert_eq!(r.inspect_err(|e| seen.set(*e)), Outcome::Err("oops"));
        assert_eq!(seen.get(), "oops");
    }

    #[test]
    fn test_inspect_err_skips_ok() {
        let calls = Cell::new(0);
        let r: Outcome<i32, &str> = Outcome::Ok(4);
        assert_eq!(r.inspect_err(|_| calls.set(calls.get() + 1)), Outcome::Ok(4));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    #[should_panic(expected = "inspector failed")]
    fn test_inspect_panic_propagates() {
        let r: Outcome<i32, &str> = Outcome::Ok(1);
        let _ = r.inspect(|_| panic!("inspector failed"));
    }

    #[test]
    #[should_panic(expected = "error inspector failed")]
    fn test_inspect_err_panic_propagates() {
        let r: Outcome<i32, &str> = Outcome::Err("e");
        let _ = r.inspect_err(|_| panic!("error inspector failed"));
    }

    #[test]
    fn test_zip() {
        let a: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(a.zip(Outcome::<&str, &str>::Err("b")), Outcome::Err("b"));
        let a: Outcome<i32, &str> = Outcome::Err("a");
        assert_eq!(a.zip(Outcome::<&str, &str>::Err("b")), Outcome::Err("a"));
    }

    #[test]
    fn test_flatten_and_cloned() {
        let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Ok(2));
        assert_eq!(nested.flatten(), Outcome::Ok(2));

        let owned = String::from("x");
        let borrowed: Outcome<&String, ()> = Outcome::Ok(&owned);
        assert_eq!(borrowed.cloned(), Outcome::Ok(String::from("x")));
    }

    #[test]
    fn test_result_conversion() {
        let r: Outcome<i32, &str> = Ok::<i32, &str>(1).into();
        assert_eq!(r, Outcome::Ok(1));
        let back: Result<i32, &str> = Outcome::<i32, &str>::Err("e").into();
        assert_eq!(back, Err("e"));
        assert_eq!(Outcome::<i32, &str>::from_option(None, "none"), Outcome::Err("none"));
    }

    #[test]
    fn test_iteration() {
        let mut r: Outcome<i32, &str> = Outcome::Ok(2);
        for v in r.iter_mut() {
            *v *= 5;
        }
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![&10]);
        assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![10]);

        let e: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!((&e).into_iter().count(), 0);
    }

    #[test]
    fn test_default() {
        let r: Outcome<i32, &str> = Outcome::default();
        assert_eq!(r, Outcome::Ok(0));
    }

    #[test]
    fn test_and_then_identity() {
        let r: Outcome<i32, &str> = Outcome::Ok(4);
        assert_eq!(r.and_then(Outcome::Ok), r);
        let r: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(r.and_then(Outcome::Ok), r);
    }
}
