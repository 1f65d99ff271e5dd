//! Turning panicking calls into outcomes
//!
//! [`attempt`] runs a closure and converts a panic into an `Err(Captured)`;
//! [`try_with`] does the same and prefixes the failure with a context label.
//! [`Outcome::with_context`] applies that same labelling to any outcome whose
//! error implements `Display`, so failures that come back as ordinary `Result`
//! errors read the same way as captured panics.
//!
//! # Examples
//!
//! ```
//! use outcome::{attempt, try_with, Outcome};
//!
//! let parsed = attempt(|| "42".parse::<i32>().unwrap());
//! assert_eq!(parsed.ok(), Some(42));
//!
//! let failed = try_with("loading", || -> i32 { panic!("boom") });
//! assert_eq!(failed, Outcome::Err("loading: boom".to_string()));
//! ```
//!
//! # Limitations
//!
//! Capture relies on unwinding. In a build with `panic = "abort"` a panic inside
//! the closure terminates the process before `attempt` can observe it. The
//! process-wide panic hook still runs for captured panics, so the default hook
//! prints the message to stderr. Callers that need captured panics to stay
//! quiet can install their own hook with [`std::panic::set_hook`]:
//!
//! ```
//! use std::panic;
//! use outcome::attempt;
//!
//! let previous = panic::take_hook();
//! panic::set_hook(Box::new(|_| {}));
//! let r = attempt(|| -> () { panic!("quiet") });
//! panic::set_hook(previous);
//!
//! assert_eq!(r.unwrap_err().message(), "quiet");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};

use crate::Outcome;

/// Message used when a panic payload is neither `&str` nor `String`.
const OPAQUE_PAYLOAD: &str = "panic with a non-string payload";

/// A panic captured by [`attempt`] or [`try_with`].
///
/// Textual payloads (`&str`, `String`) become the message verbatim. Any other
/// payload, such as a value raised with [`std::panic::panic_any`], is kept as
/// is and can be recovered with [`payload_ref`](Captured::payload_ref) or
/// [`into_payload`](Captured::into_payload); its message is a fixed
/// description and `is_textual()` returns `false`.
///
/// Equality, hashing, cloning and serialization only look at the message and
/// the textual flag. A clone carries no payload.
///
/// # Examples
///
/// ```
/// use outcome::{attempt, Captured};
///
/// let err: Captured = attempt(|| -> () { panic!("disk on fire") }).unwrap_err();
/// assert_eq!(err.message(), "disk on fire");
/// assert!(err.is_textual());
/// assert_eq!(err.to_string(), "disk on fire");
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Captured {
    message: String,
    textual: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    payload: Option<Box<dyn Any + Send>>,
}

impl Captured {
    /// Build a captured failure directly from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Captured {
            message: message.into(),
            textual: true,
            payload: None,
        }
    }

    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<String>() {
            Ok(message) => Captured::new(*message),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => Captured::new(*message),
                Err(payload) => Captured {
                    message: OPAQUE_PAYLOAD.to_string(),
                    textual: false,
                    payload: Some(payload),
                },
            },
        }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the panic payload was a string.
    pub fn is_textual(&self) -> bool {
        self.textual
    }

    /// Consume and return the message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Borrow a non-textual payload as `P`.
    ///
    /// Returns `None` for textual panics, for clones, and when the payload is
    /// some other type.
    ///
    /// ```
    /// use outcome::attempt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Status(u16);
    ///
    /// let err = attempt(|| -> () { std::panic::panic_any(Status(503)) }).unwrap_err();
    /// assert_eq!(err.payload_ref::<Status>(), Some(&Status(503)));
    /// assert_eq!(err.payload_ref::<u16>(), None);
    /// ```
    pub fn payload_ref<P: Any>(&self) -> Option<&P> {
        self.payload.as_ref()?.downcast_ref::<P>()
    }

    /// Take the non-textual payload, for example to hand it to
    /// [`std::panic::resume_unwind`].
    pub fn into_payload(self) -> Option<Box<dyn Any + Send>> {
        self.payload
    }
}

impl Clone for Captured {
    fn clone(&self) -> Self {
        Captured {
            message: self.message.clone(),
            textual: self.textual,
            payload: None,
        }
    }
}

impl PartialEq for Captured {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.textual == other.textual
    }
}

impl Eq for Captured {}

impl Hash for Captured {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
        self.textual.hash(state);
    }
}

impl fmt::Display for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Captured {}

/// Run `operation`, turning a normal return into `Ok` and a panic into `Err`.
///
/// The closure is treated as unwind safe: whatever it mutated before panicking
/// stays mutated.
///
/// # Examples
///
/// ```
/// use outcome::attempt;
///
/// let mut steps = Vec::new();
/// let r = attempt(|| {
///     steps.push("started");
///     let v: Vec<i32> = Vec::new();
///     v[3]
/// });
///
/// assert!(r.is_err());
/// assert_eq!(steps, vec!["started"]);
/// ```
pub fn attempt<T, F>(operation: F) -> Outcome<T, Captured>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(Captured::from_payload(payload)),
    }
}

/// Like [`attempt`], but a failure becomes the string `"{context}: {panic}"`.
///
/// `context` is rendered before `operation` runs, on both paths.
///
/// # Examples
///
/// ```
/// use outcome::{try_with, Outcome};
///
/// let r = try_with("reading manifest", || -> u32 { panic!("unexpected EOF") });
/// assert_eq!(r, Outcome::Err("reading manifest: unexpected EOF".to_string()));
///
/// let r = try_with("reading manifest", || 3);
/// assert_eq!(r, Outcome::Ok(3));
/// ```
pub fn try_with<T, C, F>(context: C, operation: F) -> Outcome<T, String>
where
    C: fmt::Display,
    F: FnOnce() -> T,
{
    let context = context.to_string();
    attempt(operation).with_context(context)
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Replace an error with `"{context}: {error}"`.
    ///
    /// Only the text changes; an `Ok` stays `Ok` and an `Err` stays `Err`.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<u8, _> = Outcome::from_result("300".parse::<u8>());
    /// assert_eq!(
    ///     r.with_context("parsing retry count"),
    ///     Outcome::Err("parsing retry count: number too large to fit in target type".to_string())
    /// );
    /// ```
    pub fn with_context(self, context: impl fmt::Display) -> Outcome<T, String> {
        self.map_err(|error| format!("{}: {}", context, error))
    }
}
