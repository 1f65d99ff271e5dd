//! Adapter between `Outcome` and future-based code
//!
//! An outcome is already settled, so the adapter produces a future that is
//! ready on its first poll: it resolves with the `Ok` payload or rejects with
//! the `Err` payload. Nothing is spawned and no executor is required beyond
//! whatever polls the future.
//!
//! Downstream async code consumes the result through the usual
//! `futures::TryFutureExt` vocabulary (`map_ok`, `and_then`, `or_else`), or
//! simply awaits it.
//!
//! # Examples
//!
//! ```
//! use futures::TryFutureExt;
//! use outcome::Outcome;
//!
//! # tokio_test::block_on(async {
//! let token: Outcome<&str, String> = Outcome::Ok("abc123");
//! let header = token.as_promise().map_ok(|t| format!("Bearer {}", t)).await;
//! assert_eq!(header, Ok("Bearer abc123".to_string()));
//!
//! let failed: Outcome<u32, &str> = Outcome::Err("expired");
//! assert_eq!(failed.await, Err("expired"));
//! # });
//! ```

use std::future::{Future, IntoFuture};

use futures::future::{ready, Ready};

use crate::Outcome;

/// A future that is already resolved or rejected.
pub type Promise<T, E> = Ready<Result<T, E>>;

impl<T, E> Outcome<T, E> {
    /// Wrap this outcome in an immediately-settled future.
    ///
    /// `Ok(v)` resolves to `Ok(v)`; `Err(e)` rejects with `Err(e)`.
    pub fn as_promise(self) -> Promise<T, E> {
        ready(self.into_result())
    }
}

impl<T, E> IntoFuture for Outcome<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = Promise<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        self.as_promise()
    }
}

/// Await a fallible future and capture what it settled with.
///
/// ```
/// use outcome::{promise::settle, Outcome};
///
/// # tokio_test::block_on(async {
/// let r = settle(async { "7".parse::<i32>() }).await;
/// assert_eq!(r.ok(), Some(7));
/// # });
/// ```
pub async fn settle<T, E, F>(future: F) -> Outcome<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    Outcome::from_result(future.await)
}
