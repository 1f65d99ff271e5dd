//! `?` support for `Outcome` on nightly, behind the `try_trait` feature.
//!
//! With the feature enabled, `?` on an `Outcome` short-circuits exactly like
//! [`Outcome::and_then`]: the first `Err` leaves the function. Errors from a
//! plain `Result` can be propagated into an `Outcome` too, converted with
//! `From`.

use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Try};

use crate::Outcome;

impl<T, E> Try for Outcome<T, E> {
    type Output = T;
    type Residual = Outcome<Infallible, E>;

    #[inline]
    fn from_output(output: T) -> Self {
        Outcome::Ok(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Outcome::Ok(value) => ControlFlow::Continue(value),
            Outcome::Err(error) => ControlFlow::Break(Outcome::Err(error)),
        }
    }
}

impl<T, E, F: From<E>> FromResidual<Outcome<Infallible, E>> for Outcome<T, F> {
    #[inline]
    fn from_residual(residual: Outcome<Infallible, E>) -> Self {
        match residual {
            Outcome::Err(error) => Outcome::Err(F::from(error)),
        }
    }
}

impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for Outcome<T, F> {
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Err(error) => Outcome::Err(F::from(error)),
        }
    }
}

impl<T, E, F: From<E>> FromResidual<Outcome<Infallible, E>> for Result<T, F> {
    #[inline]
    fn from_residual(residual: Outcome<Infallible, E>) -> Self {
        match residual {
            Outcome::Err(error) => Err(F::from(error)),
        }
    }
}
