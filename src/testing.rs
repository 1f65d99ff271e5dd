//! Testing utilities for code that returns `Outcome`
//!
//! This module provides assertion macros with readable failure messages and,
//! behind the `proptest` feature, an `Arbitrary` implementation so outcomes can
//! be generated in property tests.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{assert_err, assert_err_eq, assert_ok, Outcome};
//!
//! let parsed: Outcome<i32, String> = Outcome::Ok(42);
//! let value = assert_ok!(parsed);
//! assert_eq!(value, 42);
//!
//! let failed: Outcome<i32, &str> = Outcome::Err("empty input");
//! assert_err!(failed);
//! assert_err_eq!(failed, "empty input");
//! ```

/// Assert that an outcome is `Ok` and evaluate to its payload.
///
/// Panics with the error's `Debug` rendering if the outcome is an `Err`.
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(e) => {
                panic!("Expected Ok, got Err: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is `Err` and evaluate to its payload.
///
/// Panics with the value's `Debug` rendering if the outcome is an `Ok`.
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(e) => e,
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err, got Ok: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is `Err` with a specific error.
#[macro_export]
macro_rules! assert_err_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Err(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err({:?}), got Ok: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::Outcome;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::Ok),
            any_with::<E>(e_params).prop_map(Outcome::Err),
        ]
        .boxed()
    }
}
