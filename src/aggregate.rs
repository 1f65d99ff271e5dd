//! Combining many outcomes into one
//!
//! Two policies cover most call sites:
//!
//! - [`all`]: every element must succeed. The payloads come back in input
//!   order; otherwise the **first** error is returned and the rest of the input
//!   is never pulled.
//! - [`any`]: the **first** success wins. If nothing succeeds, the **last**
//!   error is returned.
//!
//! Both accept any `IntoIterator`, so lazily produced outcomes are only
//! evaluated as far as the policy needs.
//!
//! # Examples
//!
//! ```
//! use outcome::{aggregate::{all, any}, Outcome};
//!
//! let sizes = all(vec![Outcome::<_, &str>::Ok(1), Outcome::Ok(2), Outcome::Ok(3)]);
//! assert_eq!(sizes, Outcome::Ok(vec![1, 2, 3]));
//!
//! let mirror = any(vec![Outcome::<&str, _>::Err("a"), Outcome::Ok("b"), Outcome::Err("c")]);
//! assert_eq!(mirror, Outcome::Ok("b"));
//! ```

use crate::Outcome;

/// Collect every success, or stop at the first error.
///
/// Empty input yields `Ok(vec![])`.
///
/// # Examples
///
/// ```
/// use outcome::{aggregate::all, Outcome};
///
/// let r = all(vec![Outcome::Ok(1), Outcome::Err("x"), Outcome::Ok(3)]);
/// assert_eq!(r, Outcome::Err("x"));
///
/// let none: Vec<Outcome<i32, &str>> = Vec::new();
/// assert_eq!(all(none), Outcome::Ok(vec![]));
/// ```
pub fn all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Return the first success, or the last error if there is none.
///
/// # Panics
///
/// Panics if `outcomes` is empty: there is neither a success nor an error to
/// return. Use [`try_any`] when the input may be empty.
///
/// # Examples
///
/// ```
/// use outcome::{aggregate::any, Outcome};
///
/// let r = any(vec![Outcome::<i32, _>::Err("a"), Outcome::Err("b")]);
/// assert_eq!(r, Outcome::Err("b"));
/// ```
#[track_caller]
pub fn any<T, E, I>(outcomes: I) -> Outcome<T, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    match try_any(outcomes) {
        Some(outcome) => outcome,
        None => panic!("called `any()` on an empty sequence"),
    }
}

/// Like [`any`], but returns `None` for empty input instead of panicking.
///
/// ```
/// use outcome::{aggregate::try_any, Outcome};
///
/// assert_eq!(try_any(Vec::<Outcome<i32, &str>>::new()), None);
/// assert_eq!(try_any(vec![Outcome::<i32, _>::Err("only")]), Some(Outcome::Err("only")));
/// ```
pub fn try_any<T, E, I>(outcomes: I) -> Option<Outcome<T, E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut last_error = None;
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => return Some(Outcome::Ok(value)),
            Outcome::Err(error) => last_error = Some(error),
        }
    }
    last_error.map(Outcome::Err)
}

/// Apply `f` to each item and collect with [`all`] semantics.
///
/// `f` is not called for items after the first failure.
///
/// ```
/// use outcome::{aggregate::traverse, Outcome};
///
/// fn parse(s: &str) -> Outcome<i32, String> {
///     Outcome::from_result(s.parse::<i32>()).map_err(|_| format!("bad number: {}", s))
/// }
///
/// assert_eq!(traverse(["1", "2"], parse), Outcome::Ok(vec![1, 2]));
/// assert_eq!(traverse(["1", "x", "y"], parse), Outcome::Err("bad number: x".to_string()));
/// ```
pub fn traverse<A, T, E, I, F>(items: I, f: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<T, E>,
{
    all(items.into_iter().map(f))
}

/// Split outcomes into successes and errors, keeping relative order.
///
/// ```
/// use outcome::{aggregate::partition, Outcome};
///
/// let (oks, errs) = partition(vec![Outcome::Ok(1), Outcome::Err("a"), Outcome::Ok(2)]);
/// assert_eq!(oks, vec![1, 2]);
/// assert_eq!(errs, vec!["a"]);
/// ```
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut oks = Vec::new();
    let mut errs = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => oks.push(value),
            Outcome::Err(error) => errs.push(error),
        }
    }

    (oks, errs)
}

/// Iterate over the success payloads, skipping errors.
pub fn oks<T, E, I>(outcomes: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().filter_map(Outcome::ok)
}

/// Iterate over the error payloads, skipping successes.
pub fn errs<T, E, I>(outcomes: I) -> impl Iterator<Item = E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().filter_map(Outcome::err)
}

/// Collecting stops at the first error, like [`all`].
///
/// ```
/// use outcome::Outcome;
///
/// let r: Outcome<Vec<u8>, String> = ["1", "2"]
///     .iter()
///     .map(|s| Outcome::from_result(s.parse::<u8>()).map_err(|e| e.to_string()))
///     .collect();
/// assert_eq!(r, Outcome::Ok(vec![1, 2]));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut first_error = None;
        let collected = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(error) => {
                    first_error = Some(error);
                    None
                }
            })
            .collect();

        match first_error {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::{all, any as any_of, partition};
    use crate::Outcome;
    use proptest::prelude::*;

    fn arb_outcome() -> impl Strategy<Value = Outcome<u8, u8>> {
        prop_oneof![
            any::<u8>().prop_map(Outcome::Ok),
            any::<u8>().prop_map(Outcome::Err),
        ]
    }

    proptest! {
        #[test]
        fn prop_all_matches_first_error(items in prop::collection::vec(arb_outcome(), 0..16)) {
            let expected = match items.iter().find(|o| o.is_err()) {
                Some(first) => Outcome::Err(first.unwrap_err()),
                None => Outcome::Ok(items.iter().map(|o| o.unwrap()).collect::<Vec<_>>()),
            };
            prop_assert_eq!(all(items), expected);
        }

        #[test]
        fn prop_any_matches_first_ok_or_last_err(items in prop::collection::vec(arb_outcome(), 1..16)) {
            let expected = match items.iter().find(|o| o.is_ok()) {
                Some(first) => *first,
                None => *items.last().unwrap(),
            };
            prop_assert_eq!(any_of(items), expected);
        }

        #[test]
        fn prop_partition_preserves_counts(items in prop::collection::vec(arb_outcome(), 0..16)) {
            let total = items.len();
            let (good, bad) = partition(items);
            prop_assert_eq!(good.len() + bad.len(), total);
        }
    }
}
