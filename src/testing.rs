//! Testing utilities for deferred chains.
//!
//! The synchronous core makes chains easy to probe: subscribe with a capture
//! continuation and inspect the [`Outcome`]. [`outcome_of`] does exactly
//! that, and the assertion macros wrap the common checks.
//!
//! ```
//! use augury::prelude::*;
//! use augury::testing::outcome_of;
//!
//! let chain = pure::<_, UnexpectedIssue>(2).map(|n| n * 3);
//! assert_eq!(outcome_of(&chain), Some(Outcome::Value(6)));
//! ```

use std::cell::Cell;
use std::rc::Rc;

use crate::deferred::{Deferred, Outcome, Resolve};

/// Subscribe once and capture the outcome, if the chain resolved
/// synchronously.
///
/// Returns `None` when the chain is still pending, i.e. a leaf parked its
/// [`Resolve`](crate::Resolve) handle with an external effect that has not
/// fired yet.
pub fn outcome_of<D: Deferred>(deferred: &D) -> Option<Outcome<D::Value, D::Issue>> {
    let captured = Rc::new(Cell::new(None));
    let sink = Rc::clone(&captured);

    deferred.subscribe(Resolve::new(move |outcome| sink.set(Some(outcome))));

    captured.take()
}

/// Asserts that a chain resolves synchronously with the expected value.
#[macro_export]
macro_rules! assert_value {
    ($deferred:expr, $expected:expr) => {
        match $crate::testing::outcome_of(&$deferred) {
            Some($crate::Outcome::Value(value)) => assert_eq!(value, $expected),
            Some($crate::Outcome::Issue(issue)) => panic!(
                "expected a value, resolved with issue kind {}",
                $crate::Issue::kind(&issue)
            ),
            None => panic!("expected a value, chain is still pending"),
        }
    };
}

/// Asserts that a chain resolves synchronously with an issue of the given
/// kind.
#[macro_export]
macro_rules! assert_issue {
    ($deferred:expr, $kind:expr) => {
        match $crate::testing::outcome_of(&$deferred) {
            Some($crate::Outcome::Issue(issue)) => {
                assert_eq!($crate::Issue::kind(&issue), $kind)
            }
            Some($crate::Outcome::Value(_)) => {
                panic!("expected an issue, resolved with a value")
            }
            None => panic!("expected an issue, chain is still pending"),
        }
    };
}

/// Property-testing strategies, available with the `proptest` feature.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::deferred::Outcome;

    /// Strategy producing either channel of an [`Outcome`].
    pub fn outcome<V, I>(
        values: impl Strategy<Value = V>,
        issues: impl Strategy<Value = I>,
    ) -> impl Strategy<Value = Outcome<V, I>>
    where
        V: std::fmt::Debug,
        I: std::fmt::Debug,
    {
        prop_oneof![
            values.prop_map(Outcome::Value),
            issues.prop_map(Outcome::Issue),
        ]
    }
}
