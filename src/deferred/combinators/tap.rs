//! Tap combinator - side effect on the value channel.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::deferred::resolve::{Outcome, Resolve};
use crate::deferred::trait_def::Deferred;
use crate::issue::UnexpectedIssue;

/// Runs a side effect against the resolved value and forwards the value
/// downstream unchanged.
///
/// "Unchanged" refers to the value, not to timing: the effect runs inline on
/// the single cooperative thread before the value moves on. A panicking
/// effect resolves the chain with an [`UnexpectedIssue`] and the value is
/// not forwarded.
pub struct Tap<Inner, F> {
    inner: Inner,
    effect: F,
}

impl<Inner, F> Tap<Inner, F> {
    pub(crate) fn new(inner: Inner, effect: F) -> Self {
        Self { inner, effect }
    }
}

impl<Inner, F> std::fmt::Debug for Tap<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tap")
            .field("inner", &"<deferred>")
            .field("effect", &"<function>")
            .finish()
    }
}

impl<Inner, F> Deferred for Tap<Inner, F>
where
    Inner: Deferred,
    F: Fn(&Inner::Value) + Clone + 'static,
    Inner::Issue: From<UnexpectedIssue>,
{
    type Value = Inner::Value;
    type Issue = Inner::Issue;

    fn subscribe(&self, resolve: Resolve<Inner::Value, Inner::Issue>) {
        let effect = self.effect.clone();

        self.inner.subscribe(Resolve::new(move |outcome| match outcome {
            Outcome::Issue(issue) => resolve.issue(issue),
            Outcome::Value(value) => {
                match catch_unwind(AssertUnwindSafe(|| effect(&value))) {
                    Ok(()) => resolve.value(value),
                    Err(payload) => resolve.issue(UnexpectedIssue::from_panic(payload).into()),
                }
            }
        }));
    }
}
