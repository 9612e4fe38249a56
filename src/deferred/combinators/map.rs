//! Map combinator - transform the value channel.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::deferred::resolve::{Outcome, Resolve};
use crate::deferred::trait_def::Deferred;
use crate::issue::UnexpectedIssue;

/// Transforms the resolved value; issues pass through untouched.
///
/// A panic inside the transform is caught and redirected to the issue
/// channel as an [`UnexpectedIssue`].
pub struct Map<Inner, F> {
    inner: Inner,
    update: F,
}

impl<Inner, F> Map<Inner, F> {
    pub(crate) fn new(inner: Inner, update: F) -> Self {
        Self { inner, update }
    }
}

impl<Inner, F> std::fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<deferred>")
            .field("update", &"<function>")
            .finish()
    }
}

impl<Inner, F, NewValue> Deferred for Map<Inner, F>
where
    Inner: Deferred,
    F: Fn(Inner::Value) -> NewValue + Clone + 'static,
    NewValue: 'static,
    Inner::Issue: From<UnexpectedIssue>,
{
    type Value = NewValue;
    type Issue = Inner::Issue;

    fn subscribe(&self, resolve: Resolve<NewValue, Inner::Issue>) {
        let update = self.update.clone();

        self.inner.subscribe(Resolve::new(move |outcome| match outcome {
            Outcome::Issue(issue) => resolve.issue(issue),
            Outcome::Value(value) => {
                match catch_unwind(AssertUnwindSafe(|| update(value))) {
                    Ok(updated) => resolve.value(updated),
                    Err(payload) => resolve.issue(UnexpectedIssue::from_panic(payload).into()),
                }
            }
        }));
    }
}
