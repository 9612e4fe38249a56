//! Fail combinator - an immediately resolving issue.

use std::marker::PhantomData;

use crate::deferred::resolve::Resolve;
use crate::deferred::trait_def::Deferred;
use crate::issue::Issue;

/// A deferred computation that resolves synchronously on the issue channel.
pub struct Fail<V, I> {
    issue: I,
    _value: PhantomData<fn() -> V>,
}

impl<V, I> Fail<V, I> {
    pub(crate) fn new(issue: I) -> Self {
        Self {
            issue,
            _value: PhantomData,
        }
    }
}

impl<V, I> std::fmt::Debug for Fail<V, I>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fail").field("issue", &self.issue).finish()
    }
}

impl<V, I> Deferred for Fail<V, I>
where
    V: 'static,
    I: Issue + Clone + 'static,
{
    type Value = V;
    type Issue = I;

    fn subscribe(&self, resolve: Resolve<V, I>) {
        resolve.issue(self.issue.clone());
    }
}
