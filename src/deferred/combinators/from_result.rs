//! FromResult combinator - lift an already-computed result.

use crate::deferred::resolve::Resolve;
use crate::deferred::trait_def::Deferred;
use crate::issue::Issue;

/// A deferred computation resolving with a pre-existing `Result`.
#[derive(Debug)]
pub struct FromResult<V, I> {
    result: Result<V, I>,
}

impl<V, I> FromResult<V, I> {
    pub(crate) fn new(result: Result<V, I>) -> Self {
        Self { result }
    }
}

impl<V, I> Deferred for FromResult<V, I>
where
    V: Clone + 'static,
    I: Issue + Clone + 'static,
{
    type Value = V;
    type Issue = I;

    fn subscribe(&self, resolve: Resolve<V, I>) {
        match &self.result {
            Ok(value) => resolve.value(value.clone()),
            Err(issue) => resolve.issue(issue.clone()),
        }
    }
}
