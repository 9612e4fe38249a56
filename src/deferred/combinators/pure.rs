//! Pure combinator - an immediately resolving value.

use std::marker::PhantomData;

use crate::deferred::resolve::Resolve;
use crate::deferred::trait_def::Deferred;
use crate::issue::Issue;

/// A deferred computation that resolves synchronously with a value and never
/// raises an issue of its own.
///
/// The issue type parameter only fixes the union the value slots into, so the
/// result chains with the rest of a pipeline:
///
/// ```
/// use augury::prelude::*;
///
/// let chain = pure::<_, UnexpectedIssue>(21).and_then(|n| pure(n * 2));
/// chain.run(|_| unreachable!(), |n| assert_eq!(n, 42));
/// ```
pub struct Pure<V, I> {
    value: V,
    _issue: PhantomData<fn() -> I>,
}

impl<V, I> Pure<V, I> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            _issue: PhantomData,
        }
    }
}

impl<V, I> std::fmt::Debug for Pure<V, I>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pure").field("value", &self.value).finish()
    }
}

impl<V, I> Deferred for Pure<V, I>
where
    V: Clone + 'static,
    I: Issue + 'static,
{
    type Value = V;
    type Issue = I;

    fn subscribe(&self, resolve: Resolve<V, I>) {
        resolve.value(self.value.clone());
    }
}
