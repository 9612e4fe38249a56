//! Type-erased deferred computations.

use std::fmt;
use std::rc::Rc;

use crate::deferred::resolve::Resolve;
use crate::deferred::trait_def::Deferred;
use crate::issue::Issue;

/// A type-erased, cheaply cloneable deferred computation.
///
/// Created by [`boxed`](crate::DeferredExt::boxed). Erasure shares the chain
/// behind an `Rc`, so cloning hands out another handle onto the same
/// producer; each subscription still re-executes it.
pub struct BoxedDeferred<V, I>
where
    V: 'static,
    I: Issue + 'static,
{
    inner: Rc<dyn Deferred<Value = V, Issue = I>>,
}

impl<V, I> BoxedDeferred<V, I>
where
    V: 'static,
    I: Issue + 'static,
{
    pub(crate) fn new(deferred: impl Deferred<Value = V, Issue = I> + 'static) -> Self {
        Self {
            inner: Rc::new(deferred),
        }
    }
}

impl<V, I> Clone for BoxedDeferred<V, I>
where
    V: 'static,
    I: Issue + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V, I> fmt::Debug for BoxedDeferred<V, I>
where
    V: 'static,
    I: Issue + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedDeferred").finish_non_exhaustive()
    }
}

impl<V, I> Deferred for BoxedDeferred<V, I>
where
    V: 'static,
    I: Issue + 'static,
{
    type Value = V;
    type Issue = I;

    fn subscribe(&self, resolve: Resolve<V, I>) {
        self.inner.subscribe(resolve);
    }
}
