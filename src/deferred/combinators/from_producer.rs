//! FromProducer combinator - the leaf constructor over a raw producer.

use std::marker::PhantomData;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::deferred::resolve::Resolve;
use crate::deferred::trait_def::Deferred;
use crate::issue::{Issue, UnexpectedIssue};

/// A leaf computation wrapping a raw producer in the panic boundary.
///
/// The producer runs once per subscription and receives a fresh
/// [`Resolve`] handle. A panic raised before the producer resolves is caught
/// and redirected to the issue channel as an [`UnexpectedIssue`]; it never
/// escapes to the subscriber. This boundary is the sanctioned origin of
/// `UnexpectedIssue` values, which is why the issue union must carry a
/// `From<UnexpectedIssue>` conversion.
pub struct FromProducer<P, V, I> {
    producer: P,
    _marker: PhantomData<fn() -> (V, I)>,
}

impl<P, V, I> FromProducer<P, V, I> {
    pub(crate) fn new(producer: P) -> Self {
        Self {
            producer,
            _marker: PhantomData,
        }
    }
}

impl<P, V, I> std::fmt::Debug for FromProducer<P, V, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromProducer")
            .field("producer", &"<function>")
            .finish()
    }
}

impl<P, V, I> Deferred for FromProducer<P, V, I>
where
    P: Fn(Resolve<V, I>),
    V: 'static,
    I: Issue + From<UnexpectedIssue> + 'static,
{
    type Value = V;
    type Issue = I;

    fn subscribe(&self, resolve: Resolve<V, I>) {
        let boundary = resolve.alias();
        let run = catch_unwind(AssertUnwindSafe(|| (self.producer)(resolve)));

        if let Err(payload) = run {
            // A producer that resolved and then panicked keeps its
            // resolution; the alias is inert once the slot is spent.
            boundary.issue(UnexpectedIssue::from_panic(payload).into());
        }
    }
}
