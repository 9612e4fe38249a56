//! Deferred trait definition - the two-channel deferred computation.

use crate::deferred::resolve::Resolve;
use crate::issue::Issue;

/// A deferred computation that resolves once per subscription with either a
/// value or a tagged issue.
///
/// Nothing runs at composition time: combinators wrap the receiver in a new
/// concrete type, and only a terminal call
/// ([`run`](crate::DeferredExt::run)/[`run_issue`](crate::DeferredExt::run_issue))
/// walks the chain. Subscription takes `&self`, so the same chain value can
/// be subscribed repeatedly and the underlying producer re-executes each
/// time; a `Deferred` is a lazy, repeatable task, not a cached promise, and
/// side effects inside the chain repeat per subscription by design.
///
/// Within one subscription, stages run in composition order, value-first,
/// issue-short-circuiting: the first issue skips every later `and_then`
/// stage and travels untouched until a `recover` stage claims it.
///
/// # Example
///
/// ```
/// use augury::prelude::*;
///
/// let chain = pure::<_, UnexpectedIssue>(21).map(|n| n * 2);
/// chain.run(|_| panic!("no issue expected"), |n| assert_eq!(n, 42));
/// ```
pub trait Deferred {
    /// The type carried on the value channel.
    type Value: 'static;

    /// The closed issue union carried on the issue channel.
    type Issue: Issue + 'static;

    /// Start one execution of this computation.
    ///
    /// A well-formed implementation eventually consumes `resolve` exactly
    /// once, either synchronously within this call or later from an external
    /// callback.
    fn subscribe(&self, resolve: Resolve<Self::Value, Self::Issue>);
}

impl<D: Deferred + ?Sized> Deferred for &D {
    type Value = D::Value;
    type Issue = D::Issue;

    fn subscribe(&self, resolve: Resolve<Self::Value, Self::Issue>) {
        (**self).subscribe(resolve);
    }
}

impl<D: Deferred + ?Sized> Deferred for Box<D> {
    type Value = D::Value;
    type Issue = D::Issue;

    fn subscribe(&self, resolve: Resolve<Self::Value, Self::Issue>) {
        (**self).subscribe(resolve);
    }
}

impl<D: Deferred + ?Sized> Deferred for std::rc::Rc<D> {
    type Value = D::Value;
    type Issue = D::Issue;

    fn subscribe(&self, resolve: Resolve<Self::Value, Self::Issue>) {
        (**self).subscribe(resolve);
    }
}
