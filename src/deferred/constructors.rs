//! Constructor functions for building leaf computations.

use crate::deferred::combinators::{Fail, FromProducer, FromResult, Pure};
use crate::deferred::resolve::Resolve;
use crate::issue::{Issue, UnexpectedIssue};

/// A computation resolving immediately with `value` on every subscription.
///
/// ```
/// use augury::prelude::*;
///
/// let chain = pure::<_, UnexpectedIssue>(42);
/// chain.run(|_| unreachable!(), |n| assert_eq!(n, 42));
/// ```
pub fn pure<V, I>(value: V) -> Pure<V, I>
where
    V: Clone + 'static,
    I: Issue + 'static,
{
    Pure::new(value)
}

/// A computation resolving immediately with `issue` on every subscription.
pub fn fail<V, I>(issue: I) -> Fail<V, I>
where
    V: 'static,
    I: Issue + Clone + 'static,
{
    Fail::new(issue)
}

/// The leaf entry point: wrap a raw producer in the panic boundary.
///
/// The producer runs once per subscription and must eventually consume the
/// [`Resolve`] handle it receives; the `From<UnexpectedIssue>` bound is how
/// the boundary feeds a caught panic back into the union.
///
/// ```
/// use augury::prelude::*;
///
/// let chain = from_producer(|resolve: Resolve<i32, UnexpectedIssue>| {
///     resolve.value(7);
/// });
/// chain.run(|_| unreachable!(), |n| assert_eq!(n, 7));
/// ```
pub fn from_producer<P, V, I>(producer: P) -> FromProducer<P, V, I>
where
    P: Fn(Resolve<V, I>),
    V: 'static,
    I: Issue + From<UnexpectedIssue> + 'static,
{
    FromProducer::new(producer)
}

/// Lift an already-computed `Result` into a computation.
pub fn from_result<V, I>(result: Result<V, I>) -> FromResult<V, I>
where
    V: Clone + 'static,
    I: Issue + Clone + 'static,
{
    FromResult::new(result)
}
