//! Bridging into the standard async ecosystem.

use futures::channel::oneshot;

use crate::deferred::resolve::Resolve;
use crate::deferred::trait_def::Deferred;
use crate::issue::UnexpectedIssue;

/// Adapts a deferred computation into a standard [`std::future::Future`].
///
/// Implemented for every [`Deferred`]. The subscription starts eagerly when
/// the method is called; the returned future merely awaits the resolution
/// through a oneshot channel. Because a `std::future::Future` is single-shot,
/// each bridge call consumes one subscription; call again to re-run the
/// chain.
pub trait IntoStdFuture: Deferred {
    /// Start one subscription and await its outcome as a `Result`.
    ///
    /// A producer that drops its [`Resolve`](crate::Resolve) handle without
    /// resolving surfaces as an [`UnexpectedIssue`] rather than hanging the
    /// future forever.
    ///
    /// ```
    /// use augury::prelude::*;
    /// use augury::deferred::compat::IntoStdFuture;
    ///
    /// let chain = pure::<_, UnexpectedIssue>(21).map(|n| n * 2);
    /// let outcome = futures::executor::block_on(chain.into_std_future());
    /// assert_eq!(outcome.map_err(|issue| issue.to_string()), Ok(42));
    /// ```
    fn into_std_future(
        &self,
    ) -> impl std::future::Future<Output = Result<Self::Value, Self::Issue>>
    where
        Self::Issue: From<UnexpectedIssue>,
    {
        let (sender, receiver) = oneshot::channel();

        self.subscribe(Resolve::new(move |outcome| {
            let _ = sender.send(outcome.into_result());
        }));

        async move {
            match receiver.await {
                Ok(result) => result,
                Err(oneshot::Canceled) => {
                    Err(UnexpectedIssue::new("producer dropped without resolving").into())
                }
            }
        }
    }
}

impl<D: Deferred> IntoStdFuture for D {}
