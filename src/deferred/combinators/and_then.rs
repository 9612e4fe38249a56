//! AndThen combinator - chains dependent computations.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::deferred::resolve::{Outcome, Resolve};
use crate::deferred::trait_def::Deferred;
use crate::issue::UnexpectedIssue;

/// Sequencing combinator: run the receiver, then feed its value into `update`
/// and adopt the resulting computation.
///
/// Issues from the receiver are forwarded unchanged and the update is never
/// invoked for them. A panic inside `update` is caught and redirected to the
/// issue channel as an [`UnexpectedIssue`].
///
/// The chained computation must carry the same issue union. Widen with
/// [`map_issue`](crate::DeferredExt::map_issue) before chaining when two
/// stages declare different unions:
///
/// ```rust,ignore
/// read_config(path)                       // Issue = ReadFileIssue
///     .map_issue(AppIssue::from)          // Issue = AppIssue
///     .and_then(|cfg| connect(cfg))       // Issue = AppIssue
/// ```
pub struct AndThen<Inner, F> {
    inner: Inner,
    update: F,
}

impl<Inner, F> AndThen<Inner, F> {
    pub(crate) fn new(inner: Inner, update: F) -> Self {
        Self { inner, update }
    }
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<deferred>")
            .field("update", &"<function>")
            .finish()
    }
}

impl<Inner, F, Next> Deferred for AndThen<Inner, F>
where
    Inner: Deferred,
    Next: Deferred<Issue = Inner::Issue> + 'static,
    F: Fn(Inner::Value) -> Next + Clone + 'static,
    Inner::Issue: From<UnexpectedIssue>,
{
    type Value = Next::Value;
    type Issue = Inner::Issue;

    fn subscribe(&self, resolve: Resolve<Next::Value, Inner::Issue>) {
        let update = self.update.clone();

        self.inner.subscribe(Resolve::new(move |outcome| match outcome {
            Outcome::Issue(issue) => resolve.issue(issue),
            Outcome::Value(value) => {
                match catch_unwind(AssertUnwindSafe(|| update(value))) {
                    Ok(next) => next.subscribe(resolve),
                    Err(payload) => resolve.issue(UnexpectedIssue::from_panic(payload).into()),
                }
            }
        }));
    }
}
