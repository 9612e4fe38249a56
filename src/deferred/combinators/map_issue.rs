//! MapIssue combinator - convert the issue union.

use crate::deferred::resolve::{Outcome, Resolve};
use crate::deferred::trait_def::Deferred;
use crate::issue::Issue;

/// Converts the issue union, usually to widen a leaf's union into the
/// chain's, enabling `and_then` across stages with different unions.
///
/// The conversion runs outside the panic boundary: it is type plumbing, not
/// domain logic, and the usual argument is a generated `From` impl
/// (`.map_issue(AppIssue::from)`).
pub struct MapIssue<Inner, F> {
    inner: Inner,
    update: F,
}

impl<Inner, F> MapIssue<Inner, F> {
    pub(crate) fn new(inner: Inner, update: F) -> Self {
        Self { inner, update }
    }
}

impl<Inner, F> std::fmt::Debug for MapIssue<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapIssue")
            .field("inner", &"<deferred>")
            .field("update", &"<function>")
            .finish()
    }
}

impl<Inner, F, NewIssue> Deferred for MapIssue<Inner, F>
where
    Inner: Deferred,
    F: Fn(Inner::Issue) -> NewIssue + Clone + 'static,
    NewIssue: Issue + 'static,
{
    type Value = Inner::Value;
    type Issue = NewIssue;

    fn subscribe(&self, resolve: Resolve<Inner::Value, NewIssue>) {
        let update = self.update.clone();

        self.inner.subscribe(Resolve::new(move |outcome| match outcome {
            Outcome::Value(value) => resolve.value(value),
            Outcome::Issue(issue) => resolve.issue(update(issue)),
        }));
    }
}
