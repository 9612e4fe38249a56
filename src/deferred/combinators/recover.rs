//! Recover combinators - selective, narrowing issue recovery.

use crate::deferred::resolve::{Outcome, Resolve};
use crate::deferred::trait_def::Deferred;
use crate::issue::Issue;

/// Recovers one variant of the issue union and narrows the rest.
///
/// The selector splits an incoming issue: `Ok(recovered)` hands the narrowed
/// variant to the remediation, whose computation is adopted wholesale;
/// `Err(forwarded)` passes every other variant through, already converted
/// into the output union. Because the output union is whatever the
/// remediation declares, the recovered variant can be subtracted from it,
/// which is the enum spelling of the type-level set-difference:
///
/// ```rust,ignore
/// load_profile(id)                       // Issue = LoadProfileIssue
///     .recover(
///         |issue| match issue {
///             LoadProfileIssue::Missing(missing) => Ok(missing),
///             LoadProfileIssue::Unexpected(other) => Err(other),
///         },
///         |_missing| pure(Profile::default()),
///     )                                  // Issue = UnexpectedIssue
/// ```
///
/// Values pass through untouched, and remediation runs outside the panic
/// boundary: a recovery path that itself blows up is a programming error
/// surfaced loudly rather than silently re-wrapped.
pub struct Recover<Inner, S, F> {
    inner: Inner,
    select: S,
    remediation: F,
}

impl<Inner, S, F> Recover<Inner, S, F> {
    pub(crate) fn new(inner: Inner, select: S, remediation: F) -> Self {
        Self {
            inner,
            select,
            remediation,
        }
    }
}

impl<Inner, S, F> std::fmt::Debug for Recover<Inner, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recover")
            .field("inner", &"<deferred>")
            .field("select", &"<function>")
            .field("remediation", &"<function>")
            .finish()
    }
}

impl<Inner, S, F, Recovered, Next> Deferred for Recover<Inner, S, F>
where
    Inner: Deferred,
    S: Fn(Inner::Issue) -> Result<Recovered, Next::Issue> + Clone + 'static,
    F: Fn(Recovered) -> Next + Clone + 'static,
    Next: Deferred<Value = Inner::Value> + 'static,
    Recovered: 'static,
{
    type Value = Inner::Value;
    type Issue = Next::Issue;

    fn subscribe(&self, resolve: Resolve<Inner::Value, Next::Issue>) {
        let select = self.select.clone();
        let remediation = self.remediation.clone();

        self.inner.subscribe(Resolve::new(move |outcome| match outcome {
            Outcome::Value(value) => resolve.value(value),
            Outcome::Issue(issue) => match select(issue) {
                Ok(recovered) => remediation(recovered).subscribe(resolve),
                Err(forwarded) => resolve.issue(forwarded),
            },
        }));
    }
}

/// Recovers by discriminant string, keeping the issue union unchanged.
///
/// Sugar over [`Recover`] for the common case where the remediation stays
/// inside the same union: only issues whose [`kind`](Issue::kind) equals the
/// given discriminant reach the remediation; everything else is forwarded
/// unchanged.
pub struct RecoverKind<Inner, F> {
    inner: Inner,
    kind: &'static str,
    remediation: F,
}

impl<Inner, F> RecoverKind<Inner, F> {
    pub(crate) fn new(inner: Inner, kind: &'static str, remediation: F) -> Self {
        Self {
            inner,
            kind,
            remediation,
        }
    }
}

impl<Inner, F> std::fmt::Debug for RecoverKind<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoverKind")
            .field("inner", &"<deferred>")
            .field("kind", &self.kind)
            .field("remediation", &"<function>")
            .finish()
    }
}

impl<Inner, F, Next> Deferred for RecoverKind<Inner, F>
where
    Inner: Deferred,
    F: Fn(Inner::Issue) -> Next + Clone + 'static,
    Next: Deferred<Value = Inner::Value, Issue = Inner::Issue> + 'static,
{
    type Value = Inner::Value;
    type Issue = Inner::Issue;

    fn subscribe(&self, resolve: Resolve<Inner::Value, Inner::Issue>) {
        let kind = self.kind;
        let remediation = self.remediation.clone();

        self.inner.subscribe(Resolve::new(
            move |outcome: Outcome<Inner::Value, Inner::Issue>| match outcome {
                Outcome::Value(value) => resolve.value(value),
                Outcome::Issue(issue) => {
                    if issue.kind() == kind {
                        remediation(issue).subscribe(resolve);
                    } else {
                        resolve.issue(issue);
                    }
                }
            },
        ));
    }
}
