//! Extension trait providing combinator methods for all deferred values.

use crate::deferred::boxed::BoxedDeferred;
use crate::deferred::combinators::{AndThen, Map, MapIssue, Recover, RecoverKind, Tap};
use crate::deferred::resolve::{Outcome, Resolve};
use crate::deferred::trait_def::Deferred;
use crate::issue::{Issue, UnexpectedIssue};

/// Combinator methods, implemented for every [`Deferred`].
///
/// Composition methods take `self` and return a new concrete type wrapping
/// the receiver; nothing executes until one of the terminal methods
/// ([`run`](DeferredExt::run), [`run_issue`](DeferredExt::run_issue))
/// subscribes the chain.
pub trait DeferredExt: Deferred + Sized {
    /// Transform the resolved value. Panics in `update` become
    /// [`UnexpectedIssue`]s.
    fn map<NewValue, F>(self, update: F) -> Map<Self, F>
    where
        F: Fn(Self::Value) -> NewValue + Clone + 'static,
        NewValue: 'static,
        Self::Issue: From<UnexpectedIssue>,
    {
        Map::new(self, update)
    }

    /// Convert the issue union, usually via a generated `From` impl:
    ///
    /// ```rust,ignore
    /// read_config(path)
    ///     .map_issue(AppIssue::from)
    ///     .and_then(|cfg| connect(cfg))
    /// ```
    fn map_issue<NewIssue, F>(self, update: F) -> MapIssue<Self, F>
    where
        F: Fn(Self::Issue) -> NewIssue + Clone + 'static,
        NewIssue: Issue + 'static,
    {
        MapIssue::new(self, update)
    }

    /// Chain a dependent computation.
    ///
    /// On a value, `update` builds the next computation and its outcome is
    /// forwarded downstream; on an issue, the issue short-circuits past this
    /// stage unchanged. Panics in `update` become [`UnexpectedIssue`]s.
    fn and_then<Next, F>(self, update: F) -> AndThen<Self, F>
    where
        Next: Deferred<Issue = Self::Issue> + 'static,
        F: Fn(Self::Value) -> Next + Clone + 'static,
        Self::Issue: From<UnexpectedIssue>,
    {
        AndThen::new(self, update)
    }

    /// Recover one variant of the issue union, narrowing the rest.
    ///
    /// See [`Recover`] for the selector contract.
    fn recover<Recovered, Next, S, F>(self, select: S, remediation: F) -> Recover<Self, S, F>
    where
        S: Fn(Self::Issue) -> Result<Recovered, Next::Issue> + Clone + 'static,
        F: Fn(Recovered) -> Next + Clone + 'static,
        Next: Deferred<Value = Self::Value> + 'static,
        Recovered: 'static,
    {
        Recover::new(self, select, remediation)
    }

    /// Recover by discriminant string within the same issue union.
    ///
    /// Only issues whose [`kind`](Issue::kind) equals `kind` reach the
    /// remediation; every other variant passes through untouched.
    fn recover_kind<Next, F>(self, kind: &'static str, remediation: F) -> RecoverKind<Self, F>
    where
        F: Fn(Self::Issue) -> Next + Clone + 'static,
        Next: Deferred<Value = Self::Value, Issue = Self::Issue> + 'static,
    {
        RecoverKind::new(self, kind, remediation)
    }

    /// Run a side effect against the value without altering it.
    ///
    /// A panicking effect resolves the chain with an [`UnexpectedIssue`] and
    /// the value is not forwarded.
    fn tap<F>(self, effect: F) -> Tap<Self, F>
    where
        F: Fn(&Self::Value) + Clone + 'static,
        Self::Issue: From<UnexpectedIssue>,
    {
        Tap::new(self, effect)
    }

    /// Erase the concrete combinator type.
    ///
    /// Needed for collections of heterogeneous chains, recursion, and match
    /// arms returning different combinator stacks. The erased value is
    /// cheaply cloneable and still re-runnable.
    fn boxed(self) -> BoxedDeferred<Self::Value, Self::Issue>
    where
        Self: 'static,
    {
        BoxedDeferred::new(self)
    }

    /// Terminal operation: subscribe the chain with both handlers.
    ///
    /// The issue handler comes first and is mandatory; a chain without an
    /// issue consumer is a defect, not a default. Each call re-executes the
    /// full chain.
    fn run<FI, FV>(&self, issue_handler: FI, value_handler: FV)
    where
        FI: FnOnce(Self::Issue) + 'static,
        FV: FnOnce(Self::Value) + 'static,
    {
        self.subscribe(Resolve::new(move |outcome| match outcome {
            Outcome::Value(value) => value_handler(value),
            Outcome::Issue(issue) => issue_handler(issue),
        }));
    }

    /// Terminal operation handling issues only; values are discarded.
    fn run_issue<FI>(&self, issue_handler: FI)
    where
        FI: FnOnce(Self::Issue) + 'static,
    {
        self.run(issue_handler, |_| {});
    }
}

impl<D: Deferred + Sized> DeferredExt for D {}
