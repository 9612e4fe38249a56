//! Tracing support for deferred chains.
//!
//! Feature-gated behind `tracing`. Wire a subscriber as usual, e.g. with
//! `tracing_subscriber::fmt().init()`, then label the stages worth watching:
//!
//! ```rust,ignore
//! use augury::prelude::*;
//! use augury::deferred::tracing::DeferredTracingExt;
//!
//! tracing_subscriber::fmt().init();
//!
//! load_profile(id)
//!     .traced("load_profile")
//!     .run_issue(report);
//! ```

use crate::deferred::resolve::{Outcome, Resolve};
use crate::deferred::trait_def::Deferred;
use crate::issue::Issue;

/// A deferred computation that logs its subscription and resolution.
///
/// Created by [`DeferredTracingExt::traced`]. Events carry the chain label
/// and, for issues, the discriminant; payloads are never logged.
#[derive(Debug)]
pub struct Traced<Inner> {
    inner: Inner,
    label: &'static str,
}

impl<Inner: Deferred> Deferred for Traced<Inner> {
    type Value = Inner::Value;
    type Issue = Inner::Issue;

    fn subscribe(&self, resolve: Resolve<Inner::Value, Inner::Issue>) {
        let label = self.label;
        tracing::debug!(target: "augury", chain = label, "subscribed");

        self.inner.subscribe(Resolve::new(
            move |outcome: Outcome<Inner::Value, Inner::Issue>| {
                match &outcome {
                    Outcome::Value(_) => {
                        tracing::debug!(target: "augury", chain = label, "resolved with value");
                    }
                    Outcome::Issue(issue) => {
                        tracing::debug!(
                            target: "augury",
                            chain = label,
                            kind = issue.kind(),
                            "resolved with issue"
                        );
                    }
                }
                resolve.deliver(outcome);
            },
        ));
    }
}

/// Extension trait adding [`traced`](DeferredTracingExt::traced) to every
/// deferred computation.
pub trait DeferredTracingExt: Deferred + Sized {
    /// Label this stage and log its subscription and resolution at debug
    /// level.
    fn traced(self, label: &'static str) -> Traced<Self> {
        Traced { inner: self, label }
    }
}

impl<D: Deferred + Sized> DeferredTracingExt for D {}
