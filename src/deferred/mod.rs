//! The deferred value carrier: a two-channel, single-resolution computation.
//!
//! A [`Deferred`] is a lazy, repeatable task. Composing one allocates
//! nothing and runs nothing; combinators nest concrete types
//! ([`AndThen`](combinators::AndThen), [`Recover`](combinators::Recover), …)
//! around the receiver, and only a terminal [`run`](DeferredExt::run) call
//! subscribes the chain. Each subscription re-invokes the underlying
//! producer, so side effects inside the chain repeat per terminal call -
//! deliberately: a chain value describes work, it is not a cache of its
//! result.
//!
//! # The two channels
//!
//! A subscription resolves exactly once, on the value channel or the issue
//! channel. The [`Resolve`] handle given to a leaf producer is consumed by
//! whichever of its two methods fires, so double resolution cannot be
//! expressed. Issues are tagged values (see [`crate::issue`]); panics at the
//! producer, `and_then`, `map`, and `tap` boundaries are caught and
//! redirected to the issue channel as
//! [`UnexpectedIssue`](crate::UnexpectedIssue)s.
//!
//! # Scheduling
//!
//! Everything here is single-threaded and callback-driven. A combinator
//! either calls its continuation synchronously or returns after the leaf
//! producer has parked the [`Resolve`] handle with an external effect;
//! resumption happens when that effect's callback fires. The core never
//! retries, never times out, and imposes no cancellation semantics -
//! cooperating values (for example an abort flag) travel through the value
//! channel like any other data.

pub mod boxed;
pub mod combinators;
pub mod compat;
pub mod constructors;
pub mod ext;
pub mod prelude;
mod resolve;
#[cfg(feature = "tracing")]
pub mod tracing;
mod trait_def;

pub use boxed::BoxedDeferred;
pub use combinators::{
    AndThen, Fail, FromProducer, FromResult, Map, MapIssue, Pure, Recover, RecoverKind, Tap,
};
pub use compat::IntoStdFuture;
pub use constructors::{fail, from_producer, from_result, pure};
pub use ext::DeferredExt;
pub use resolve::{Outcome, Resolve};
pub use trait_def::Deferred;

#[cfg(feature = "tracing")]
pub use tracing::{DeferredTracingExt, Traced};

#[cfg(test)]
mod tests;
