//! Prelude for the deferred module.
//!
//! ```
//! use augury::prelude::*;
//!
//! let chain = pure::<_, UnexpectedIssue>(20)
//!     .map(|n| n + 1)
//!     .and_then(|n| pure(n * 2));
//!
//! chain.run(|_| unreachable!(), |n| assert_eq!(n, 42));
//! ```

// Traits
pub use crate::deferred::ext::DeferredExt;
pub use crate::deferred::trait_def::Deferred;

// Resolution protocol
pub use crate::deferred::resolve::{Outcome, Resolve};

// Boxing
pub use crate::deferred::boxed::BoxedDeferred;

// Combinator types (for signatures; `impl Deferred` usually suffices)
pub use crate::deferred::combinators::{
    AndThen, Fail, FromProducer, FromResult, Map, MapIssue, Pure, Recover, RecoverKind, Tap,
};

// Constructors
pub use crate::deferred::constructors::{fail, from_producer, from_result, pure};

// Async bridge
pub use crate::deferred::compat::IntoStdFuture;

// Tracing (when the tracing feature is enabled)
#[cfg(feature = "tracing")]
pub use crate::deferred::tracing::DeferredTracingExt;
