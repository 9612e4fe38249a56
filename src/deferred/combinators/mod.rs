//! Concrete combinator types.
//!
//! Every combinator is its own struct implementing
//! [`Deferred`](crate::Deferred); composition nests these types rather than
//! allocating, and [`boxed`](crate::DeferredExt::boxed) opts into type
//! erasure when a single named type is needed.

mod and_then;
mod fail;
mod from_producer;
mod from_result;
mod map;
mod map_issue;
mod pure;
mod recover;
mod tap;

pub use and_then::AndThen;
pub use fail::Fail;
pub use from_producer::FromProducer;
pub use from_result::FromResult;
pub use map::Map;
pub use map_issue::MapIssue;
pub use pure::Pure;
pub use recover::{Recover, RecoverKind};
pub use tap::Tap;
