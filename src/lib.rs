//! # Augury
//!
//! > *"A deferred value is a promise you can interrogate"*
//!
//! A Rust library for typed, composable deferred computations with two
//! resolution channels.
//!
//! ## Philosophy
//!
//! **Augury** keeps failure in the type system all the way to the edge:
//! - **Value channel** = the result a chain was built to produce
//! - **Issue channel** = a closed union of discriminated failure values
//!
//! A chain is a lazy description. Nothing runs until a terminal call
//! subscribes, each subscription re-runs the chain from its leaf, and no
//! panic inside a stage ever reaches the caller: containment boundaries
//! redirect it to the issue channel as an
//! [`UnexpectedIssue`].
//!
//! ## Quick Example
//!
//! ```rust
//! use augury::prelude::*;
//! use augury::{issue_tag, issue_union};
//!
//! #[derive(Debug, Clone)]
//! struct MissingUserIssue {
//!     name: String,
//! }
//!
//! issue_tag!(MissingUserIssue, "MissingUserIssue");
//!
//! issue_union! {
//!     enum LoadUserIssue {
//!         Missing(MissingUserIssue),
//!         Unexpected(UnexpectedIssue),
//!     }
//! }
//!
//! fn load_user(name: &'static str) -> impl Deferred<Value = String, Issue = LoadUserIssue> {
//!     from_producer(move |resolve: Resolve<String, LoadUserIssue>| {
//!         if name == "ada" {
//!             resolve.value("Ada Lovelace".to_string());
//!         } else {
//!             resolve.issue(MissingUserIssue { name: name.to_string() }.into());
//!         }
//!     })
//! }
//!
//! load_user("ada")
//!     .map(|full| full.to_uppercase())
//!     .run(
//!         |issue| eprintln!("failed: {}", issue.kind()),
//!         |full| println!("loaded {full}"),
//!     );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deferred;
pub mod fs;
pub mod issue;
pub mod matcher;
pub mod state;
pub mod stdio;
pub mod syslog;
pub mod testing;
pub mod text;
pub mod time;

// Re-exports
pub use deferred::{Deferred, DeferredExt, Outcome, Resolve};
pub use issue::{Issue, UnexpectedIssue};
pub use matcher::Matcher;
pub use state::{State, Subscription};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::deferred::prelude::*;
    pub use crate::issue::{Issue, UnexpectedIssue};
    pub use crate::matcher::Matcher;
    pub use crate::state::{State, Subscription};
}
