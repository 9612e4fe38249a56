//! The issue tag protocol: discriminated failure values.
//!
//! Every failure travelling through a [`Deferred`](crate::Deferred) chain is
//! an *issue*: a plain value carrying a discriminant string unique to its
//! failure mode. Concrete variants are ordinary structs tagged with
//! [`issue_tag!`]; the closed union a chain can produce is an enum-with-payload
//! declared with [`issue_union!`], which also wires up the `From` conversions
//! the combinators rely on.
//!
//! ```
//! use augury::{issue_tag, issue_union, Issue, UnexpectedIssue};
//!
//! #[derive(Debug, Clone)]
//! pub struct MissingUserIssue {
//!     pub name: String,
//! }
//!
//! issue_tag!(MissingUserIssue, "MissingUserIssue");
//!
//! issue_union! {
//!     /// Everything loading a user can go wrong with.
//!     pub enum LoadUserIssue {
//!         Missing(MissingUserIssue),
//!         Unexpected(UnexpectedIssue),
//!     }
//! }
//!
//! let issue = LoadUserIssue::from(MissingUserIssue { name: "ada".into() });
//! assert_eq!(issue.kind(), "MissingUserIssue");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// A discriminated failure value.
///
/// The discriminant returned by [`kind`](Issue::kind) must be unique within
/// any one union; [`Matcher`](crate::Matcher) dispatch and
/// [`recover_kind`](crate::DeferredExt::recover_kind) rely on that
/// uniqueness. Concrete variants expose the same string as an associated
/// `KIND` constant (see [`issue_tag!`]) so call sites never spell the literal
/// twice.
pub trait Issue {
    /// The discriminant identifying this failure variant.
    fn kind(&self) -> &'static str;
}

/// Tags a concrete issue struct with its discriminant.
///
/// Generates the `KIND` associated constant and the [`Issue`] impl that
/// returns it. The discriminant must be distinct from every other variant
/// the type will share a union with.
#[macro_export]
macro_rules! issue_tag {
    ($issue:ty, $kind:literal) => {
        impl $issue {
            /// Discriminant for this issue variant.
            pub const KIND: &'static str = $kind;
        }

        impl $crate::Issue for $issue {
            fn kind(&self) -> &'static str {
                Self::KIND
            }
        }
    };
}

/// Declares a closed issue union as an enum-with-payload.
///
/// Each variant wraps exactly one concrete issue type (each payload type may
/// appear once). The macro generates the enum, a delegating [`Issue`] impl,
/// and a `From<payload>` impl per variant so leaf producers can emit concrete
/// issues with `.into()`. Include an `UnexpectedIssue` variant in any union
/// used with the panic-containing combinators; the generated
/// `From<UnexpectedIssue>` is what lets a boundary redirect a caught panic
/// into the union.
#[macro_export]
macro_rules! issue_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident($payload:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant($payload) ),+
        }

        impl $crate::Issue for $name {
            fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant(issue) => $crate::Issue::kind(issue) ),+
                }
            }
        }

        $(
            impl ::core::convert::From<$payload> for $name {
                fn from(issue: $payload) -> Self {
                    Self::$variant(issue)
                }
            }
        )+
    };
}

/// The universal catch-all issue wrapping an unanticipated native error.
///
/// Producers and combinators never let a panic escape to the caller; the
/// boundary catches it and redirects it to the issue channel as an
/// `UnexpectedIssue`. Domain code can also construct one directly to wrap an
/// error it has no better variant for.
///
/// The wrapped error is shared, so the issue is cheaply cloneable and can sit
/// in unions lifted through [`fail`](crate::deferred::fail) or
/// [`from_result`](crate::deferred::from_result).
#[derive(Clone)]
pub struct UnexpectedIssue {
    error: Rc<dyn Error>,
}

issue_tag!(UnexpectedIssue, "UnexpectedIssue");

impl UnexpectedIssue {
    /// Wrap an arbitrary error.
    pub fn new(error: impl Into<Box<dyn Error>>) -> Self {
        Self {
            error: Rc::from(error.into()),
        }
    }

    /// Build an issue from a caught panic payload.
    ///
    /// Panic payloads raised through `panic!` with a message are `&str` or
    /// `String`; anything else gets a placeholder message.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "panic with a non-string payload".to_string()
        };

        Self::new(message)
    }

    /// The wrapped error.
    pub fn error(&self) -> &(dyn Error + 'static) {
        self.error.as_ref()
    }
}

impl fmt::Display for UnexpectedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl fmt::Debug for UnexpectedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnexpectedIssue")
            .field("error", &self.error.to_string())
            .finish()
    }
}

// Message comparison; there is no meaningful identity for a wrapped panic
// beyond what it says.
impl PartialEq for UnexpectedIssue {
    fn eq(&self, other: &Self) -> bool {
        self.error.to_string() == other.error.to_string()
    }
}
