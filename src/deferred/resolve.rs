//! Resolution protocol: the `Outcome` sum and the single-use `Resolve` handle.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// The result of one subscription: exactly one value or one issue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<V, I> {
    /// The chain resolved on the value channel.
    Value(V),
    /// The chain resolved on the issue channel.
    Issue(I),
}

impl<V, I> Outcome<V, I> {
    /// Convert into the standard library's result sum.
    pub fn into_result(self) -> Result<V, I> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Issue(issue) => Err(issue),
        }
    }

    /// True when this outcome is on the value channel.
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// True when this outcome is on the issue channel.
    pub fn is_issue(&self) -> bool {
        matches!(self, Outcome::Issue(_))
    }
}

type Continuation<V, I> = Box<dyn FnOnce(Outcome<V, I>)>;

/// Single-use resolution handle handed to a producer.
///
/// This is the two-argument `(emit_value, emit_issue)` continuation of the
/// subscription protocol folded into one handle: a producer calls exactly one
/// of [`value`](Resolve::value) or [`issue`](Resolve::issue), and both consume
/// the handle, so double resolution is unrepresentable. A producer that never
/// resolves leaves the subscription pending, which is legitimate for leaves
/// waiting on an external event.
///
/// The handle is `'static` and may be moved into a callback that fires after
/// `subscribe` has returned; that is how leaf adapters resume a chain
/// asynchronously.
pub struct Resolve<V, I> {
    slot: Rc<Cell<Option<Continuation<V, I>>>>,
}

impl<V: 'static, I: 'static> Resolve<V, I> {
    /// Wrap a continuation receiving the final [`Outcome`].
    pub fn new(continuation: impl FnOnce(Outcome<V, I>) + 'static) -> Self {
        Self {
            slot: Rc::new(Cell::new(Some(Box::new(continuation)))),
        }
    }

    /// Resolve on the value channel.
    pub fn value(self, value: V) {
        self.deliver(Outcome::Value(value));
    }

    /// Resolve on the issue channel.
    pub fn issue(self, issue: I) {
        self.deliver(Outcome::Issue(issue));
    }

    /// Forward an already-formed outcome to the continuation.
    pub(crate) fn deliver(self, outcome: Outcome<V, I>) {
        if let Some(continuation) = self.slot.take() {
            continuation(outcome);
        }
    }

    /// Second handle onto the same resolution slot.
    ///
    /// Used by the panic boundary in `FromProducer`: the alias fires only if
    /// the producer panicked before resolving, so a resolution that was
    /// already delivered always stands.
    pub(crate) fn alias(&self) -> Resolve<V, I> {
        Resolve {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<V, I> fmt::Debug for Resolve<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolve").finish_non_exhaustive()
    }
}
