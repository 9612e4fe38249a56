//! Total dispatch over an issue union by discriminant.

use std::collections::HashMap;
use std::fmt;

use crate::issue::Issue;

/// Builds a total dispatcher from a discriminant-to-handler mapping.
///
/// Register one handler per discriminant the union can produce, then hand
/// [`into_handler`](Matcher::into_handler) to a terminal
/// [`run_issue`](crate::DeferredExt::run_issue) call (or dispatch directly).
/// Handlers receive the full issue and narrow it themselves; the
/// `KIND` constants generated by [`issue_tag!`](crate::issue_tag) keep the
/// keys typo-proof.
///
/// Dispatching a discriminant with no registered handler panics. That is a
/// deliberate contract, not an oversight: exhaustiveness is the call site's
/// responsibility, and a silent fallback would bury the defect.
///
/// ```
/// use augury::prelude::*;
///
/// let report = Matcher::new()
///     .on(UnexpectedIssue::KIND, |issue: UnexpectedIssue| {
///         eprintln!("unexpected: {issue}");
///     })
///     .into_handler();
///
/// fail::<i32, _>(UnexpectedIssue::new("down")).run_issue(report);
/// ```
pub struct Matcher<I, Out = ()> {
    arms: HashMap<&'static str, Box<dyn Fn(I) -> Out>>,
}

impl<I: Issue, Out> Matcher<I, Out> {
    /// An empty matcher; register arms with [`on`](Matcher::on).
    pub fn new() -> Self {
        Self {
            arms: HashMap::new(),
        }
    }

    /// Register the handler for one discriminant.
    ///
    /// # Panics
    ///
    /// Panics when the discriminant already has a handler; two arms for one
    /// kind is always a defect.
    pub fn on<F>(mut self, kind: &'static str, handler: F) -> Self
    where
        F: Fn(I) -> Out + 'static,
    {
        let previous = self.arms.insert(kind, Box::new(handler));
        assert!(
            previous.is_none(),
            "duplicate handler for issue kind: {kind}"
        );
        self
    }

    /// Dispatch one issue to its handler.
    ///
    /// # Panics
    ///
    /// Panics when no handler is registered for the issue's discriminant.
    pub fn dispatch(&self, issue: I) -> Out {
        let kind = issue.kind();
        match self.arms.get(kind) {
            Some(handler) => handler(issue),
            None => panic!("no handler for issue kind: {kind}"),
        }
    }

    /// Convert into a plain handler function for terminal calls.
    pub fn into_handler(self) -> impl Fn(I) -> Out {
        move |issue| self.dispatch(issue)
    }
}

impl<I: Issue, Out> Default for Matcher<I, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, Out> fmt::Debug for Matcher<I, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("kinds", &self.arms.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::UnexpectedIssue;
    use crate::{issue_tag, issue_union};

    #[derive(Debug, Clone, PartialEq)]
    struct MissingIssue;

    issue_tag!(MissingIssue, "MissingIssue");

    #[derive(Debug, Clone, PartialEq)]
    struct StaleIssue;

    issue_tag!(StaleIssue, "StaleIssue");

    issue_union! {
        enum CacheIssue {
            Missing(MissingIssue),
            Stale(StaleIssue),
            Unexpected(UnexpectedIssue),
        }
    }

    fn label(issue: CacheIssue) -> &'static str {
        Matcher::new()
            .on(MissingIssue::KIND, |_| "missing")
            .on(StaleIssue::KIND, |_| "stale")
            .on(UnexpectedIssue::KIND, |_| "unexpected")
            .dispatch(issue)
    }

    #[test]
    fn dispatches_by_discriminant() {
        assert_eq!(label(MissingIssue.into()), "missing");
        assert_eq!(label(StaleIssue.into()), "stale");
        assert_eq!(label(UnexpectedIssue::new("down").into()), "unexpected");
    }

    #[test]
    fn handler_receives_the_issue() {
        let matcher: Matcher<CacheIssue, String> =
            Matcher::new().on(UnexpectedIssue::KIND, |issue: CacheIssue| {
                format!("wrapped: {}", issue.kind())
            });
        assert_eq!(
            matcher.dispatch(UnexpectedIssue::new("down").into()),
            "wrapped: UnexpectedIssue"
        );
    }

    #[test]
    #[should_panic(expected = "no handler for issue kind: StaleIssue")]
    fn unregistered_discriminant_is_fatal() {
        let matcher: Matcher<CacheIssue> = Matcher::new().on(MissingIssue::KIND, |_| ());
        matcher.dispatch(StaleIssue.into());
    }

    #[test]
    #[should_panic(expected = "duplicate handler for issue kind: MissingIssue")]
    fn duplicate_registration_is_fatal() {
        let _ = Matcher::<CacheIssue>::new()
            .on(MissingIssue::KIND, |_| ())
            .on(MissingIssue::KIND, |_| ());
    }
}
