//! Tests for the deferred value carrier.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::deferred::prelude::*;
use crate::issue::UnexpectedIssue;
use crate::testing::outcome_of;
use crate::{assert_issue, assert_value, issue_tag, issue_union};

#[derive(Debug, Clone, PartialEq)]
struct NotFoundIssue {
    key: &'static str,
}

issue_tag!(NotFoundIssue, "NotFoundIssue");

#[derive(Debug, Clone, PartialEq)]
struct ForbiddenIssue;

issue_tag!(ForbiddenIssue, "ForbiddenIssue");

issue_union! {
    enum LookupIssue {
        NotFound(NotFoundIssue),
        Forbidden(ForbiddenIssue),
        Unexpected(UnexpectedIssue),
    }
}

issue_union! {
    enum LookupIssueAfterRecovery {
        Forbidden(ForbiddenIssue),
        Unexpected(UnexpectedIssue),
    }
}

// Constructors

#[test]
fn pure_resolves_with_value() {
    assert_value!(pure::<_, UnexpectedIssue>(42), 42);
}

#[test]
fn fail_resolves_with_issue() {
    let chain = fail::<i32, _>(UnexpectedIssue::new("down"));
    assert_issue!(chain, "UnexpectedIssue");
}

#[test]
fn from_result_lifts_both_channels() {
    assert_value!(from_result::<_, UnexpectedIssue>(Ok(7)), 7);
    assert_issue!(
        from_result::<i32, _>(Err(UnexpectedIssue::new("down"))),
        "UnexpectedIssue"
    );
}

#[test]
fn from_producer_emits_value() {
    let chain = from_producer(|resolve: Resolve<i32, UnexpectedIssue>| resolve.value(5));
    assert_value!(chain, 5);
}

#[test]
fn from_producer_emits_issue() {
    let chain = from_producer(|resolve: Resolve<i32, LookupIssue>| {
        resolve.issue(NotFoundIssue { key: "user" }.into());
    });
    assert_issue!(chain, "NotFoundIssue");
}

#[test]
fn producer_panic_is_contained() {
    let chain = from_producer(|_resolve: Resolve<i32, UnexpectedIssue>| panic!("boom"));

    match outcome_of(&chain) {
        Some(Outcome::Issue(issue)) => assert_eq!(issue.to_string(), "boom"),
        other => panic!("expected a contained issue, got {other:?}"),
    }
}

#[test]
fn producer_resolution_survives_a_late_panic() {
    let chain = from_producer(|resolve: Resolve<i32, UnexpectedIssue>| {
        resolve.value(3);
        panic!("after the fact");
    });
    assert_value!(chain, 3);
}

// Laws (concrete cases; tests/laws.rs covers them property-style)

#[test]
fn identity_law_holds() {
    let double = |n: i32| pure::<_, UnexpectedIssue>(n * 2);
    assert_eq!(
        outcome_of(&pure::<_, UnexpectedIssue>(21).and_then(double)),
        outcome_of(&double(21))
    );
}

#[test]
fn associativity_law_holds() {
    let f = |n: i32| pure::<_, UnexpectedIssue>(n + 1);
    let g = |n: i32| pure::<_, UnexpectedIssue>(n * 3);

    let left = pure::<_, UnexpectedIssue>(5).and_then(f).and_then(g);
    let right = pure::<_, UnexpectedIssue>(5).and_then(move |n| f(n).and_then(g));

    assert_eq!(outcome_of(&left), outcome_of(&right));
}

// Sequencing

#[test]
fn and_then_chains_values() {
    let chain = pure::<_, UnexpectedIssue>(21).and_then(|n| pure(n * 2));
    assert_value!(chain, 42);
}

#[test]
fn and_then_short_circuits_on_issue() {
    let reached = Rc::new(Cell::new(false));
    let witness = Rc::clone(&reached);

    let chain = fail::<i32, _>(UnexpectedIssue::new("down")).and_then(move |n| {
        witness.set(true);
        pure(n)
    });

    assert_issue!(chain, "UnexpectedIssue");
    assert!(!reached.get());
}

#[test]
fn and_then_contains_update_panics() {
    let chain = pure::<_, UnexpectedIssue>(1)
        .and_then(|_| -> Pure<i32, UnexpectedIssue> { panic!("boom") });

    match outcome_of(&chain) {
        Some(Outcome::Issue(issue)) => assert_eq!(issue.to_string(), "boom"),
        other => panic!("expected a contained issue, got {other:?}"),
    }
}

#[test]
fn map_transforms_value() {
    assert_value!(pure::<_, UnexpectedIssue>(21).map(|n| n * 2), 42);
}

#[test]
fn map_contains_panics() {
    let chain = pure::<_, UnexpectedIssue>(1).map(|_| -> i32 { panic!("boom") });
    assert_issue!(chain, "UnexpectedIssue");
}

#[test]
fn map_issue_widens_a_leaf_union() {
    let chain = fail::<i32, _>(UnexpectedIssue::new("down")).map_issue(LookupIssue::from);
    assert_issue!(chain, "UnexpectedIssue");
}

// Recovery

fn lookup_failing_with(issue: LookupIssue) -> impl Deferred<Value = Vec<i32>, Issue = LookupIssue> {
    let issue = Rc::new(RefCell::new(Some(issue)));
    from_producer(move |resolve: Resolve<Vec<i32>, LookupIssue>| {
        let issue = issue.borrow_mut().take().expect("single subscription");
        resolve.issue(issue);
    })
}

fn recover_not_found(
    chain: impl Deferred<Value = Vec<i32>, Issue = LookupIssue> + 'static,
) -> impl Deferred<Value = Vec<i32>, Issue = LookupIssueAfterRecovery> {
    chain.recover(
        |issue| match issue {
            LookupIssue::NotFound(not_found) => Ok(not_found),
            LookupIssue::Forbidden(forbidden) => Err(forbidden.into()),
            LookupIssue::Unexpected(unexpected) => Err(unexpected.into()),
        },
        |_not_found| pure(Vec::new()),
    )
}

#[test]
fn recover_remediates_the_selected_variant() {
    let chain = recover_not_found(lookup_failing_with(NotFoundIssue { key: "user" }.into()));
    assert_value!(chain, Vec::<i32>::new());
}

#[test]
fn recover_forwards_other_variants_narrowed() {
    let chain = recover_not_found(lookup_failing_with(ForbiddenIssue.into()));
    assert_issue!(chain, "ForbiddenIssue");
}

#[test]
fn recover_passes_values_through() {
    let chain = pure::<Vec<i32>, LookupIssue>(vec![1]).boxed();
    let chain = recover_not_found(chain);
    assert_value!(chain, vec![1]);
}

#[test]
fn recover_kind_remediates_by_discriminant() {
    let chain = lookup_failing_with(NotFoundIssue { key: "user" }.into())
        .recover_kind(NotFoundIssue::KIND, |_| pure(Vec::new()));
    assert_value!(chain, Vec::<i32>::new());
}

#[test]
fn recover_kind_ignores_other_discriminants() {
    let remediated = Rc::new(Cell::new(false));
    let witness = Rc::clone(&remediated);

    let chain = lookup_failing_with(ForbiddenIssue.into())
        .recover_kind(NotFoundIssue::KIND, move |_issue| {
            witness.set(true);
            pure(Vec::new())
        });

    assert_issue!(chain, "ForbiddenIssue");
    assert!(!remediated.get());
}

// Tap

#[test]
fn tap_observes_without_altering() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let chain = pure::<_, UnexpectedIssue>(5).tap(move |n| sink.borrow_mut().push(*n));

    assert_value!(chain, 5);
    assert_eq!(*log.borrow(), vec![5]);
}

#[test]
fn tap_panic_withholds_the_value() {
    let chain = pure::<_, UnexpectedIssue>(5).tap(|_| panic!("boom"));
    assert_issue!(chain, "UnexpectedIssue");
}

#[test]
fn tap_skips_issues() {
    let observed = Rc::new(Cell::new(false));
    let witness = Rc::clone(&observed);

    let chain = fail::<i32, _>(UnexpectedIssue::new("down")).tap(move |_| witness.set(true));

    assert_issue!(chain, "UnexpectedIssue");
    assert!(!observed.get());
}

// Replay and deferral

#[test]
fn each_subscription_reruns_the_producer() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);

    let chain = from_producer(move |resolve: Resolve<i32, UnexpectedIssue>| {
        counter.set(counter.get() + 1);
        resolve.value(counter.get());
    });

    assert_value!(chain, 1);
    assert_value!(chain, 2);
    assert_eq!(runs.get(), 2);
}

#[test]
fn parked_resolution_resumes_the_chain_later() {
    let parked: Rc<Cell<Option<Resolve<i32, UnexpectedIssue>>>> = Rc::new(Cell::new(None));
    let park = Rc::clone(&parked);

    let chain =
        from_producer(move |resolve: Resolve<i32, UnexpectedIssue>| park.set(Some(resolve)))
            .map(|n| n + 1);

    let seen = Rc::new(Cell::new(None));
    let sink = Rc::clone(&seen);
    chain.run(|_| panic!("no issue expected"), move |n| sink.set(Some(n)));

    assert_eq!(seen.get(), None);

    parked
        .take()
        .expect("producer parked its handle")
        .value(41);
    assert_eq!(seen.get(), Some(42));
}

#[test]
fn run_issue_discards_values() {
    let issues = Rc::new(Cell::new(0));
    let counter = Rc::clone(&issues);

    pure::<_, UnexpectedIssue>(1).run_issue(move |_| counter.set(counter.get() + 1));
    assert_eq!(issues.get(), 0);
}

// Boxing

#[test]
fn boxed_chains_stay_rerunnable() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);

    let chain = from_producer(move |resolve: Resolve<i32, UnexpectedIssue>| {
        counter.set(counter.get() + 1);
        resolve.value(0);
    })
    .boxed();

    let cloned = chain.clone();
    assert_value!(chain, 0);
    assert_value!(cloned, 0);
    assert_eq!(runs.get(), 2);
}

#[test]
fn boxed_unifies_divergent_arms() {
    fn lookup(found: bool) -> BoxedDeferred<i32, UnexpectedIssue> {
        if found {
            pure(1).boxed()
        } else {
            pure(1).map(|n| n + 41).boxed()
        }
    }

    assert_value!(lookup(true), 1);
    assert_value!(lookup(false), 42);
}
