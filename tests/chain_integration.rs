//! End-to-end chains crossing module boundaries: filesystem leaves, recovery,
//! matcher dispatch, and state-driven resolution.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use augury::fs::{self, ReadFileIssue};
use augury::prelude::*;
use augury::syslog::{format_entry, Facility, Severity, SyslogOptions};
use augury::testing::outcome_of;
use augury::{assert_issue, assert_value, text};

fn scratch_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("augury-it-{}-{name}", std::process::id()));
    path
}

#[test]
fn write_read_transform_round_trip() {
    let path = scratch_path("round-trip");

    let chain = fs::write_string(path.clone(), "first\nsecond\nthird")
        .map_issue(|issue| UnexpectedIssue::new(format!("{issue:?}")))
        .and_then({
            let path = path.clone();
            move |_| {
                fs::read_to_string(path.clone())
                    .map_issue(|issue| UnexpectedIssue::new(format!("{issue:?}")))
            }
        })
        .map(|text| text.lines().count());

    assert_value!(chain, 3);
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_recovers_with_a_default() {
    let chain = fs::read_to_string(scratch_path("never-written")).recover(
        |issue| match issue {
            ReadFileIssue::Unreadable(unreadable) => Ok(unreadable),
            ReadFileIssue::Unexpected(unexpected) => Err(unexpected),
        },
        |_unreadable| pure(String::new()),
    );

    assert_value!(chain, "");
}

#[test]
fn recovery_narrows_the_union_for_the_matcher() {
    let handled = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&handled);

    let report = Matcher::new()
        .on(UnexpectedIssue::KIND, move |issue: UnexpectedIssue| {
            sink.borrow_mut().push(issue.to_string());
        })
        .into_handler();

    fs::read_to_string(scratch_path("never-written"))
        .recover(
            |issue| match issue {
                ReadFileIssue::Unreadable(unreadable) => Ok(unreadable),
                ReadFileIssue::Unexpected(unexpected) => Err(unexpected),
            },
            |_| fail(UnexpectedIssue::new("remediation refused")),
        )
        .run_issue(report);

    assert_eq!(*handled.borrow(), vec!["remediation refused".to_string()]);
}

#[test]
fn unreadable_issue_reports_through_syslog_format() {
    let options = SyslogOptions {
        facility: Facility::Daemon,
        severity: Severity::Error,
        hostname: "app-1".into(),
        application: "augury".into(),
        identifier: "7".into(),
    };

    let path = scratch_path("syslog-report");
    let outcome = outcome_of(&fs::read_to_string(path.clone()));

    let issue = match outcome {
        Some(Outcome::Issue(ReadFileIssue::Unreadable(issue))) => issue,
        other => panic!("expected an unreadable issue, got {other:?}"),
    };

    let entry = format_entry(&options, "Feb 10 08:30:00", format!("read failed: {}", issue.path.display()));
    assert!(entry.starts_with("<27>Feb 10 08:30:00 app-1 augury[7]: read failed: "));
    assert!(entry.ends_with(&path.display().to_string()));
}

#[test]
fn state_event_drives_a_text_chain() {
    let input = State::from(String::new());

    let chain = input
        .once::<_, UnexpectedIssue>(|line: &String| !line.is_empty())
        .and_then(|line| text::filled_or("anonymous", line))
        .and_then(|name| text::char_at(name, 0).map_issue(|issue| UnexpectedIssue::new(format!("{issue:?}"))));

    let seen = Rc::new(Cell::new(None));
    let sink = Rc::clone(&seen);
    chain.run(|_| panic!("no issue expected"), move |c| sink.set(Some(c)));

    assert_eq!(seen.get(), None);
    input.set("ada".to_string());
    assert_eq!(seen.get(), Some('a'));
}

#[test]
fn deep_chain_keeps_the_first_issue() {
    let taps = Rc::new(Cell::new(0));
    let counter = Rc::clone(&taps);

    let chain = text::char_at("short", 40)
        .map(|c| c.to_ascii_uppercase())
        .tap(move |_| counter.set(counter.get() + 1))
        .and_then(|c| pure(c.to_string()));

    assert_issue!(chain, "CharacterNotFoundIssue");
    assert_eq!(taps.get(), 0);
}
