//! Interactive prompt leaf over standard input and output.

use std::io::{self, BufRead, Write};

use crate::deferred::{from_producer, Deferred, Resolve};
use crate::issue::UnexpectedIssue;
use crate::{issue_tag, issue_union};

/// Standard input or output failed mid-prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptIssue {
    /// Message reported by the host.
    pub message: String,
}

issue_tag!(PromptIssue, "PromptIssue");

issue_union! {
    /// Everything asking a question can go wrong with.
    pub enum AskIssue {
        /// The prompt could not be written or the answer could not be read.
        Prompt(PromptIssue),
        /// A contained panic.
        Unexpected(UnexpectedIssue),
    }
}

/// Print a question and resolve with one line of input, trailing newline
/// stripped.
///
/// Lazy like every leaf: the prompt is shown when a terminal call subscribes,
/// once per subscription. End of input counts as a failed prompt.
///
/// ```no_run
/// use augury::prelude::*;
/// use augury::stdio;
///
/// stdio::ask("What is your name? ").run(
///     |issue| eprintln!("no answer: {}", issue.kind()),
///     |name| println!("Hello, {name}!"),
/// );
/// ```
pub fn ask(question: impl Into<String>) -> impl Deferred<Value = String, Issue = AskIssue> {
    let question = question.into();
    from_producer(move |resolve: Resolve<String, AskIssue>| {
        let answer = prompt_line(&question, &mut io::stdout(), &mut io::stdin().lock());
        match answer {
            Ok(answer) => resolve.value(answer),
            Err(message) => resolve.issue(PromptIssue { message }.into()),
        }
    })
}

fn prompt_line(
    question: &str,
    output: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<String, String> {
    output
        .write_all(question.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|error| error.to_string())?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .map_err(|error| error.to_string())?;

    if read == 0 {
        return Err("end of input before an answer".to_string());
    }

    if answer.ends_with('\n') {
        answer.pop();
        if answer.ends_with('\r') {
            answer.pop();
        }
    }

    Ok(answer)
}
