//! Text helpers as chain stages.

use crate::deferred::{from_producer, pure, Deferred, Pure, Resolve};
use crate::issue::UnexpectedIssue;
use crate::{issue_tag, issue_union};

/// A character index fell outside the text.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterNotFoundIssue {
    /// The text that was indexed.
    pub text: String,
    /// The out-of-range character index.
    pub index: usize,
}

issue_tag!(CharacterNotFoundIssue, "CharacterNotFoundIssue");

issue_union! {
    /// Everything indexing into text can go wrong with.
    pub enum CharAtIssue {
        /// The index is past the end of the text.
        NotFound(CharacterNotFoundIssue),
        /// A contained panic.
        Unexpected(UnexpectedIssue),
    }
}

/// The text does not end with the expected suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingSuffixIssue {
    /// The text that was checked.
    pub text: String,
    /// The suffix the text was expected to end with.
    pub suffix: String,
}

issue_tag!(MissingSuffixIssue, "MissingSuffixIssue");

issue_union! {
    /// Everything checking a suffix can go wrong with.
    pub enum EndsWithIssue {
        /// The text lacks the suffix.
        MissingSuffix(MissingSuffixIssue),
        /// A contained panic.
        Unexpected(UnexpectedIssue),
    }
}

/// Resolve with the text, or with the fallback when the text is blank.
///
/// Blank means empty after trimming whitespace.
pub fn filled_or(fallback: impl Into<String>, text: impl Into<String>) -> Pure<String, UnexpectedIssue> {
    let text = text.into();
    if text.trim().is_empty() {
        pure(fallback.into())
    } else {
        pure(text)
    }
}

/// Resolve with the character at `index`, counted in characters rather than
/// bytes.
pub fn char_at(
    text: impl Into<String>,
    index: usize,
) -> impl Deferred<Value = char, Issue = CharAtIssue> {
    let text = text.into();
    from_producer(move |resolve: Resolve<char, CharAtIssue>| {
        match text.chars().nth(index) {
            Some(character) => resolve.value(character),
            None => resolve.issue(
                CharacterNotFoundIssue {
                    text: text.clone(),
                    index,
                }
                .into(),
            ),
        }
    })
}

/// Resolve with the text when it ends with `suffix`, or raise a
/// [`MissingSuffixIssue`] carrying both.
pub fn ends_with(
    text: impl Into<String>,
    suffix: impl Into<String>,
) -> impl Deferred<Value = String, Issue = EndsWithIssue> {
    let text = text.into();
    let suffix = suffix.into();
    from_producer(move |resolve: Resolve<String, EndsWithIssue>| {
        if text.ends_with(&suffix) {
            resolve.value(text.clone());
        } else {
            resolve.issue(
                MissingSuffixIssue {
                    text: text.clone(),
                    suffix: suffix.clone(),
                }
                .into(),
            );
        }
    })
}
