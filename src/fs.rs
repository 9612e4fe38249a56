//! Filesystem leaves: deferred reads and writes with discriminated issues.
//!
//! Each function builds a lazy chain stage; nothing touches the disk until a
//! terminal call subscribes, and every subscription performs the operation
//! again. Host errors surface as dedicated issue variants carrying the path
//! and the operating system's message, never as panics or `io::Result`
//! plumbing leaking into the chain.

use std::fs;
use std::path::PathBuf;

use crate::deferred::{from_producer, Deferred, Resolve};
use crate::issue::UnexpectedIssue;
use crate::{issue_tag, issue_union};

/// A file could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct UnreadableFileIssue {
    /// Path the read was attempted on.
    pub path: PathBuf,
    /// Message reported by the host.
    pub message: String,
}

issue_tag!(UnreadableFileIssue, "UnreadableFileIssue");

/// A file could not be written.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwritableFileIssue {
    /// Path the write was attempted on.
    pub path: PathBuf,
    /// Message reported by the host.
    pub message: String,
}

issue_tag!(UnwritableFileIssue, "UnwritableFileIssue");

issue_union! {
    /// Everything reading a file can go wrong with.
    pub enum ReadFileIssue {
        /// The host refused or failed the read.
        Unreadable(UnreadableFileIssue),
        /// A contained panic.
        Unexpected(UnexpectedIssue),
    }
}

issue_union! {
    /// Everything writing a file can go wrong with.
    pub enum WriteFileIssue {
        /// The host refused or failed the write.
        Unwritable(UnwritableFileIssue),
        /// A contained panic.
        Unexpected(UnexpectedIssue),
    }
}

/// Read a file to a string.
///
/// ```no_run
/// use augury::prelude::*;
/// use augury::fs;
///
/// fs::read_to_string("notes.txt")
///     .map(|text| text.lines().count())
///     .run(
///         |issue| eprintln!("read failed: {}", issue.kind()),
///         |lines| println!("{lines} lines"),
///     );
/// ```
pub fn read_to_string(
    path: impl Into<PathBuf>,
) -> impl Deferred<Value = String, Issue = ReadFileIssue> {
    let path = path.into();
    from_producer(move |resolve: Resolve<String, ReadFileIssue>| {
        match fs::read_to_string(&path) {
            Ok(text) => resolve.value(text),
            Err(error) => resolve.issue(
                UnreadableFileIssue {
                    path: path.clone(),
                    message: error.to_string(),
                }
                .into(),
            ),
        }
    })
}

/// Write a string to a file, creating or truncating it.
///
/// Resolves with the written content so a chain can keep transforming it.
pub fn write_string(
    path: impl Into<PathBuf>,
    content: impl Into<String>,
) -> impl Deferred<Value = String, Issue = WriteFileIssue> {
    let path = path.into();
    let content = content.into();
    from_producer(move |resolve: Resolve<String, WriteFileIssue>| {
        match fs::write(&path, &content) {
            Ok(()) => resolve.value(content.clone()),
            Err(error) => resolve.issue(
                UnwritableFileIssue {
                    path: path.clone(),
                    message: error.to_string(),
                }
                .into(),
            ),
        }
    })
}
