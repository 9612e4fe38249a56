//! Pausing chain stages.
//!
//! The core is single-threaded and a [`Resolve`](crate::Resolve) handle
//! cannot cross threads, so a delay parks the subscribing thread rather than
//! yielding to an event loop. The pause happens per subscription, at
//! subscription time; composing a delayed chain costs nothing.

use std::thread;
use std::time::Duration;

use crate::deferred::{from_producer, Deferred, Resolve};
use crate::issue::UnexpectedIssue;

/// Resolve with unit after the given pause.
///
/// ```no_run
/// use std::time::Duration;
/// use augury::prelude::*;
/// use augury::time;
///
/// time::delay(Duration::from_secs(1))
///     .map(|()| "a second later")
///     .run(|_| unreachable!(), |message| println!("{message}"));
/// ```
pub fn delay(duration: Duration) -> impl Deferred<Value = (), Issue = UnexpectedIssue> {
    from_producer(move |resolve: Resolve<(), UnexpectedIssue>| {
        thread::sleep(duration);
        resolve.value(());
    })
}

/// Forward a value after the given pause.
pub fn hold<V>(duration: Duration, value: V) -> impl Deferred<Value = V, Issue = UnexpectedIssue>
where
    V: Clone + 'static,
{
    from_producer(move |resolve: Resolve<V, UnexpectedIssue>| {
        thread::sleep(duration);
        resolve.value(value.clone());
    })
}
