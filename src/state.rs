//! The observable cell: one mutable value with replay-on-subscribe.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::deferred::{Deferred, Resolve};
use crate::issue::{Issue, UnexpectedIssue};

type Update<V> = Box<dyn FnOnce(&V) -> V>;

struct Observer<V> {
    notify: RefCell<Box<dyn FnMut(&V)>>,
    active: Cell<bool>,
}

struct Shared<V> {
    value: RefCell<V>,
    observers: RefCell<Vec<Rc<Observer<V>>>>,
    notifying: Cell<bool>,
    queued: RefCell<VecDeque<Update<V>>>,
}

// Restores the notifying flag on drop, so a subscriber panic unwinding
// through a pass cannot leave the cell wedged with updates queued forever.
struct NotifyGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// A single mutable value whose subscribers replay the current value on
/// registration and hear every subsequent update.
///
/// Cloning a `State` clones the handle, not the value: all clones observe
/// and mutate the same cell. Everything runs on the single cooperative
/// thread; [`next`](State::next) notifies the subscribers registered at the
/// start of the pass, synchronously and in registration order.
///
/// Reentrancy: an update issued from inside a subscriber callback is queued
/// and applied after the current notification pass completes, so every
/// subscriber sees every value in order and none is skipped mid-pass.
///
/// ```
/// use augury::State;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let counter = State::from(0);
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&log);
/// counter.on(move |n| sink.borrow_mut().push(*n));
/// counter.next(|n| n + 1);
/// counter.next(|n| n + 1);
///
/// assert_eq!(*log.borrow(), vec![0, 1, 2]);
/// ```
pub struct State<V> {
    shared: Rc<Shared<V>>,
}

impl<V> Clone for State<V> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<V> fmt::Debug for State<V>
where
    V: fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &self.value_ref())
            .field("observers", &self.shared.observers.borrow().len())
            .finish()
    }
}

impl<V: 'static> State<V> {
    /// A cell holding `initial`.
    pub fn new(initial: V) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(initial),
                observers: RefCell::new(Vec::new()),
                notifying: Cell::new(false),
                queued: RefCell::new(VecDeque::new()),
            }),
        }
    }

    /// The current value, by clone.
    pub fn get(&self) -> V
    where
        V: Clone,
    {
        self.shared.value.borrow().clone()
    }

    /// Replace the value and notify.
    pub fn set(&self, value: V) {
        self.next(move |_| value);
    }

    /// Apply a pure updater to the current value and notify every registered
    /// subscriber with the result.
    ///
    /// Reentrant calls from inside a subscriber are queued until the current
    /// pass completes.
    pub fn next(&self, update: impl FnOnce(&V) -> V + 'static) {
        self.shared.queued.borrow_mut().push_back(Box::new(update));
        self.drain();
    }

    /// Register a subscriber and replay the current value to it immediately.
    ///
    /// The returned [`Subscription`] removes the subscriber when explicitly
    /// asked; dropping it keeps the subscriber registered.
    pub fn on(&self, notify: impl FnMut(&V) + 'static) -> Subscription<V> {
        let observer = Rc::new(Observer {
            notify: RefCell::new(Box::new(notify)),
            active: Cell::new(true),
        });

        self.shared.observers.borrow_mut().push(Rc::clone(&observer));

        // Replay is a pass of its own: updates issued from inside the
        // replayed callback are queued like any other reentrant update.
        {
            let _replay = NotifyGuard::enter(&self.shared.notifying);
            (observer.notify.borrow_mut())(&self.shared.value.borrow());
        }
        self.drain();

        Subscription { observer }
    }

    /// A deferred computation resolving at the first value satisfying the
    /// predicate.
    ///
    /// Replay counts: if the current value already satisfies the predicate,
    /// the subscription resolves synchronously. The observer detaches itself
    /// once resolved. This is the adapter that turns host events pushed into
    /// a cell into an ordinary chain stage.
    pub fn once<P, I>(&self, predicate: P) -> Once<V, P, I>
    where
        V: Clone,
        P: Fn(&V) -> bool + Clone + 'static,
        I: Issue + 'static,
    {
        Once {
            state: self.clone(),
            predicate,
            _issue: PhantomData,
        }
    }

    fn drain(&self) {
        if self.shared.notifying.get() {
            return;
        }

        let _pass = NotifyGuard::enter(&self.shared.notifying);
        while let Some(update) = {
            let next = self.shared.queued.borrow_mut().pop_front();
            next
        } {
            self.apply(update);
        }
    }

    fn apply(&self, update: Update<V>) {
        let updated = update(&self.value_ref());
        *self.shared.value.borrow_mut() = updated;

        // Drop inactive observers, then snapshot: subscribers registered
        // during this pass are notified on the next one.
        self.shared
            .observers
            .borrow_mut()
            .retain(|observer| observer.active.get());
        let snapshot = self.shared.observers.borrow().clone();

        let value = self.shared.value.borrow();
        for observer in snapshot {
            if observer.active.get() {
                (observer.notify.borrow_mut())(&value);
            }
        }
    }

    fn value_ref(&self) -> std::cell::Ref<'_, V> {
        self.shared.value.borrow()
    }
}

impl<V: 'static> From<V> for State<V> {
    fn from(initial: V) -> Self {
        Self::new(initial)
    }
}

/// Removal handle for one registered subscriber.
///
/// Dropping the handle leaves the subscriber attached;
/// [`unsubscribe`](Subscription::unsubscribe) detaches it before the next
/// notification pass.
pub struct Subscription<V> {
    observer: Rc<Observer<V>>,
}

impl<V> Subscription<V> {
    /// Detach the subscriber.
    pub fn unsubscribe(self) {
        self.observer.active.set(false);
    }
}

impl<V> fmt::Debug for Subscription<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.observer.active.get())
            .finish()
    }
}

/// Deferred view of a [`State`] cell; see [`State::once`].
pub struct Once<V, P, I = UnexpectedIssue> {
    state: State<V>,
    predicate: P,
    _issue: PhantomData<fn() -> I>,
}

impl<V, P, I> fmt::Debug for Once<V, P, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once").finish_non_exhaustive()
    }
}

impl<V, P, I> Deferred for Once<V, P, I>
where
    V: Clone + 'static,
    P: Fn(&V) -> bool + Clone + 'static,
    I: Issue + 'static,
{
    type Value = V;
    type Issue = I;

    fn subscribe(&self, resolve: Resolve<V, I>) {
        let predicate = self.predicate.clone();
        let parked = Rc::new(Cell::new(Some(resolve)));
        let done = Rc::new(Cell::new(false));
        let registration: Rc<Cell<Option<Subscription<V>>>> = Rc::new(Cell::new(None));

        let parked_in_observer = Rc::clone(&parked);
        let done_in_observer = Rc::clone(&done);
        let registration_in_observer = Rc::clone(&registration);

        let subscription = self.state.on(move |value| {
            if !predicate(value) {
                return;
            }
            if let Some(resolve) = parked_in_observer.take() {
                done_in_observer.set(true);
                resolve.value(value.clone());
                if let Some(active) = registration_in_observer.take() {
                    active.unsubscribe();
                }
            }
        });

        if done.get() {
            // Resolved during replay; nothing left to observe.
            subscription.unsubscribe();
        } else {
            registration.set(Some(subscription));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::{from_producer, pure, DeferredExt};
    use crate::testing::outcome_of;
    use crate::{assert_issue, assert_value, Outcome};

    fn recording(state: &State<i32>) -> (Rc<RefCell<Vec<i32>>>, Subscription<i32>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let subscription = state.on(move |n| sink.borrow_mut().push(*n));
        (log, subscription)
    }

    #[test]
    fn replays_current_value_on_subscribe() {
        let state = State::from(0);
        let (log, _keep) = recording(&state);

        state.next(|n| n + 1);
        state.next(|n| n + 1);

        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn set_replaces_and_notifies() {
        let state = State::from(1);
        let (log, _keep) = recording(&state);

        state.set(9);

        assert_eq!(*log.borrow(), vec![1, 9]);
        assert_eq!(state.get(), 9);
    }

    #[test]
    fn notifies_in_registration_order() {
        let state = State::from(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let sink = Rc::clone(&order);
            state.on(move |n| {
                if *n > 0 {
                    sink.borrow_mut().push(tag);
                }
            });
        }

        state.next(|n| n + 1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_observer_misses_later_updates() {
        let state = State::from(0);
        let (log, subscription) = recording(&state);

        state.next(|n| n + 1);
        subscription.unsubscribe();
        state.next(|n| n + 1);

        assert_eq!(*log.borrow(), vec![0, 1]);
    }

    #[test]
    fn reentrant_update_is_queued_until_the_pass_completes() {
        let state = State::from(0);
        let (log, _keep) = recording(&state);

        let reentrant = state.clone();
        state.on(move |n| {
            if *n == 1 {
                reentrant.next(|n| n + 10);
            }
        });

        state.next(|n| n + 1);

        // The queued +10 applies after the +1 pass has notified everyone.
        assert_eq!(*log.borrow(), vec![0, 1, 11]);
        assert_eq!(state.get(), 11);
    }

    #[test]
    fn cell_keeps_notifying_after_a_contained_subscriber_panic() {
        let state = State::from(0);
        let (log, _keep) = recording(&state);

        state.on(|n| {
            if *n == 1 {
                panic!("subscriber blew up");
            }
        });

        // Drive the pass through a producer so the panic is contained.
        let driver = state.clone();
        let chain = from_producer(move |resolve: crate::Resolve<i32, UnexpectedIssue>| {
            driver.next(|n| n + 1);
            resolve.value(driver.get());
        });
        assert_issue!(chain, "UnexpectedIssue");

        // The pass unwound, but later updates must still apply and notify.
        state.next(|n| n + 1);
        assert_eq!(state.get(), 2);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn update_issued_during_replay_is_queued() {
        let state = State::from(0);
        let (log, _keep) = recording(&state);

        let bump = state.clone();
        let mut bumped = false;
        state.on(move |_| {
            if !bumped {
                bumped = true;
                bump.next(|n| n + 5);
            }
        });

        assert_eq!(*log.borrow(), vec![0, 5]);
        assert_eq!(state.get(), 5);
    }

    #[test]
    fn once_resolves_from_replay_when_already_satisfied() {
        let state = State::from(5);
        let chain = state.once::<_, UnexpectedIssue>(|n| *n >= 5);
        assert_value!(chain, 5);
    }

    #[test]
    fn once_resolves_at_the_first_matching_update() {
        let state = State::from(0);
        let chain = state
            .once::<_, UnexpectedIssue>(|n| *n == 2)
            .and_then(|n| pure(n * 10));

        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        chain.run(|_| panic!("no issue expected"), move |n| sink.set(Some(n)));

        assert_eq!(seen.get(), None);
        state.next(|n| n + 1);
        assert_eq!(seen.get(), None);
        state.next(|n| n + 1);
        assert_eq!(seen.get(), Some(20));
    }

    #[test]
    fn once_detaches_after_resolving() {
        let state = State::from(0);
        let chain = state.once::<_, UnexpectedIssue>(|n| *n > 0);

        chain.run(|_| panic!("no issue expected"), |_| {});
        state.next(|n| n + 1);
        assert_eq!(state.shared.observers.borrow().len(), 1);

        // The spent observer is pruned on the following pass.
        state.next(|n| n + 1);
        assert_eq!(state.shared.observers.borrow().len(), 0);
    }

    #[test]
    fn once_resubscribes_like_any_other_leaf() {
        let state = State::from(3);
        let chain = state.once::<_, UnexpectedIssue>(|n| *n >= 3);

        assert_eq!(outcome_of(&chain), Some(Outcome::Value(3)));
        assert_eq!(outcome_of(&chain), Some(Outcome::Value(3)));
    }
}
