//! The dispatcher: listener registry plus routing.

use crate::event::{Event, EventKind};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tileforge_fsm::{Machine, State};

/// Session contract: any value holding a live [`Machine`] whose current
/// state drives event routing.
pub trait HasMachine {
    /// The session's state machine.
    fn machine(&self) -> &Machine;

    /// Mutable access, so listeners can trigger transitions.
    fn machine_mut(&mut self) -> &mut Machine;
}

/// A registered listener.
///
/// Listeners receive the event and the session; return values are
/// discarded. Identity for registration purposes is the `Rc` pointer,
/// so clone the same `Rc` to refer to "the same listener".
pub type Listener<E, S> = Rc<dyn Fn(&E, &mut S)>;

/// Wraps a closure into a [`Listener`].
pub fn listener<E, S, F>(f: F) -> Listener<E, S>
where
    F: Fn(&E, &mut S) + 'static,
{
    Rc::new(f)
}

/// Routes events to listeners keyed by the session's current FSM state.
///
/// The registry maps `(state, Some(kind))` and `(state, None)` keys to
/// listener sets; `None` is the wildcard kind, matching every event in
/// that state. Listener sets have set semantics: re-registering the
/// same `Rc` under the same key is a no-op.
pub struct Dispatcher<E, S> {
    /// Listener sets by routing key.
    listeners: HashMap<(State, Option<EventKind>), Vec<Listener<E, S>>>,

    /// Injected batch supplier, decoupling the dispatcher from the
    /// concrete input toolkit.
    source: Box<dyn FnMut() -> Vec<E>>,

    /// Listeners already bulk-registered through `register_for`,
    /// tracked by pointer so a repeated call is a no-op.
    bulk_registered: HashSet<usize>,
}

impl<E: Event, S: HasMachine> Dispatcher<E, S> {
    /// Creates a dispatcher around an event source.
    ///
    /// The source is a zero-argument closure returning the current
    /// batch of pending events, called once per
    /// [`Dispatcher::handle_events`].
    pub fn new(source: impl FnMut() -> Vec<E> + 'static) -> Self {
        Self {
            listeners: HashMap::new(),
            source: Box::new(source),
            bulk_registered: HashSet::new(),
        }
    }

    /// Registers `listener` for `state` and an event kind, or for every
    /// kind when `kind` is `None`.
    ///
    /// Idempotent: registering the same `Rc` under the same key again
    /// leaves the registry unchanged.
    pub fn register(
        &mut self,
        state: impl Into<State>,
        listener: Listener<E, S>,
        kind: Option<EventKind>,
    ) {
        let bucket = self.listeners.entry((state.into(), kind)).or_default();
        if !bucket.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            bucket.push(listener);
        }
    }

    /// Registers one listener for every state in `states`, exactly once
    /// per listener even if called repeatedly.
    ///
    /// Repeat-suppression is tracked on the listener itself (by
    /// pointer), not by scanning the registry, so a listener bulk-
    /// registered once is skipped wholesale on later calls regardless
    /// of the states requested.
    pub fn register_for<I, T>(&mut self, states: I, listener: Listener<E, S>, kind: Option<EventKind>)
    where
        I: IntoIterator<Item = T>,
        T: Into<State>,
    {
        if !self.bulk_registered.insert(ptr_of(&listener)) {
            return;
        }
        for state in states {
            self.register(state, listener.clone(), kind);
        }
    }

    /// Number of listeners registered under `(state, kind)`.
    pub fn listener_count(&self, state: &str, kind: Option<EventKind>) -> usize {
        self.listeners
            .get(&(State::from(state), kind))
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Routes one event to the listeners matching the session's current
    /// state.
    ///
    /// The routing state is snapshotted once, before any listener runs:
    /// a listener that transitions the machine mid-dispatch does not
    /// change which listeners were selected for this event. The
    /// selected set is the union of the `(state, kind)` and
    /// `(state, wildcard)` buckets; a listener present in both fires
    /// once. Invocation order across listeners is unspecified.
    ///
    /// Listener panics are not caught here; they propagate to the
    /// caller, where the session loop decides recovery policy.
    pub fn dispatch(&self, event: &E, session: &mut S) {
        let state = session.machine().state().clone();
        let kind = event.kind();

        let mut selected: Vec<&Listener<E, S>> = Vec::new();
        for key in [(state.clone(), Some(kind)), (state.clone(), None)] {
            if let Some(bucket) = self.listeners.get(&key) {
                for listener in bucket {
                    if !selected.iter().any(|l| Rc::ptr_eq(l, listener)) {
                        selected.push(listener);
                    }
                }
            }
        }

        tracing::trace!(state = %state, kind, count = selected.len(), "dispatching event");
        for listener in selected {
            listener(event, session);
        }
    }

    /// Pulls the pending batch from the event source and dispatches
    /// each event in the order the source returned them.
    ///
    /// The routing state is re-read fresh before each event, so a
    /// listener that transitions the machine affects the routing of the
    /// remaining events in the same batch.
    pub fn handle_events(&mut self, session: &mut S) {
        let events = (self.source)();
        for event in events {
            self.dispatch(&event, session);
        }
    }
}

fn ptr_of<E, S>(listener: &Listener<E, S>) -> usize {
    Rc::as_ptr(listener) as *const () as usize
}
