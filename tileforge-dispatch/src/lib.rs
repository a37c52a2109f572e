//! # tileforge-dispatch
//!
//! State-scoped event dispatch for tileforge.
//!
//! A [`Dispatcher`] owns a registry of listeners keyed by
//! `(state, event kind)` and an injected event source. Each frame,
//! [`Dispatcher::handle_events`] pulls the pending batch from the
//! source and routes every event to the listeners registered for the
//! session's *current* FSM state, either for the event's kind or for
//! the wildcard kind.
//!
//! The dispatcher never owns a session or an event queue; both are
//! passed in, which keeps it independent of any concrete input toolkit.

pub mod dispatcher;
pub mod event;

pub use dispatcher::{listener, Dispatcher, HasMachine, Listener};
pub use event::{Event, EventKind};
