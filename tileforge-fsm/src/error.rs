//! FSM error types.

use thiserror::Error;

/// Errors from the state machine engine.
///
/// All three variants indicate programmer error or invalid runtime
/// sequencing. They are returned at the call site and are expected to
/// propagate; the engine never swallows them.
#[derive(Debug, Error)]
pub enum FsmError {
    /// Transition name is reserved, or the `(source, name)` pair is
    /// already registered.
    #[error("illegal transition name '{name}': {reason}")]
    IllegalName { name: String, reason: String },

    /// Transition invoked from a state that has no such outgoing edge.
    #[error("illegal transition: cannot trigger '{name}' in state '{state}'")]
    IllegalTransition { name: String, state: String },

    /// Callback registered under an event name that matches no known
    /// transition.
    #[error("illegal callback '{event}': no registered transition matches")]
    IllegalCallback { event: String },

    /// Transition descriptors could not be parsed.
    #[error("invalid transition definition: {0}")]
    Json(#[from] serde_json::Error),
}
