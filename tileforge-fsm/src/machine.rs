//! The state machine itself.
//!
//! A [`Machine`] owns a current state and a table of named transitions,
//! and exposes each transition name as a trigger validated against the
//! current state at call time. Callback chains hang off event names:
//! `on_before_<name>` guards may veto the transition, `on_<name>`
//! callbacks run after the state change.

use crate::error::FsmError;
use crate::transition::{State, TransitionDef};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// A callback attached to a transition event.
///
/// Callbacks receive the trigger payload mutably so side effects made
/// by every callback in a chain are visible to the caller. For guard
/// callbacks (`on_before_<name>`), returning `Some(Value::Bool(false))`
/// vetoes the transition; `None` and `Some(Value::Null)` mean "no
/// opinion, proceed".
pub type Callback = Box<dyn FnMut(&mut Value) -> Option<Value>>;

/// Names that cannot be used for transitions because they collide with
/// the machine's own operations and accessors.
const RESERVED_NAMES: &[&str] = &[
    "new",
    "with_callbacks",
    "from_json",
    "state",
    "set_state",
    "is_state",
    "can",
    "trigger",
    "trigger_with",
    "add_transition",
    "add_callback",
    "transitions",
    "possible_states",
    "triggers_from",
    "available_triggers",
    "callbacks",
];

/// Result of triggering a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerResult {
    /// State the machine was in when the trigger fired.
    pub from_state: State,

    /// Registered destination of the edge.
    pub to_state: State,

    /// False if a guard callback vetoed the transition. When false the
    /// machine is still in `from_state` and no `on_<name>` callback ran.
    pub applied: bool,

    /// The last `on_<name>` callback's return value, or the vetoing
    /// guard's value when `applied` is false. `None` if no callback
    /// returned anything.
    pub value: Option<Value>,
}

/// A finite state machine with dynamically registered transitions.
///
/// States and transition names are not declared up front as a closed
/// set; they are inferred from the registered transitions, and the
/// machine accepts new transitions at any time. A state with no
/// outgoing transitions is terminal by construction.
///
/// # Example
///
/// ```
/// use tileforge_fsm::{Machine, TransitionDef};
///
/// let mut door = Machine::new(
///     "opened",
///     vec![
///         TransitionDef::new("open", "closed", "opened"),
///         TransitionDef::new("close", "opened", "closed"),
///     ],
/// )
/// .unwrap();
///
/// door.trigger("close").unwrap();
/// assert!(door.is_state("closed"));
/// ```
pub struct Machine {
    /// Current state.
    state: State,

    /// Authoritative transition table: (source, name) -> destination.
    transitions: HashMap<(State, String), State>,

    /// Derived index: state -> names triggerable from it.
    source_to_names: HashMap<State, HashSet<String>>,

    /// Every state appearing as a source or destination.
    possible_states: HashSet<State>,

    /// Callback chains keyed by event name (`on_<name>`,
    /// `on_before_<name>`), invoked in registration order.
    callbacks: HashMap<String, Vec<Callback>>,
}

impl Machine {
    /// Creates a machine in `initial` with the given transitions.
    ///
    /// Fails if any descriptor has an illegal name or duplicates an
    /// earlier `(source, name)` pair.
    pub fn new(initial: impl Into<State>, defs: Vec<TransitionDef>) -> Result<Self, FsmError> {
        let mut machine = Self {
            state: initial.into(),
            transitions: HashMap::new(),
            source_to_names: HashMap::new(),
            possible_states: HashSet::new(),
            callbacks: HashMap::new(),
        };

        for def in defs {
            machine.add_transition(def)?;
        }

        Ok(machine)
    }

    /// Creates a machine with callback chains supplied up front.
    ///
    /// Equivalent to [`Machine::new`] followed by
    /// [`Machine::add_callback`] per entry, so constructor-supplied
    /// callbacks run before any registered later under the same event.
    pub fn with_callbacks(
        initial: impl Into<State>,
        defs: Vec<TransitionDef>,
        callbacks: Vec<(String, Callback)>,
    ) -> Result<Self, FsmError> {
        let mut machine = Self::new(initial, defs)?;
        for (event, callback) in callbacks {
            machine.add_callback(&event, callback)?;
        }
        Ok(machine)
    }

    /// Creates a machine from a JSON array of transition descriptors.
    pub fn from_json(initial: impl Into<State>, defs: &Value) -> Result<Self, FsmError> {
        let defs: Vec<TransitionDef> = serde_json::from_value(defs.clone())?;
        Self::new(initial, defs)
    }

    /// Registers one transition.
    ///
    /// Fails with [`FsmError::IllegalName`] if the name is empty,
    /// reserved, `on_`- or `before_`-prefixed (either prefix collides
    /// with callback event naming), or if `(source, name)` is already
    /// registered. Re-registering the identical triple is rejected too;
    /// silent redefinition is never allowed. A failed registration
    /// leaves the table, the per-source index, and `possible_states`
    /// untouched.
    pub fn add_transition(&mut self, def: TransitionDef) -> Result<(), FsmError> {
        check_name(&def.name)?;

        let key = (def.source.clone(), def.name.clone());
        if let Some(existing) = self.transitions.get(&key) {
            return Err(FsmError::IllegalName {
                name: def.name.clone(),
                reason: format!(
                    "an edge from '{}' to '{}' already exists under this name",
                    def.source, existing
                ),
            });
        }

        self.possible_states.insert(def.source.clone());
        self.possible_states.insert(def.destination.clone());
        self.source_to_names
            .entry(def.source.clone())
            .or_default()
            .insert(def.name.clone());
        self.transitions.insert(key, def.destination);

        Ok(())
    }

    /// Triggers a transition by name with an empty payload.
    ///
    /// See [`Machine::trigger_with`].
    pub fn trigger(&mut self, name: &str) -> Result<TriggerResult, FsmError> {
        let mut payload = Value::Null;
        self.trigger_with(name, &mut payload)
    }

    /// Triggers a transition by name, forwarding `payload` to every
    /// callback in the `on_before_<name>` and `on_<name>` chains.
    ///
    /// Fails with [`FsmError::IllegalTransition`] if the current state
    /// has no edge under `name`; no state mutation and no callback
    /// invocation happens in that case.
    ///
    /// Guards run strictly before the state mutation and short-circuit
    /// at the first veto; `on_<name>` callbacks run strictly after it.
    /// When several `on_<name>` callbacks are registered only the last
    /// return value is reported, but the side effects of all of them
    /// are applied.
    pub fn trigger_with(
        &mut self,
        name: &str,
        payload: &mut Value,
    ) -> Result<TriggerResult, FsmError> {
        let key = (self.state.clone(), name.to_string());
        let to_state = match self.transitions.get(&key) {
            Some(destination) => destination.clone(),
            None => {
                return Err(FsmError::IllegalTransition {
                    name: name.to_string(),
                    state: self.state.to_string(),
                })
            }
        };
        let from_state = self.state.clone();

        if let Some(guards) = self.callbacks.get_mut(&format!("on_before_{name}")) {
            for guard in guards.iter_mut() {
                let verdict = guard(payload);
                if matches!(verdict, Some(Value::Bool(false))) {
                    tracing::debug!(trigger = name, state = %from_state, "transition vetoed");
                    return Ok(TriggerResult {
                        from_state,
                        to_state,
                        applied: false,
                        value: verdict,
                    });
                }
            }
        }

        self.state = to_state.clone();
        tracing::debug!(trigger = name, from = %from_state, to = %to_state, "transition applied");

        let mut value = None;
        if let Some(chain) = self.callbacks.get_mut(&format!("on_{name}")) {
            for callback in chain.iter_mut() {
                value = callback(payload);
            }
        }

        Ok(TriggerResult {
            from_state,
            to_state,
            applied: true,
            value,
        })
    }

    /// Registers an additional callback for `event`.
    ///
    /// `event` must be `on_<name>` or `on_before_<name>` for a
    /// transition name already known to the machine; otherwise
    /// [`FsmError::IllegalCallback`]. The check happens at call time: a
    /// transition added later does not revive a previously rejected
    /// event name. Callbacks for the same event run in registration
    /// order.
    pub fn add_callback<F>(&mut self, event: &str, callback: F) -> Result<(), FsmError>
    where
        F: FnMut(&mut Value) -> Option<Value> + 'static,
    {
        let name = event
            .strip_prefix("on_before_")
            .or_else(|| event.strip_prefix("on_"));

        let known = match name {
            Some(name) => self.transitions.keys().any(|(_, n)| n == name),
            None => false,
        };
        if !known {
            return Err(FsmError::IllegalCallback {
                event: event.to_string(),
            });
        }

        self.callbacks
            .entry(event.to_string())
            .or_default()
            .push(Box::new(callback));

        Ok(())
    }

    /// Returns the current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns true if the current state equals `state`.
    pub fn is_state(&self, state: &str) -> bool {
        self.state.as_str() == state
    }

    /// Returns true if `name` can be triggered from the current state.
    pub fn can(&self, name: &str) -> bool {
        self.transitions
            .contains_key(&(self.state.clone(), name.to_string()))
    }

    /// Forces the current state, bypassing transitions and callbacks.
    ///
    /// Intended for restoring a saved session; during play, state
    /// changes should go through [`Machine::trigger`].
    pub fn set_state(&mut self, state: impl Into<State>) {
        self.state = state.into();
    }

    /// Read-only view of the transition table.
    pub fn transitions(&self) -> &HashMap<(State, String), State> {
        &self.transitions
    }

    /// Every state appearing as a source or destination of a
    /// registered transition.
    pub fn possible_states(&self) -> &HashSet<State> {
        &self.possible_states
    }

    /// Names triggerable from `state`. Empty for unknown or terminal
    /// states.
    pub fn triggers_from(&self, state: &str) -> HashSet<&str> {
        self.source_to_names
            .get(&State::from(state))
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Names triggerable from the current state.
    pub fn available_triggers(&self) -> HashSet<&str> {
        self.triggers_from(self.state.as_str())
    }
}

fn check_name(name: &str) -> Result<(), FsmError> {
    if name.is_empty() {
        return Err(FsmError::IllegalName {
            name: name.to_string(),
            reason: "transition names must not be empty".to_string(),
        });
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(FsmError::IllegalName {
            name: name.to_string(),
            reason: "name is reserved by the machine".to_string(),
        });
    }
    if name.starts_with("on_") {
        return Err(FsmError::IllegalName {
            name: name.to_string(),
            reason: "names starting with 'on_' collide with callback event names".to_string(),
        });
    }
    // A transition 'before_save' would make the event 'on_before_save'
    // ambiguous: after-callback for it, or guard for 'save'.
    if name.starts_with("before_") {
        return Err(FsmError::IllegalName {
            name: name.to_string(),
            reason: "names starting with 'before_' make callback event names ambiguous"
                .to_string(),
        });
    }
    Ok(())
}
