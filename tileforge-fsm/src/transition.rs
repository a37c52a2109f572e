//! State values and transition descriptors.
//!
//! Transition descriptors use a JSON form so state graphs can live in
//! data files:
//!
//! ```json
//! [
//!   {"name": "open",   "source": "closed", "destination": "opened"},
//!   {"name": "close",  "source": "opened", "destination": "closed"},
//!   {"name": "lock",   "source": "closed", "destination": "locked"},
//!   {"name": "unlock", "source": "locked", "destination": "closed"}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state value: an opaque, comparable identifier for one mode of a
/// machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(pub String);

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, directed edge between exactly one source state and one
/// destination state.
///
/// Several descriptors may share a `name` as long as each has a
/// distinct `source` (many-sources-to-one-name fan-in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDef {
    /// Trigger name.
    pub name: String,

    /// State the edge leaves from.
    pub source: State,

    /// State the edge arrives at.
    pub destination: State,
}

impl TransitionDef {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<State>,
        destination: impl Into<State>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}
