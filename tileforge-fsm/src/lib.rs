//! # tileforge-fsm
//!
//! Finite-state-machine engine for tileforge.
//!
//! This crate provides:
//! - Transition descriptors, registrable at construction or at runtime
//! - Invocation of transitions by name, validated against the current state
//! - Guard callbacks (`on_before_<name>`) that can veto a transition
//! - Lifecycle callbacks (`on_<name>`) that run after the state change
//!
//! The machine is open-ended: states and transition names are inferred
//! purely from the registered transitions, so a game can extend a live
//! machine as new mechanics unlock.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::FsmError;
pub use machine::{Callback, Machine, TriggerResult};
pub use transition::{State, TransitionDef};
