//! # tileforge
//!
//! A support framework for 2D tile games.
//!
//! The pieces here are the plumbing every tile game grows sooner or
//! later, kept engine-agnostic so they slot under whatever rendering
//! loop you run:
//!
//! - [`fsm`] - a finite state machine with runtime transition
//!   registration, vetoable before-callbacks, and after-callbacks.
//! - [`dispatch`] - an event dispatcher that routes events to listeners
//!   scoped to the machine's current state.
//! - [`assets`] - a weak-reference asset cache and loader front end, so
//!   assets are shared while used and reloaded once dropped.
//! - [`schema`] - token-stream schema matching for classifying loaded
//!   JSON data by shape.
//! - [`text`] - character-cell word wrapping for dialog and HUD boxes.
//!
//! ```
//! use tileforge::{Machine, TransitionDef};
//!
//! let mut machine = Machine::new(
//!     "closed",
//!     vec![
//!         TransitionDef::new("open", "closed", "opened"),
//!         TransitionDef::new("close", "opened", "closed"),
//!     ],
//! )
//! .unwrap();
//!
//! machine.trigger("open").unwrap();
//! assert!(machine.is_state("opened"));
//! ```

pub use tileforge_assets as assets;
pub use tileforge_dispatch as dispatch;
pub use tileforge_fsm as fsm;
pub use tileforge_schema as schema;
pub use tileforge_text as text;

pub use tileforge_assets::{AssetLoader, AssetManager, JsonLoader, JsonManager, WeakCache};
pub use tileforge_dispatch::{listener, Dispatcher, Event, EventKind, HasMachine, Listener};
pub use tileforge_fsm::{Callback, FsmError, Machine, State, TransitionDef, TriggerResult};
pub use tileforge_schema::{conforms, Pattern, Schema, SchemaSet};
pub use tileforge_text::wrap;
