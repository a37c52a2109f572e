//! # tileforge-schema
//!
//! JSON structural matching for tileforge.
//!
//! Game data files rarely carry explicit type tags; what they do carry
//! is shape. This crate classifies JSON values by shape:
//!
//! - [`Schema`] flattens a [`Pattern`] into a token stream and matches
//!   candidate values token by token, with wildcard tokens standing in
//!   for "any string", "any integer", and so on.
//! - [`SchemaSet`] holds named schemas and reports which one a value
//!   matches first.
//! - [`conforms`] is a looser structural containment check for probing
//!   deep into loaded data.
//!
//! ```
//! use serde_json::json;
//! use tileforge_schema::{Pattern, SchemaSet};
//!
//! let schemas = SchemaSet::new()
//!     .define(
//!         "greeting",
//!         Pattern::list([
//!             Pattern::exact("hello"),
//!             Pattern::map([("world", Pattern::AnyString)]),
//!         ]),
//!     )
//!     .define(
//!         "scored",
//!         Pattern::list([
//!             Pattern::exact("hello"),
//!             Pattern::map([("world", Pattern::AnyInteger)]),
//!         ]),
//!     );
//!
//! assert_eq!(schemas.match_value(&json!(["hello", {"world": "Hey"}])), Some("greeting"));
//! assert_eq!(schemas.match_value(&json!(["hello", {"world": 123}])), Some("scored"));
//! assert_eq!(schemas.match_value(&json!(["hey there", {"world": 123}])), None);
//! ```

pub mod conform;
pub mod error;
pub mod schema;
pub mod token;

pub use conform::conforms;
pub use error::SchemaError;
pub use schema::{Pattern, Schema, SchemaSet};
pub use token::Token;
