//! Schema error types.

use crate::token::Token;
use thiserror::Error;

/// Errors from schema matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A value token did not match the schema token at the same
    /// position.
    #[error("unexpected token {got:?} (expected {expected:?})")]
    UnexpectedToken { expected: Token, got: Token },

    /// The value's token stream is shorter or longer than the schema's.
    #[error("token stream length mismatch: schema has {expected} tokens, value has {got}")]
    LengthMismatch { expected: usize, got: usize },
}
