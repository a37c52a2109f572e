//! Schemas and named schema collections.

use crate::error::SchemaError;
use crate::token::{push_value, tokenize, Token};
use serde_json::Value;

/// A schema described as a tree: literal JSON values, wildcards for
/// scalar classes, and nested lists/maps.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Exactly this JSON value.
    Exact(Value),
    /// Any string.
    AnyString,
    /// Any integer.
    AnyInteger,
    /// Any integer or float.
    AnyNumber,
    /// Any boolean.
    AnyBool,
    /// Any scalar (string, number, boolean, or null).
    AnyScalar,
    /// A list with exactly these element patterns, in order.
    List(Vec<Pattern>),
    /// A map with exactly these keys and value patterns.
    Map(Vec<(String, Pattern)>),
}

impl Pattern {
    /// A literal value pattern.
    pub fn exact(value: impl Into<Value>) -> Self {
        Pattern::Exact(value.into())
    }

    /// A list pattern.
    pub fn list(items: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::List(items.into_iter().collect())
    }

    /// A map pattern.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Pattern)>) -> Self {
        Pattern::Map(
            entries
                .into_iter()
                .map(|(key, pattern)| (key.into(), pattern))
                .collect(),
        )
    }

    fn push_tokens(&self, out: &mut Vec<Token>) {
        match self {
            Pattern::Exact(value) => push_value(value, out),
            Pattern::AnyString => out.push(Token::AnyString),
            Pattern::AnyInteger => out.push(Token::AnyInteger),
            Pattern::AnyNumber => out.push(Token::AnyNumber),
            Pattern::AnyBool => out.push(Token::AnyBool),
            Pattern::AnyScalar => out.push(Token::AnyScalar),
            Pattern::List(items) => {
                out.push(Token::ListStart);
                for item in items {
                    item.push_tokens(out);
                }
                out.push(Token::ListEnd);
            }
            Pattern::Map(entries) => {
                out.push(Token::MapStart);
                let mut entries: Vec<&(String, Pattern)> = entries.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                for (key, pattern) in entries {
                    out.push(Token::Key(key.clone()));
                    pattern.push_tokens(out);
                }
                out.push(Token::MapEnd);
            }
        }
    }
}

/// A compiled schema: the pattern's token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    tokens: Vec<Token>,
}

impl Schema {
    /// Compiles a pattern.
    pub fn new(pattern: Pattern) -> Self {
        let mut tokens = Vec::new();
        pattern.push_tokens(&mut tokens);
        Self { tokens }
    }

    /// Returns true if `value` matches this schema.
    pub fn matches(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }

    /// Matches `value`, reporting the first mismatch.
    ///
    /// The two token streams must have the same length; a trailing
    /// remainder on either side is a mismatch, not a prefix match.
    pub fn check(&self, value: &Value) -> Result<(), SchemaError> {
        let actual = tokenize(value);
        if actual.len() != self.tokens.len() {
            return Err(SchemaError::LengthMismatch {
                expected: self.tokens.len(),
                got: actual.len(),
            });
        }
        for (expected, got) in self.tokens.iter().zip(&actual) {
            if !expected.matches(got) {
                return Err(SchemaError::UnexpectedToken {
                    expected: expected.clone(),
                    got: got.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A named collection of schemas, matched in definition order.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    schemas: Vec<(String, Schema)>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named schema. Builder style:
    ///
    /// ```
    /// use tileforge_schema::{Pattern, SchemaSet};
    ///
    /// let set = SchemaSet::new()
    ///     .define("pair", Pattern::list([Pattern::AnyInteger, Pattern::AnyInteger]))
    ///     .define("tag", Pattern::AnyString);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn define(mut self, name: impl Into<String>, pattern: Pattern) -> Self {
        self.schemas.push((name.into(), Schema::new(pattern)));
        self
    }

    /// Looks up a schema by name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, schema)| schema)
    }

    /// Returns the name of the first schema `value` matches, in
    /// definition order, or `None`.
    pub fn match_value(&self, value: &Value) -> Option<&str> {
        let actual = tokenize(value);
        self.schemas
            .iter()
            .find(|(_, schema)| {
                schema.tokens.len() == actual.len()
                    && schema
                        .tokens
                        .iter()
                        .zip(&actual)
                        .all(|(expected, got)| expected.matches(got))
            })
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
