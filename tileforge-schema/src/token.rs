//! Token-stream form of JSON values.
//!
//! A JSON value flattens into a stream of structural and scalar
//! tokens; matching two values is then a positional token comparison.
//! Wildcard tokens appear only in schemas and match a whole scalar
//! class instead of one literal.

use serde_json::Value;

/// One token of a flattened JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    ListStart,
    ListEnd,
    MapStart,
    MapEnd,
    /// An object key. Keys are emitted in sorted order so matching is
    /// independent of document order.
    Key(String),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// Matches any `Str` token.
    AnyString,
    /// Matches any `Int` token.
    AnyInteger,
    /// Matches any `Int` or `Float` token.
    AnyNumber,
    /// Matches any `Bool` token.
    AnyBool,
    /// Matches any scalar token.
    AnyScalar,
}

impl Token {
    /// Returns true if `actual` satisfies this schema token.
    pub fn matches(&self, actual: &Token) -> bool {
        match (self, actual) {
            (Token::AnyString, Token::Str(_)) => true,
            (Token::AnyInteger, Token::Int(_)) => true,
            (Token::AnyNumber, Token::Int(_) | Token::Float(_)) => true,
            (Token::AnyBool, Token::Bool(_)) => true,
            (
                Token::AnyScalar,
                Token::Str(_) | Token::Int(_) | Token::Float(_) | Token::Bool(_) | Token::Null,
            ) => true,
            _ => self == actual,
        }
    }
}

/// Flattens a JSON value into its token stream.
pub fn tokenize(value: &Value) -> Vec<Token> {
    let mut out = Vec::new();
    push_value(value, &mut out);
    out
}

pub(crate) fn push_value(value: &Value, out: &mut Vec<Token>) {
    match value {
        Value::Null => out.push(Token::Null),
        Value::Bool(b) => out.push(Token::Bool(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => out.push(Token::Int(i)),
            None => out.push(Token::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        Value::String(s) => out.push(Token::Str(s.clone())),
        Value::Array(items) => {
            out.push(Token::ListStart);
            for item in items {
                push_value(item, out);
            }
            out.push(Token::ListEnd);
        }
        Value::Object(map) => {
            out.push(Token::MapStart);
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                out.push(Token::Key(key.clone()));
                push_value(&map[key], out);
            }
            out.push(Token::MapEnd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_tokens() {
        assert_eq!(tokenize(&json!(null)), vec![Token::Null]);
        assert_eq!(tokenize(&json!(true)), vec![Token::Bool(true)]);
        assert_eq!(tokenize(&json!(42)), vec![Token::Int(42)]);
        assert_eq!(tokenize(&json!(1.5)), vec![Token::Float(1.5)]);
        assert_eq!(tokenize(&json!("hi")), vec![Token::Str("hi".to_string())]);
    }

    #[test]
    fn test_list_tokens() {
        assert_eq!(
            tokenize(&json!(["a", 1])),
            vec![
                Token::ListStart,
                Token::Str("a".to_string()),
                Token::Int(1),
                Token::ListEnd,
            ]
        );
    }

    #[test]
    fn test_map_keys_sorted() {
        assert_eq!(
            tokenize(&json!({"b": 2, "a": 1})),
            vec![
                Token::MapStart,
                Token::Key("a".to_string()),
                Token::Int(1),
                Token::Key("b".to_string()),
                Token::Int(2),
                Token::MapEnd,
            ]
        );
    }

    #[test]
    fn test_wildcard_matching() {
        assert!(Token::AnyString.matches(&Token::Str("x".to_string())));
        assert!(!Token::AnyString.matches(&Token::Int(1)));

        assert!(Token::AnyInteger.matches(&Token::Int(1)));
        assert!(!Token::AnyInteger.matches(&Token::Float(1.0)));

        assert!(Token::AnyNumber.matches(&Token::Int(1)));
        assert!(Token::AnyNumber.matches(&Token::Float(1.0)));

        assert!(Token::AnyBool.matches(&Token::Bool(false)));
        assert!(!Token::AnyBool.matches(&Token::Null));

        assert!(Token::AnyScalar.matches(&Token::Null));
        assert!(Token::AnyScalar.matches(&Token::Str("x".to_string())));
        assert!(!Token::AnyScalar.matches(&Token::ListStart));
    }

    #[test]
    fn test_literal_matching_is_equality() {
        assert!(Token::Int(3).matches(&Token::Int(3)));
        assert!(!Token::Int(3).matches(&Token::Int(4)));
        assert!(!Token::Str("a".to_string()).matches(&Token::Key("a".to_string())));
    }
}
