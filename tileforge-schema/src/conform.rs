//! Loose structural containment checks.

use serde_json::Value;

/// Returns true if `data` structurally conforms to `schema`.
///
/// Unlike [`Schema`](crate::Schema) matching, this check is a loose
/// containment probe for digging into loaded data:
///
/// - an object schema requires every key to be present in the data,
///   with each value conforming recursively;
/// - an array schema is a conjunction: every item must conform, applied
///   per element when the data is an array and to the data itself
///   otherwise;
/// - a scalar schema requires the data to contain it (array membership,
///   substring, object key, or plain equality).
pub fn conforms(data: &Value, schema: &Value) -> bool {
    match schema {
        Value::Object(entries) => entries
            .iter()
            .all(|(key, sub)| match data.get(key) {
                Some(inner) => conforms(inner, sub),
                None => false,
            }),
        Value::Array(items) => match data {
            Value::Array(elements) => items
                .iter()
                .all(|sub| elements.iter().any(|element| conforms(element, sub))),
            _ => items.iter().all(|sub| conforms(data, sub)),
        },
        scalar => contains(data, scalar),
    }
}

/// Containment of a scalar in a value: array membership, substring for
/// strings, key presence for objects, equality otherwise.
fn contains(data: &Value, needle: &Value) -> bool {
    match data {
        Value::Array(elements) => elements.iter().any(|element| element == needle),
        Value::String(s) => match needle.as_str() {
            Some(sub) => s.contains(sub),
            None => false,
        },
        Value::Object(entries) => match needle.as_str() {
            Some(key) => entries.contains_key(key),
            None => false,
        },
        _ => data == needle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_schema_requires_keys() {
        let data = json!({"name": "grass", "walkable": true});
        assert!(conforms(&data, &json!({"name": "grass"})));
        assert!(conforms(&data, &json!({"walkable": true})));
        assert!(!conforms(&data, &json!({"name": "water"})));
        assert!(!conforms(&data, &json!({"cost": 1})));
    }

    #[test]
    fn test_nested_object_schema() {
        let data = json!({"tile": {"layers": ["ground", "decal"]}});
        assert!(conforms(&data, &json!({"tile": {"layers": "ground"}})));
        assert!(!conforms(&data, &json!({"tile": {"layers": "roof"}})));
    }

    #[test]
    fn test_array_schema_is_conjunction_over_elements() {
        let data = json!([{"id": 1}, {"id": 2, "boss": true}]);
        // Some element must satisfy each item of the schema array.
        assert!(conforms(&data, &json!([{"id": 1}, {"boss": true}])));
        assert!(!conforms(&data, &json!([{"id": 3}])));
    }

    #[test]
    fn test_array_schema_against_scalar_data() {
        assert!(conforms(&json!("waterfall"), &json!(["water", "fall"])));
        assert!(!conforms(&json!("waterfall"), &json!(["water", "fire"])));
    }

    #[test]
    fn test_scalar_schema_membership() {
        assert!(conforms(&json!(["a", "b"]), &json!("a")));
        assert!(!conforms(&json!(["a", "b"]), &json!("c")));
    }

    #[test]
    fn test_scalar_schema_substring() {
        assert!(conforms(&json!("hello world"), &json!("world")));
        assert!(!conforms(&json!("hello world"), &json!("mars")));
    }

    #[test]
    fn test_scalar_schema_object_key() {
        assert!(conforms(&json!({"hp": 10}), &json!("hp")));
        assert!(!conforms(&json!({"hp": 10}), &json!("mp")));
    }

    #[test]
    fn test_scalar_schema_equality() {
        assert!(conforms(&json!(7), &json!(7)));
        assert!(!conforms(&json!(7), &json!(8)));
        assert!(conforms(&json!(true), &json!(true)));
    }
}
