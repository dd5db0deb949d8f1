//! Recursive removal of empty values from a JSON tree.

use serde_json::Value;

/// Strip null, empty-string, empty-array and empty-object values out of the
/// tree: map entries whose cleaned value is empty are removed, and so are
/// empty elements of arrays. Booleans and numbers always survive.
/// Applying `clean` twice gives the same result as applying it once.
pub fn clean(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key, clean(val)))
                .filter(|(_, val)| !is_empty(val))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(clean)
                .filter(|item| !is_empty(item))
                .collect(),
        ),
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
