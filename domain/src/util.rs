//! Shared utility functions.

use serde_json::Value;

/// One step of a [`lookup`] path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Position in an array
    Index(usize),
    /// Key in an object
    Key(&'a str),
}

/// Walk `path` through a JSON tree, returning `None` as soon as a level is
/// missing or has the wrong shape.
///
/// Never panics: indexing a non-array, keying a non-object, or stepping
/// through `null` all yield `None`. A `null` at the final position is
/// returned as `Some(&Value::Null)`.
pub fn lookup<'a>(value: &'a Value, path: &[PathSegment<'_>]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match segment {
        PathSegment::Index(i) => current.as_array().and_then(|items| items.get(*i)),
        PathSegment::Key(key) => current.as_object().and_then(|map| map.get(*key)),
    })
}

/// Runtime type name of a JSON value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RESPONSE_PATH: [PathSegment<'static>; 4] = [
        PathSegment::Index(0),
        PathSegment::Index(0),
        PathSegment::Key("json"),
        PathSegment::Key("response"),
    ];

    #[test]
    fn lookup_finds_nested_field() {
        let value = json!([[{"json": {"response": "blue"}}]]);
        assert_eq!(lookup(&value, &RESPONSE_PATH), Some(&json!("blue")));
    }

    #[test]
    fn lookup_missing_levels_are_absent() {
        assert_eq!(lookup(&json!([]), &RESPONSE_PATH), None);
        assert_eq!(lookup(&json!([[]]), &RESPONSE_PATH), None);
        assert_eq!(lookup(&json!([[{}]]), &RESPONSE_PATH), None);
        assert_eq!(lookup(&json!([[{"json": {}}]]), &RESPONSE_PATH), None);
        assert_eq!(lookup(&json!(null), &RESPONSE_PATH), None);
    }

    #[test]
    fn lookup_wrong_shapes_are_absent() {
        assert_eq!(lookup(&json!({"0": [1]}), &RESPONSE_PATH), None);
        assert_eq!(lookup(&json!([[{"json": "text"}]]), &RESPONSE_PATH), None);
        assert_eq!(lookup(&json!([[{"json": null}]]), &RESPONSE_PATH), None);
    }

    #[test]
    fn lookup_returns_final_null() {
        let value = json!([[{"json": {"response": null}}]]);
        assert_eq!(lookup(&value, &RESPONSE_PATH), Some(&Value::Null));
    }

    #[test]
    fn lookup_empty_path_is_identity() {
        let value = json!({"a": 1});
        assert_eq!(lookup(&value, &[]), Some(&value));
    }

    #[test]
    fn type_names() {
        assert_eq!(json_type_name(&json!({"nested": true})), "object");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!(false)), "boolean");
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(1.5)), "number");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        let s = "あのね";
        assert_eq!(truncate_str(s, 4), "あ");
        assert_eq!(truncate_str(s, 6), "あの");
        assert_eq!(truncate_str("hi", 10), "hi");
    }
}
