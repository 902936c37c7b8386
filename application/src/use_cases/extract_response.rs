//! Response extraction and normalization.
//!
//! Only one path through the engine result is consumed:
//! first branch → first item → `json` → configured property.

use serde_json::{Number, Value};
use toolbridge_domain::{BridgeError, ExecutionResult, PathSegment, json_type_name, lookup};

/// Look up `property` on the first item of the first branch.
///
/// Any missing level is reported as [`BridgeError::MissingResponseField`].
pub fn extract_response<'a>(
    result: &'a ExecutionResult,
    property: &str,
) -> Result<&'a Value, BridgeError> {
    let path = [
        PathSegment::Index(0),
        PathSegment::Index(0),
        PathSegment::Key("json"),
        PathSegment::Key(property),
    ];
    lookup(result.as_value(), &path).ok_or_else(|| BridgeError::missing_response_field(property))
}

/// Turn the extracted value into the response text.
///
/// Strings pass through, numbers become their decimal form, and anything
/// else is [`BridgeError::InvalidResponseType`].
pub fn normalize_response(value: &Value) -> Result<String, BridgeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(decimal_form(n)),
        other => Err(BridgeError::invalid_response_type(json_type_name(other))),
    }
}

/// Whole-valued floats print without a fractional part (`42.0` → `42`).
fn decimal_form(n: &Number) -> String {
    if n.is_f64()
        && let Some(f) = n.as_f64()
        && f.fract() == 0.0
        && f >= i64::MIN as f64
        && f < i64::MAX as f64
    {
        return (f as i64).to_string();
    }
    n.to_string()
}
