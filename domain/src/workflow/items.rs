//! Items exchanged with the execution engine

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field mapping carried by an item.
pub type FieldMap = Map<String, Value>;

/// A single item flowing into or out of a workflow: `{ "json": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowItem {
    #[serde(default)]
    pub json: FieldMap,
}

impl WorkflowItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item whose only field is `query`.
    pub fn from_query(query: impl Into<String>) -> Self {
        Self::new().with_field("query", Value::String(query.into()))
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.json.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.json.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.json.get(name)
    }
}

/// Opaque result returned by the engine.
///
/// Conceptually a sequence of output branches, each a sequence of items.
/// The shape is not validated; consumers walk it with [`crate::util::lookup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionResult(Value);

impl ExecutionResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ExecutionResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_under_json_key() {
        let item = WorkflowItem::from_query("weather in Paris").with_field("units", "metric");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"json": {"query": "weather in Paris", "units": "metric"}})
        );
    }

    #[test]
    fn test_result_keeps_engine_value_verbatim() {
        let value = json!([[{"json": {"response": "blue"}}]]);
        let result = ExecutionResult::from(value.clone());
        assert_eq!(result.as_value(), &value);
    }

    #[test]
    fn test_result_deserializes_any_shape() {
        let result: ExecutionResult = serde_json::from_str(r#"{"unexpected": true}"#).unwrap();
        assert_eq!(result.as_value()["unexpected"], true);
    }
}
