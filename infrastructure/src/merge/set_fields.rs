//! Literal field-setting transform.
//!
//! Evaluates each [`FieldOverride`] by its declared kind and writes it into
//! the item, in order, so a later override of the same name wins.
//!
//! | Kind | Evaluation |
//! |------|------------|
//! | `string` | as-is |
//! | `number` | integer, then float |
//! | `boolean` | `true` / `false`, case-insensitive |
//! | `array` / `object` | parsed as JSON |
//!
//! There is no expression engine: leading `=` markers are dropped and the
//! remainder is read literally. Values that fail to convert are kept as
//! strings. Fields listed in [`MergeOptions::raw_fields`] were stored
//! unevaluated by the composer and are written verbatim.

use async_trait::async_trait;
use serde_json::{Number, Value};
use toolbridge_application::{FieldMerger, MergeOptions};
use toolbridge_domain::{FieldKind, FieldOverride, WorkflowItem, strip_expression_markers};
use tracing::warn;

/// Merge transform setting literal override values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetFieldsMerger;

impl SetFieldsMerger {
    pub fn new() -> Self {
        Self
    }

    fn evaluate(field: &FieldOverride) -> Value {
        let raw = strip_expression_markers(&field.value);

        let converted = match field.kind {
            FieldKind::String => return Value::String(raw.to_string()),
            FieldKind::Number => parse_number(raw.trim()),
            FieldKind::Boolean => match raw.trim().to_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            FieldKind::Array => serde_json::from_str::<Value>(raw)
                .ok()
                .filter(Value::is_array),
            FieldKind::Object => serde_json::from_str::<Value>(raw)
                .ok()
                .filter(Value::is_object),
        };

        converted.unwrap_or_else(|| {
            warn!(
                field = %field.name,
                kind = %field.kind,
                value = raw,
                "Could not convert field value, keeping it as a string"
            );
            Value::String(raw.to_string())
        })
    }
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Value::from(i));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

#[async_trait]
impl FieldMerger for SetFieldsMerger {
    async fn merge(
        &self,
        base: WorkflowItem,
        overrides: &[FieldOverride],
        options: &MergeOptions,
    ) -> WorkflowItem {
        let mut item = base;

        for field in overrides {
            let value = match field.unevaluated_object_value() {
                Some(raw) if options.is_raw(&field.name) => Value::String(raw.to_string()),
                _ => Self::evaluate(field),
            };
            item.set(field.name.clone(), value);
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn merge(base: WorkflowItem, overrides: &[FieldOverride], options: MergeOptions) -> WorkflowItem {
        SetFieldsMerger::new().merge(base, overrides, &options).await
    }

    #[tokio::test]
    async fn test_include_all_keeps_query() {
        let item = merge(
            WorkflowItem::from_query("q"),
            &[FieldOverride::new("units", FieldKind::String, "metric")],
            MergeOptions::include_all(),
        )
        .await;

        assert_eq!(item.get("query"), Some(&json!("q")));
        assert_eq!(item.get("units"), Some(&json!("metric")));
    }

    #[tokio::test]
    async fn test_values_converted_by_kind() {
        let overrides = vec![
            FieldOverride::new("count", FieldKind::Number, "5"),
            FieldOverride::new("ratio", FieldKind::Number, " 0.25 "),
            FieldOverride::new("flag", FieldKind::Boolean, "TRUE"),
            FieldOverride::new("tags", FieldKind::Array, r#"["a", "b"]"#),
            FieldOverride::new("meta", FieldKind::Object, r#"{"a": 1}"#),
        ];
        let item = merge(WorkflowItem::new(), &overrides, MergeOptions::include_all()).await;

        assert_eq!(item.get("count"), Some(&json!(5)));
        assert_eq!(item.get("ratio"), Some(&json!(0.25)));
        assert_eq!(item.get("flag"), Some(&json!(true)));
        assert_eq!(item.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(item.get("meta"), Some(&json!({"a": 1})));
    }

    #[tokio::test]
    async fn test_unconvertible_values_stay_strings() {
        let overrides = vec![
            FieldOverride::new("count", FieldKind::Number, "many"),
            FieldOverride::new("flag", FieldKind::Boolean, "yes"),
            FieldOverride::new("tags", FieldKind::Array, r#"{"a": 1}"#),
        ];
        let item = merge(WorkflowItem::new(), &overrides, MergeOptions::include_all()).await;

        assert_eq!(item.get("count"), Some(&json!("many")));
        assert_eq!(item.get("flag"), Some(&json!("yes")));
        assert_eq!(item.get("tags"), Some(&json!(r#"{"a": 1}"#)));
    }

    #[tokio::test]
    async fn test_raw_object_field_kept_verbatim() {
        let base = WorkflowItem::from_query("q").with_field("extra", "{a:1}");
        let overrides = vec![FieldOverride::new("extra", FieldKind::Object, "={a:1}")];
        let item = merge(
            base,
            &overrides,
            MergeOptions::include_all().with_raw_field("extra"),
        )
        .await;

        assert_eq!(item.get("extra"), Some(&json!("{a:1}")));
    }

    #[tokio::test]
    async fn test_later_override_wins() {
        let overrides = vec![
            FieldOverride::new("extra", FieldKind::Object, "={a:1}"),
            FieldOverride::new("extra", FieldKind::String, "plain"),
        ];
        let item = merge(
            WorkflowItem::new().with_field("extra", "{a:1}"),
            &overrides,
            MergeOptions::include_all().with_raw_field("extra"),
        )
        .await;

        assert_eq!(item.get("extra"), Some(&json!("plain")));
    }

    #[tokio::test]
    async fn test_markers_stripped_for_literal_kinds() {
        let item = merge(
            WorkflowItem::new(),
            &[FieldOverride::new("count", FieldKind::Number, "==7")],
            MergeOptions::include_all(),
        )
        .await;

        assert_eq!(item.get("count"), Some(&json!(7)));
    }
}
