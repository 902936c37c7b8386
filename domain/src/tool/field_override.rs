//! Configured field overrides for the workflow input item
//!
//! An override is a fixed `(name, kind, raw value)` tuple. The kind alone
//! decides how the value is evaluated:
//!
//! | Kind | Raw value starting with `=` |
//! |------|-----------------------------|
//! | `object` | markers stripped, stored unevaluated |
//! | anything else | left to the merge transform |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leading sigil marking a value as a deferred expression.
pub const EXPRESSION_MARKER: char = '=';

/// Declared type of an override value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(FieldKind::String),
            "number" => Ok(FieldKind::Number),
            "boolean" => Ok(FieldKind::Boolean),
            "array" => Ok(FieldKind::Array),
            "object" => Ok(FieldKind::Object),
            other => Err(format!(
                "Invalid field type '{}'. Valid values: string, number, boolean, array, object",
                other
            )),
        }
    }
}

/// One configured input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverride {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
}

impl FieldOverride {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }

    /// Whether the raw value carries an expression marker.
    pub fn is_expression(&self) -> bool {
        self.value.starts_with(EXPRESSION_MARKER)
    }

    /// For `object` overrides marked as expressions, the raw value with all
    /// leading markers removed. These bypass evaluation entirely.
    pub fn unevaluated_object_value(&self) -> Option<&str> {
        (self.kind == FieldKind::Object && self.is_expression())
            .then(|| strip_expression_markers(&self.value))
    }
}

/// Remove every leading [`EXPRESSION_MARKER`].
pub fn strip_expression_markers(value: &str) -> &str {
    value.trim_start_matches(EXPRESSION_MARKER)
}
