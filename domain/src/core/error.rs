//! Domain error types

use serde_json::{Value, json};
use thiserror::Error;

/// Failures that can occur while a workflow tool is running.
///
/// None of these ever cross the tool boundary as errors: the adapter folds
/// them into a `There was an error: "..."` text and records them in the
/// output provenance event.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// Malformed or missing workflow configuration (e.g. invalid inline JSON)
    #[error("{0}")]
    Configuration(String),

    /// The delegated workflow execution itself failed
    #[error("{message}")]
    ExecutionEngine { message: String, node: String },

    /// The workflow result did not contain the configured property
    #[error("The workflow did not return an item with the property '{property}'")]
    MissingResponseField { property: String },

    /// The extracted value cannot be turned into text
    #[error("The response property should be a string, but it is {}", with_article(.type_name))]
    InvalidResponseType { type_name: String },
}

impl BridgeError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn execution_engine(message: impl Into<String>, node: impl Into<String>) -> Self {
        Self::ExecutionEngine {
            message: message.into(),
            node: node.into(),
        }
    }

    pub fn missing_response_field(property: impl Into<String>) -> Self {
        Self::MissingResponseField {
            property: property.into(),
        }
    }

    pub fn invalid_response_type(type_name: impl Into<String>) -> Self {
        Self::InvalidResponseType {
            type_name: type_name.into(),
        }
    }

    /// Stable identifier used in provenance records.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::Configuration(_) => "configuration",
            BridgeError::ExecutionEngine { .. } => "execution_engine",
            BridgeError::MissingResponseField { .. } => "missing_response_field",
            BridgeError::InvalidResponseType { .. } => "invalid_response_type",
        }
    }

    /// Structured form written to the output provenance event.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let BridgeError::ExecutionEngine { node, .. } = self {
            payload["node"] = Value::String(node.clone());
        }
        payload
    }
}

fn with_article(type_name: &str) -> String {
    match type_name {
        "null" => "null".to_string(),
        name if name.starts_with(['a', 'e', 'i', 'o', 'u']) => format!("an {}", name),
        name => format!("a {}", name),
    }
}
