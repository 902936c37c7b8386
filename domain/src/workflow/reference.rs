//! Workflow reference resolution

use crate::core::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Where the workflow to run comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowSource {
    /// A workflow stored by the engine, addressed by identifier
    #[default]
    Database,
    /// A workflow definition supplied inline as a JSON document
    Parameter,
}

impl WorkflowSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowSource::Database => "database",
            WorkflowSource::Parameter => "parameter",
        }
    }
}

impl fmt::Display for WorkflowSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkflowSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "database" => Ok(WorkflowSource::Database),
            "parameter" => Ok(WorkflowSource::Parameter),
            other => Err(format!(
                "Invalid workflow source '{}'. Valid values: database, parameter",
                other
            )),
        }
    }
}

/// The workflow an invocation runs. Exactly one variant per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowReference {
    ById(String),
    ByInlineDefinition(Value),
}

impl WorkflowReference {
    /// Resolve the configured source into a reference.
    ///
    /// `Database` needs a non-blank identifier; `Parameter` needs a document
    /// that parses as JSON. Both failures are [`BridgeError::Configuration`].
    pub fn resolve(
        source: WorkflowSource,
        workflow_id: Option<&str>,
        workflow_json: Option<&str>,
    ) -> Result<Self, BridgeError> {
        match source {
            WorkflowSource::Database => match workflow_id.map(str::trim) {
                Some(id) if !id.is_empty() => Ok(WorkflowReference::ById(id.to_string())),
                _ => Err(BridgeError::configuration("No workflow ID configured")),
            },
            WorkflowSource::Parameter => {
                let document = workflow_json
                    .ok_or_else(|| BridgeError::configuration("No workflow JSON configured"))?;
                serde_json::from_str(document)
                    .map(WorkflowReference::ByInlineDefinition)
                    .map_err(|e| {
                        BridgeError::configuration(format!(
                            "The provided workflow is not valid JSON: \"{}\"",
                            e
                        ))
                    })
            }
        }
    }

    /// Short label for logs.
    pub fn describe(&self) -> String {
        match self {
            WorkflowReference::ById(id) => format!("workflow {}", id),
            WorkflowReference::ByInlineDefinition(_) => "inline workflow".to_string(),
        }
    }
}
