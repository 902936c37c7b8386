//! Workflow tool configuration.
//!
//! [`WorkflowToolConfig`] is the data surface of one tool: how it is named
//! and described to the agent, which workflow it runs, which result property
//! becomes the response, and which extra fields are merged into the input.
//!
//! Only the static part (name, description, response property) is checked
//! when the tool is built. The workflow source is resolved per invocation, so
//! a malformed inline workflow surfaces as a textual error to the agent
//! instead of failing construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolbridge_domain::{FieldOverride, ToolDefinition, WorkflowSource};

/// Property read from the first result item when none is configured.
pub const DEFAULT_RESPONSE_PROPERTY: &str = "response";

/// Faults in the static tool configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolSetupError {
    #[error("tool name cannot be empty")]
    EmptyName,

    #[error("tool name '{0}' may only contain letters, digits, '_' and '-'")]
    InvalidName(String),

    #[error("tool '{0}' needs a description")]
    EmptyDescription(String),

    #[error("tool '{0}' has an empty response property name")]
    EmptyResponseProperty(String),
}

/// Configuration of a single workflow tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowToolConfig {
    pub name: String,
    pub description: String,
    pub source: WorkflowSource,
    /// Stored workflow identifier (`source = database`)
    pub workflow_id: Option<String>,
    /// Inline workflow document (`source = parameter`)
    pub workflow_json: Option<String>,
    pub response_property_name: String,
    /// Extra input fields, applied in order
    pub fields: Vec<FieldOverride>,
}

impl Default for WorkflowToolConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            source: WorkflowSource::Database,
            workflow_id: None,
            workflow_json: None,
            response_property_name: DEFAULT_RESPONSE_PROPERTY.to_string(),
            fields: Vec::new(),
        }
    }
}

impl WorkflowToolConfig {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_workflow_id(mut self, id: impl Into<String>) -> Self {
        self.source = WorkflowSource::Database;
        self.workflow_id = Some(id.into());
        self
    }

    pub fn with_workflow_json(mut self, document: impl Into<String>) -> Self {
        self.source = WorkflowSource::Parameter;
        self.workflow_json = Some(document.into());
        self
    }

    pub fn with_response_property(mut self, name: impl Into<String>) -> Self {
        self.response_property_name = name.into();
        self
    }

    pub fn with_field(mut self, field: FieldOverride) -> Self {
        self.fields.push(field);
        self
    }

    /// Check the static configuration and build the agent-facing definition.
    pub fn definition(&self) -> Result<ToolDefinition, ToolSetupError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ToolSetupError::EmptyName);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ToolSetupError::InvalidName(name.to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(ToolSetupError::EmptyDescription(name.to_string()));
        }
        if self.response_property_name.trim().is_empty() {
            return Err(ToolSetupError::EmptyResponseProperty(name.to_string()));
        }

        Ok(ToolDefinition::query_tool(name, self.description.trim()))
    }
}
