//! Workflow tool configuration from TOML (`[tools.<name>]` sections)
//!
//! Each table defines one tool; the table key is the tool name.
//!
//! ```toml
//! [tools.weather]
//! description = "Looks up the current weather for a city"
//! source = "database"            # or "parameter"
//! workflow_id = "42"             # source = database
//! # workflow_json = '{...}'      # source = parameter
//! response_property_name = "response"
//!
//! [[tools.weather.fields]]
//! name = "units"
//! type = "string"
//! value = "metric"
//! ```

use serde::{Deserialize, Serialize};
use toolbridge_application::{DEFAULT_RESPONSE_PROPERTY, WorkflowToolConfig};
use toolbridge_domain::{FieldOverride, WorkflowSource};

/// Raw workflow tool configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkflowToolConfig {
    /// Description the agent reasons over
    pub description: String,
    /// Where the workflow comes from
    pub source: WorkflowSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_json: Option<String>,
    /// Property of the first result item returned to the agent
    pub response_property_name: String,
    /// Extra input fields, in order
    pub fields: Vec<FieldOverride>,
}

impl Default for FileWorkflowToolConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            source: WorkflowSource::Database,
            workflow_id: None,
            workflow_json: None,
            response_property_name: DEFAULT_RESPONSE_PROPERTY.to_string(),
            fields: Vec::new(),
        }
    }
}

impl FileWorkflowToolConfig {
    /// Convert into the application config for the tool called `name`.
    pub fn to_tool_config(&self, name: &str) -> WorkflowToolConfig {
        WorkflowToolConfig {
            name: name.to_string(),
            description: self.description.clone(),
            source: self.source,
            workflow_id: self.workflow_id.clone(),
            workflow_json: self.workflow_json.clone(),
            response_property_name: self.response_property_name.clone(),
            fields: self.fields.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_tool_uses_defaults() {
        let tool: FileWorkflowToolConfig = toml::from_str(r#"description = "d""#).unwrap();
        assert_eq!(tool.source, WorkflowSource::Database);
        assert_eq!(tool.response_property_name, "response");
        assert!(tool.fields.is_empty());
    }

    #[test]
    fn test_to_tool_config_carries_name() {
        let tool = FileWorkflowToolConfig {
            description: "d".into(),
            workflow_id: Some("9".into()),
            ..Default::default()
        };
        let config = tool.to_tool_config("lookup");
        assert_eq!(config.name, "lookup");
        assert_eq!(config.workflow_id.as_deref(), Some("9"));
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        let result: Result<FileWorkflowToolConfig, _> = toml::from_str(r#"source = "url""#);
        assert!(result.is_err());
    }
}
