//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Name of the single parameter every workflow tool accepts.
pub const QUERY_PARAMETER: &str = "query";

/// Definition of a tool that can be used by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "weather_lookup")
    pub name: String,
    /// Human-readable description the agent reasons over
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Definition with the single required `query` string parameter.
    pub fn query_tool(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description).with_parameter(ToolParameter::new(
            QUERY_PARAMETER,
            "Natural-language query passed to the workflow",
            true,
        ))
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }
}
