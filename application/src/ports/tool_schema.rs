//! Tool schema conversion port.
//!
//! Separates "which tools exist" (application) from "how to serialize them for
//! an agent framework" (infrastructure).

use toolbridge_domain::ToolDefinition;

/// Port for converting tool definitions to provider-neutral JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert several tools to a JSON Schema array (sorted by name).
    fn tools_schema(&self, tools: &[&ToolDefinition]) -> Vec<serde_json::Value> {
        let mut sorted = tools.to_vec();
        sorted.sort_by_key(|t| &t.name);
        sorted.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
