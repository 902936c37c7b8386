//! Tool-calling contract consumed by the agent framework.

use async_trait::async_trait;

use super::entities::ToolDefinition;

/// A named, described callable with a `query → text` contract.
///
/// `invoke` has no error channel: every failure must already be folded into
/// the returned text, because the agent's reasoning loop can only recover
/// from feedback it can read.
#[async_trait]
pub trait AgentTool: Send + Sync {
    /// Schema exposed to the agent
    fn definition(&self) -> &ToolDefinition;

    fn name(&self) -> &str {
        &self.definition().name
    }

    fn description(&self) -> &str {
        &self.definition().description
    }

    /// Run the tool for `query`. Always resolves to a string.
    async fn invoke(&self, query: &str) -> String;
}
