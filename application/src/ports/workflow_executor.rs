//! Workflow Executor port
//!
//! Defines the boundary to the external execution engine that actually runs
//! workflow graphs.

use async_trait::async_trait;
use thiserror::Error;
use toolbridge_domain::{ExecutionResult, WorkflowItem, WorkflowReference};

/// Errors reported by an execution engine.
///
/// Every variant carries a message the tool adapter can show to the agent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("{0}")]
    Failed(String),

    #[error("Could not reach execution engine: {0}")]
    Transport(String),

    #[error("Execution engine responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Execution engine returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for running a sub-workflow.
///
/// Implementations must not retry, cache, or time out on their own.
#[async_trait]
pub trait WorkflowExecutor: Send + Sync {
    /// Run `reference` against `items` and return the engine's raw result.
    async fn execute(
        &self,
        reference: &WorkflowReference,
        items: Vec<WorkflowItem>,
    ) -> Result<ExecutionResult, EngineError>;
}
