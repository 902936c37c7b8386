//! Execution Delegate use case
//!
//! Hands the composed item to the execution engine and wraps any engine
//! failure with the identity of the invoking tool. Never retries.

use crate::ports::workflow_executor::WorkflowExecutor;
use std::sync::Arc;
use toolbridge_domain::{BridgeError, ExecutionResult, WorkflowItem, WorkflowReference};
use tracing::{info, warn};

pub struct ExecutionDelegate {
    executor: Arc<dyn WorkflowExecutor>,
    /// Name of the tool on whose behalf the engine runs
    node: String,
}

impl ExecutionDelegate {
    pub fn new(executor: Arc<dyn WorkflowExecutor>, node: impl Into<String>) -> Self {
        Self {
            executor,
            node: node.into(),
        }
    }

    pub async fn run(
        &self,
        reference: &WorkflowReference,
        item: WorkflowItem,
    ) -> Result<ExecutionResult, BridgeError> {
        info!(node = %self.node, workflow = %reference.describe(), "Executing sub-workflow");

        self.executor
            .execute(reference, vec![item])
            .await
            .map_err(|e| {
                warn!(node = %self.node, error = %e, "Sub-workflow execution failed");
                BridgeError::execution_engine(e.to_string(), self.node.clone())
            })
    }
}
