//! Workflow Tool use case
//!
//! [`WorkflowTool`] is the adapter an agent calls. Each invocation walks a
//! small state machine:
//!
//! ```text
//! Invoked ──▶ Running ──▶ Succeeded ─┐
//!   │            │                   ├──▶ Reported ──▶ text
//!   │            └──────▶ Failed ────┘
//!   └─ record_input → TraceIndex          record_output(index, outcome)
//! ```
//!
//! `Running` resolves the workflow reference, composes the input item, runs
//! the sub-workflow and extracts the response. Every failure in that phase,
//! including a panicking collaborator, becomes an [`InvocationOutcome::Failure`]
//! and reaches the agent as `There was an error: "..."`.

use crate::config::{ToolSetupError, WorkflowToolConfig};
use crate::ports::field_merger::FieldMerger;
use crate::ports::provenance::{ProvenanceEvent, ProvenanceRecorder};
use crate::ports::workflow_executor::WorkflowExecutor;
use crate::use_cases::compose_input::InputComposer;
use crate::use_cases::execute_workflow::ExecutionDelegate;
use crate::use_cases::extract_response::{extract_response, normalize_response};
use async_trait::async_trait;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use toolbridge_domain::util::truncate_str;
use toolbridge_domain::{
    AgentTool, BridgeError, InvocationOutcome, ToolDefinition, TraceIndex, WorkflowReference,
};
use tracing::{debug, info, warn};

/// Maximum number of query bytes echoed into diagnostic logs.
const LOG_QUERY_PREVIEW: usize = 200;

/// Result of one invocation with its correlation index.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationReport {
    pub index: TraceIndex,
    pub outcome: InvocationOutcome,
}

impl InvocationReport {
    /// The text returned to the agent.
    pub fn text(&self) -> String {
        self.outcome.text()
    }
}

/// A sub-workflow exposed as an agent tool.
pub struct WorkflowTool {
    definition: ToolDefinition,
    config: WorkflowToolConfig,
    composer: InputComposer,
    delegate: ExecutionDelegate,
    provenance: Arc<dyn ProvenanceRecorder>,
}

impl WorkflowTool {
    /// Build a tool from its configuration.
    ///
    /// Fails only on static configuration faults (name, description,
    /// response property). The workflow source is checked per invocation.
    pub fn new(
        config: WorkflowToolConfig,
        executor: Arc<dyn WorkflowExecutor>,
        merger: Arc<dyn FieldMerger>,
        provenance: Arc<dyn ProvenanceRecorder>,
    ) -> Result<Self, ToolSetupError> {
        let definition = config.definition()?;
        debug!(
            tool = %definition.name,
            source = %config.source,
            fields = config.fields.len(),
            "Workflow tool configured"
        );

        Ok(Self {
            composer: InputComposer::new(merger),
            delegate: ExecutionDelegate::new(executor, definition.name.clone()),
            definition,
            config,
            provenance,
        })
    }

    /// Run one invocation and report its outcome and trace index.
    ///
    /// Always records exactly one input and one output event.
    pub async fn run(&self, query: &str) -> InvocationReport {
        let tool = self.definition.name.as_str();

        // Invoked: the index is taken before the first suspension point
        let index = self
            .provenance
            .record_input(ProvenanceEvent::input(tool, query));
        debug!(
            tool,
            %index,
            query = truncate_str(query, LOG_QUERY_PREVIEW),
            "Tool invoked"
        );

        // Running
        let result = AssertUnwindSafe(self.execute_pipeline(query))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                Err(BridgeError::execution_engine(
                    format!("Workflow execution panicked: {}", panic_message(panic.as_ref())),
                    tool,
                ))
            });

        let outcome = InvocationOutcome::from_result(result);
        match &outcome {
            InvocationOutcome::Success { response } => {
                info!(tool, %index, bytes = response.len(), "Tool invocation succeeded");
            }
            InvocationOutcome::Failure { error } => {
                warn!(tool, %index, kind = error.kind(), error = %error, "Tool invocation failed");
            }
        }

        // Reported
        self.provenance
            .record_output(index, ProvenanceEvent::output(tool, &outcome));

        InvocationReport { index, outcome }
    }

    async fn execute_pipeline(&self, query: &str) -> Result<String, BridgeError> {
        let reference = WorkflowReference::resolve(
            self.config.source,
            self.config.workflow_id.as_deref(),
            self.config.workflow_json.as_deref(),
        )?;

        let item = self.composer.compose(query, &self.config.fields).await;
        let result = self.delegate.run(&reference, item).await?;
        let value = extract_response(&result, &self.config.response_property_name)?;

        normalize_response(value)
    }
}

#[async_trait]
impl AgentTool for WorkflowTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, query: &str) -> String {
        self.run(query).await.text()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
