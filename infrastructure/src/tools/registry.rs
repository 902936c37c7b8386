//! Workflow Tool Registry
//!
//! The [`WorkflowToolRegistry`] owns every configured [`WorkflowTool`] and
//! routes invocations by name. All tools share one executor, one merger and
//! one provenance recorder, so trace indices are unique across the registry.
//!
//! # Usage
//!
//! ```ignore
//! let registry = WorkflowToolRegistry::from_configs(
//!     config.tool_configs(),
//!     Arc::new(HttpWorkflowExecutor::from_config(&config.engine)),
//!     Arc::new(SetFieldsMerger::new()),
//!     Arc::new(TracingProvenanceRecorder::new()),
//! )?;
//!
//! let report = registry.run("colors", "What color is the sky?").await?;
//! println!("{}", report.text());
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use toolbridge_application::{
    FieldMerger, InvocationReport, ProvenanceRecorder, ToolSetupError, WorkflowExecutor,
    WorkflowTool, WorkflowToolConfig,
};
use toolbridge_domain::{AgentTool, ToolDefinition};
use tracing::debug;

/// Errors from building or addressing the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Tool '{0}' is defined more than once")]
    DuplicateTool(String),

    #[error(transparent)]
    Setup(#[from] ToolSetupError),
}

/// Registry of workflow tools keyed by name.
#[derive(Default)]
pub struct WorkflowToolRegistry {
    tools: BTreeMap<String, Arc<WorkflowTool>>,
}

impl WorkflowToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every configured tool on shared collaborators.
    ///
    /// Stops at the first configuration fault.
    pub fn from_configs(
        configs: impl IntoIterator<Item = WorkflowToolConfig>,
        executor: Arc<dyn WorkflowExecutor>,
        merger: Arc<dyn FieldMerger>,
        provenance: Arc<dyn ProvenanceRecorder>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for config in configs {
            let tool = WorkflowTool::new(
                config,
                executor.clone(),
                merger.clone(),
                provenance.clone(),
            )?;
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Add a tool, rejecting a second tool with the same name.
    pub fn register(&mut self, tool: WorkflowTool) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RegistryError::DuplicateTool(name));
        }
        debug!(tool = %name, "Registered workflow tool");
        self.tools.insert(name, Arc::new(tool));
        Ok(())
    }

    /// Tool names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Tool definitions in name order.
    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// The only tool, when exactly one is registered.
    pub fn sole_tool(&self) -> Option<Arc<WorkflowTool>> {
        match self.tools.len() {
            1 => self.tools.values().next().cloned(),
            _ => None,
        }
    }

    /// Run a tool by name.
    ///
    /// Only an unknown name is an `Err`; invocation failures are reported
    /// inside the [`InvocationReport`].
    pub async fn run(&self, name: &str, query: &str) -> Result<InvocationReport, RegistryError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))?;
        Ok(tool.run(query).await)
    }

    /// Run a tool by name and return the agent-facing text.
    pub async fn invoke(&self, name: &str, query: &str) -> Result<String, RegistryError> {
        self.run(name, query).await.map(|report| report.text())
    }
}
