//! Application layer for toolbridge
//!
//! This crate contains use cases, port definitions, and tool configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_RESPONSE_PROPERTY, ToolSetupError, WorkflowToolConfig};
pub use ports::{
    field_merger::{FieldMerger, MergeOptions},
    provenance::{
        AI_TOOL_CHANNEL, InMemoryProvenance, NoProvenance, ProvenanceDirection, ProvenanceEvent,
        ProvenancePayload, ProvenanceRecord, ProvenanceRecorder, TraceIndexAllocator,
    },
    tool_schema::ToolSchemaPort,
    workflow_executor::{EngineError, WorkflowExecutor},
};
pub use use_cases::{
    compose_input::InputComposer,
    execute_workflow::ExecutionDelegate,
    extract_response::{extract_response, normalize_response},
    workflow_tool::{InvocationReport, WorkflowTool},
};
