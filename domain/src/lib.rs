//! Domain layer for toolbridge
//!
//! This crate contains the core types of the workflow tool bridge.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Workflow Tool
//!
//! A sub-workflow exposed to an agent as a single `query → text` tool:
//!
//! - **WorkflowReference**: which workflow runs (stored id or inline definition)
//! - **FieldOverride**: configured fields merged into the input item
//! - **InvocationOutcome**: success or failure, always collapsed to text
//!
//! ## Provenance
//!
//! Every invocation is paired with a [`TraceIndex`] so its input and output
//! events can be correlated regardless of completion order.

pub mod core;
pub mod tool;
pub mod util;
pub mod workflow;

// Re-export commonly used types
pub use core::error::BridgeError;
pub use tool::{
    entities::{ToolDefinition, ToolParameter},
    field_override::{EXPRESSION_MARKER, FieldKind, FieldOverride, strip_expression_markers},
    traits::AgentTool,
    value_objects::{InvocationOutcome, TraceIndex},
};
pub use util::{PathSegment, json_type_name, lookup};
pub use workflow::{
    items::{ExecutionResult, FieldMap, WorkflowItem},
    reference::{WorkflowReference, WorkflowSource},
};
