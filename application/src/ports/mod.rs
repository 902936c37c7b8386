//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement:
//! the execution engine, the field-merge transform, the provenance log and
//! the tool schema serializer.

pub mod field_merger;
pub mod provenance;
pub mod tool_schema;
pub mod workflow_executor;
