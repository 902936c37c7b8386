//! Workflow tool registry and agent-facing schema
//!
//! [`WorkflowToolRegistry`] builds one [`WorkflowTool`](toolbridge_application::WorkflowTool)
//! per configured entry and routes invocations by tool name.
//! [`JsonSchemaToolConverter`] renders their definitions for agent frameworks.

mod registry;
mod schema;

pub use registry::{RegistryError, WorkflowToolRegistry};
pub use schema::JsonSchemaToolConverter;
