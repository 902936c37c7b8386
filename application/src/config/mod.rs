//! Application-level configuration.
//!
//! - [`WorkflowToolConfig`]: everything one workflow tool needs to run
//! - [`ToolSetupError`]: construction faults detected before any invocation

pub mod tool_config;

pub use tool_config::{DEFAULT_RESPONSE_PROPERTY, ToolSetupError, WorkflowToolConfig};
