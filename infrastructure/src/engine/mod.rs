//! Execution engine adapters
//!
//! Implementations of the [`WorkflowExecutor`](toolbridge_application::WorkflowExecutor)
//! port. The engine runs remotely; these adapters only speak its protocol.

mod http_executor;

pub use http_executor::HttpWorkflowExecutor;
