//! Infrastructure layer for toolbridge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod engine;
pub mod logging;
pub mod merge;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEngineConfig, FileProvenanceConfig,
    FileWorkflowToolConfig,
};
pub use engine::HttpWorkflowExecutor;
pub use logging::{JsonlProvenanceRecorder, TracingProvenanceRecorder};
pub use merge::SetFieldsMerger;
pub use tools::{JsonSchemaToolConverter, RegistryError, WorkflowToolRegistry};
