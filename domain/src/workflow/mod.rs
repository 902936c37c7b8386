//! Workflow domain module
//!
//! Describes *which* sub-workflow a tool runs and the item shapes exchanged
//! with the execution engine.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │ WorkflowSource   │───▶│ WorkflowReference│───▶│ ExecutionResult  │
//! │ (configuration)  │    │ ById / Inline    │    │ [[{json: {..}}]] │
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! The engine itself lives outside this crate; only its boundary types are
//! modelled here.

pub mod items;
pub mod reference;

pub use items::{ExecutionResult, FieldMap, WorkflowItem};
pub use reference::{WorkflowReference, WorkflowSource};
