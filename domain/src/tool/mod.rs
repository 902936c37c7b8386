//! Tool domain module
//!
//! This module defines how a sub-workflow is presented to an agent as a
//! **tool**: a named, described callable with a single `query → text`
//! contract.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────────┐
//! │ToolDefinition│───▶│ AgentTool    │───▶│ InvocationOutcome │
//! │ (name, desc) │    │ invoke(query)│    │ collapsed to text │
//! └──────────────┘    └──────┬───────┘    └───────────────────┘
//!                            │
//!                            ├─ FieldOverride: extra input fields
//!                            └─ TraceIndex:    provenance pairing
//! ```
//!
//! # Key Types
//!
//! - [`ToolDefinition`]: Schema exposed to the agent (name, description, `query`)
//! - [`FieldOverride`]: Configured `(name, kind, raw value)` input field
//! - [`InvocationOutcome`]: Success or failure, always rendered as text
//! - [`TraceIndex`]: Correlation handle for input/output provenance events
//! - [`AgentTool`]: The tool-calling contract; `invoke` never fails
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`WorkflowTool`): The invocation state machine
//! - **Infrastructure**: Engine, merge and provenance adapters

pub mod entities;
pub mod field_override;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolDefinition, ToolParameter};
pub use field_override::{FieldKind, FieldOverride};
pub use traits::AgentTool;
pub use value_objects::{InvocationOutcome, TraceIndex};
