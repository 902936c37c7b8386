//! Provenance recorders.
//!
//! Implementations of the [`ProvenanceRecorder`](toolbridge_application::ProvenanceRecorder)
//! port: [`JsonlProvenanceRecorder`] writes a machine-readable transcript to
//! a file, [`TracingProvenanceRecorder`] forwards events to `tracing`.

mod jsonl_recorder;
mod tracing_recorder;

pub use jsonl_recorder::JsonlProvenanceRecorder;
pub use tracing_recorder::TracingProvenanceRecorder;
