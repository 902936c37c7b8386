//! Provenance forwarded to `tracing`, for runs without a transcript file.

use toolbridge_application::{ProvenanceEvent, ProvenanceRecorder, TraceIndexAllocator};
use toolbridge_domain::TraceIndex;
use tracing::{info, warn};

/// Recorder that emits each provenance event as a structured log record.
#[derive(Debug, Default)]
pub struct TracingProvenanceRecorder {
    indices: TraceIndexAllocator,
}

impl TracingProvenanceRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProvenanceRecorder for TracingProvenanceRecorder {
    fn record_input(&self, event: ProvenanceEvent) -> TraceIndex {
        let index = self.indices.next();
        info!(
            index = %index,
            tool = %event.tool,
            channel = event.channel,
            payload = %event.payload.to_json(),
            "tool_input"
        );
        index
    }

    fn record_output(&self, index: TraceIndex, event: ProvenanceEvent) {
        let payload = event.payload.to_json();
        if event.payload.is_error() {
            warn!(index = %index, tool = %event.tool, channel = event.channel, payload = %payload, "tool_output");
        } else {
            info!(index = %index, tool = %event.tool, channel = event.channel, payload = %payload, "tool_output");
        }
    }
}
