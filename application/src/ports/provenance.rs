//! Port for invocation provenance.
//!
//! Defines the [`ProvenanceRecorder`] trait that records one input event and
//! one correlated output event per tool invocation, so that an execution
//! trace view can show what the agent sent and what came back, including
//! failures the agent only ever saw as text.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while provenance is a machine-readable
//! transcript keyed by [`TraceIndex`].

use serde_json::{Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use toolbridge_domain::{BridgeError, InvocationOutcome, TraceIndex};

/// Channel name for tool invocations made by an agent.
pub const AI_TOOL_CHANNEL: &str = "ai_tool";

/// Body of a provenance event.
#[derive(Debug, Clone, PartialEq)]
pub enum ProvenancePayload {
    Data(Value),
    Error(BridgeError),
}

impl ProvenancePayload {
    pub fn is_error(&self) -> bool {
        matches!(self, ProvenancePayload::Error(_))
    }

    pub fn to_json(&self) -> Value {
        match self {
            ProvenancePayload::Data(value) => value.clone(),
            ProvenancePayload::Error(error) => json!({ "error": error.to_payload() }),
        }
    }
}

/// A single provenance event.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvenanceEvent {
    pub channel: &'static str,
    /// Name of the tool that was invoked
    pub tool: String,
    pub payload: ProvenancePayload,
}

impl ProvenanceEvent {
    /// Input event: `{ "query": ... }`.
    pub fn input(tool: impl Into<String>, query: &str) -> Self {
        Self {
            channel: AI_TOOL_CHANNEL,
            tool: tool.into(),
            payload: ProvenancePayload::Data(json!({ "query": query })),
        }
    }

    /// Output event: `{ "response": ... }` on success, the structured error otherwise.
    pub fn output(tool: impl Into<String>, outcome: &InvocationOutcome) -> Self {
        let payload = match outcome {
            InvocationOutcome::Success { response } => {
                ProvenancePayload::Data(json!({ "response": response }))
            }
            InvocationOutcome::Failure { error } => ProvenancePayload::Error(error.clone()),
        };
        Self {
            channel: AI_TOOL_CHANNEL,
            tool: tool.into(),
            payload,
        }
    }
}

/// Port for recording invocation provenance.
///
/// Both methods are synchronous and non-fallible: they run outside any
/// suspension point and must never disturb the invocation they describe.
pub trait ProvenanceRecorder: Send + Sync {
    /// Record the input event and hand out the index for its output event.
    fn record_input(&self, event: ProvenanceEvent) -> TraceIndex;

    /// Record the output event paired with `index`.
    fn record_output(&self, index: TraceIndex, event: ProvenanceEvent);
}

/// Atomic source of [`TraceIndex`] values, shared by recorder implementations.
#[derive(Debug, Default)]
pub struct TraceIndexAllocator {
    next: AtomicU64,
}

impl TraceIndexAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> TraceIndex {
        TraceIndex(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// No-op implementation for tests and when provenance is disabled.
///
/// Still allocates distinct indices so callers can rely on them.
#[derive(Debug, Default)]
pub struct NoProvenance {
    indices: TraceIndexAllocator,
}

impl ProvenanceRecorder for NoProvenance {
    fn record_input(&self, _event: ProvenanceEvent) -> TraceIndex {
        self.indices.next()
    }

    fn record_output(&self, _index: TraceIndex, _event: ProvenanceEvent) {}
}

/// Whether a record is an invocation's input or output event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvenanceDirection {
    Input,
    Output,
}

/// A recorded event together with its correlation index.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvenanceRecord {
    pub index: TraceIndex,
    pub direction: ProvenanceDirection,
    pub event: ProvenanceEvent,
}

/// Recorder keeping events in memory, in recording order.
#[derive(Debug, Default)]
pub struct InMemoryProvenance {
    indices: TraceIndexAllocator,
    records: Mutex<Vec<ProvenanceRecord>>,
}

impl InMemoryProvenance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded event.
    pub fn records(&self) -> Vec<ProvenanceRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn inputs(&self) -> Vec<ProvenanceRecord> {
        self.with_direction(ProvenanceDirection::Input)
    }

    pub fn outputs(&self) -> Vec<ProvenanceRecord> {
        self.with_direction(ProvenanceDirection::Output)
    }

    fn with_direction(&self, direction: ProvenanceDirection) -> Vec<ProvenanceRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.direction == direction)
            .collect()
    }

    fn push(&self, record: ProvenanceRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

impl ProvenanceRecorder for InMemoryProvenance {
    fn record_input(&self, event: ProvenanceEvent) -> TraceIndex {
        let index = self.indices.next();
        self.push(ProvenanceRecord {
            index,
            direction: ProvenanceDirection::Input,
            event,
        });
        index
    }

    fn record_output(&self, index: TraceIndex, event: ProvenanceEvent) {
        self.push(ProvenanceRecord {
            index,
            direction: ProvenanceDirection::Output,
            event,
        });
    }
}
