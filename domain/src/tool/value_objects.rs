//! Tool domain value objects: invocation outcomes and trace handles

use crate::core::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Correlation handle pairing an invocation's input and output events.
///
/// Assigned synchronously when the invocation starts, so ordering follows
/// call order rather than completion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceIndex(pub u64);

impl TraceIndex {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TraceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final state of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    Success { response: String },
    Failure { error: BridgeError },
}

impl InvocationOutcome {
    pub fn from_result(result: Result<String, BridgeError>) -> Self {
        match result {
            Ok(response) => InvocationOutcome::Success { response },
            Err(error) => InvocationOutcome::Failure { error },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success { .. })
    }

    /// The text handed back to the agent.
    pub fn text(&self) -> String {
        match self {
            InvocationOutcome::Success { response } => response.clone(),
            InvocationOutcome::Failure { error } => format!("There was an error: \"{}\"", error),
        }
    }

    /// Payload of the output provenance event: `{ response }` or `{ error }`.
    pub fn to_payload(&self) -> Value {
        match self {
            InvocationOutcome::Success { response } => json!({ "response": response }),
            InvocationOutcome::Failure { error } => json!({ "error": error.to_payload() }),
        }
    }
}
