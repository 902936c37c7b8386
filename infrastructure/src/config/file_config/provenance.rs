//! Provenance log configuration from TOML (`[provenance]` section)

use serde::{Deserialize, Serialize};

/// Raw provenance configuration from TOML
///
/// When `path` is unset, provenance events go to the tracing log instead of
/// a JSONL file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvenanceConfig {
    /// JSONL file receiving one line per input/output event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
