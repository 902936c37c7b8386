//! JSONL file writer for invocation provenance.
//!
//! Every event becomes one JSON line carrying `type` (`tool_input` or
//! `tool_output`), `run`, `index`, `tool`, `channel` and `timestamp`, merged
//! with the event payload. The input and output lines of one invocation
//! share the same `(run, index)` pair.
//!
//! The file is appended to, so it accumulates the transcript of every run.
//! Indices restart at 0 for each recorder; `run` tells the runs apart.

use serde_json::{Map, Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use toolbridge_application::{ProvenanceEvent, ProvenanceRecorder, TraceIndexAllocator};
use toolbridge_domain::TraceIndex;
use tracing::warn;

/// Recorders opened by this process, folded into the run id.
static RECORDERS_OPENED: AtomicU64 = AtomicU64::new(0);

/// Provenance recorder that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlProvenanceRecorder {
    writer: Mutex<BufWriter<File>>,
    indices: TraceIndexAllocator,
    run_id: String,
    path: PathBuf,
}

impl JsonlProvenanceRecorder {
    /// Create a recorder appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create provenance directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create provenance file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            indices: TraceIndexAllocator::new(),
            run_id: new_run_id(),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier written on every line of this recorder.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    fn write(&self, record_type: &str, index: TraceIndex, event: &ProvenanceEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = Map::new();
        match event.payload.to_json() {
            Value::Object(map) => record.extend(map),
            other => {
                record.insert("data".to_string(), other);
            }
        }
        record.insert("type".to_string(), json!(record_type));
        record.insert("run".to_string(), json!(self.run_id));
        record.insert("index".to_string(), json!(index));
        record.insert("tool".to_string(), json!(event.tool));
        record.insert("channel".to_string(), json!(event.channel));
        record.insert("timestamp".to_string(), json!(timestamp));

        let Ok(line) = serde_json::to_string(&Value::Object(record)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Append-only: flush each line so a crash keeps the transcript
            let _ = writer.flush();
        }
    }
}

/// `<start time>-<pid>-<sequence>`, unique per recorder.
fn new_run_id() -> String {
    format!(
        "{}-{}-{}",
        chrono::Utc::now().format("%Y%m%dT%H%M%S%.6fZ"),
        std::process::id(),
        RECORDERS_OPENED.fetch_add(1, Ordering::SeqCst)
    )
}

impl ProvenanceRecorder for JsonlProvenanceRecorder {
    fn record_input(&self, event: ProvenanceEvent) -> TraceIndex {
        let index = self.indices.next();
        self.write("tool_input", index, &event);
        index
    }

    fn record_output(&self, index: TraceIndex, event: ProvenanceEvent) {
        self.write("tool_output", index, &event);
    }
}

impl Drop for JsonlProvenanceRecorder {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
