//! Hand-written port doubles shared by the use case tests.

use crate::ports::field_merger::{FieldMerger, MergeOptions};
use crate::ports::workflow_executor::{EngineError, WorkflowExecutor};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;
use std::time::Duration;
use toolbridge_domain::{ExecutionResult, FieldOverride, WorkflowItem, WorkflowReference};

type Script = Box<dyn Fn(&[WorkflowItem]) -> Result<Value, EngineError> + Send + Sync>;
type Delay = Box<dyn Fn(&[WorkflowItem]) -> Duration + Send + Sync>;

/// Executor answering from a closure, recording every call.
pub struct ScriptedExecutor {
    script: Script,
    delay: Option<Delay>,
    calls: Mutex<Vec<(WorkflowReference, Vec<WorkflowItem>)>>,
}

impl ScriptedExecutor {
    pub fn new(
        script: impl Fn(&[WorkflowItem]) -> Result<Value, EngineError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(result: Value) -> Self {
        Self::new(move |_| Ok(result.clone()))
    }

    /// Executor whose first item carries `{ property: value }`.
    pub fn responding(property: &str, value: Value) -> Self {
        Self::returning(json!([[{ "json": { property: value } }]]))
    }

    pub fn failing(error: EngineError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    pub fn with_delay(
        mut self,
        delay: impl Fn(&[WorkflowItem]) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Some(Box::new(delay));
        self
    }

    pub fn calls(&self) -> Vec<(WorkflowReference, Vec<WorkflowItem>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkflowExecutor for ScriptedExecutor {
    async fn execute(
        &self,
        reference: &WorkflowReference,
        items: Vec<WorkflowItem>,
    ) -> Result<ExecutionResult, EngineError> {
        self.calls
            .lock()
            .unwrap()
            .push((reference.clone(), items.clone()));
        if let Some(delay) = &self.delay {
            tokio::time::sleep(delay(items.as_slice())).await;
        }
        (self.script)(items.as_slice()).map(ExecutionResult::new)
    }
}

/// Executor that panics instead of answering.
pub struct PanickingExecutor;

#[async_trait]
impl WorkflowExecutor for PanickingExecutor {
    async fn execute(
        &self,
        _reference: &WorkflowReference,
        _items: Vec<WorkflowItem>,
    ) -> Result<ExecutionResult, EngineError> {
        panic!("engine crashed");
    }
}

#[derive(Debug, Clone)]
pub struct MergeCall {
    pub base: WorkflowItem,
    pub overrides: Vec<FieldOverride>,
    pub options: MergeOptions,
}

/// Merger that sets override values literally, keeping raw fields verbatim.
#[derive(Default)]
pub struct RecordingMerger {
    calls: Mutex<Vec<MergeCall>>,
}

impl RecordingMerger {
    pub fn calls(&self) -> Vec<MergeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FieldMerger for RecordingMerger {
    async fn merge(
        &self,
        base: WorkflowItem,
        overrides: &[FieldOverride],
        options: &MergeOptions,
    ) -> WorkflowItem {
        self.calls.lock().unwrap().push(MergeCall {
            base: base.clone(),
            overrides: overrides.to_vec(),
            options: options.clone(),
        });

        let mut item = base;
        for field in overrides {
            match field.unevaluated_object_value() {
                Some(raw) if options.is_raw(&field.name) => item.set(field.name.clone(), raw),
                _ => item.set(field.name.clone(), field.value.clone()),
            }
        }
        item
    }
}
