//! Input Composer use case
//!
//! Builds the single item handed to the sub-workflow from the agent's query
//! and the configured field overrides.

use crate::ports::field_merger::{FieldMerger, MergeOptions};
use std::sync::Arc;
use toolbridge_domain::{FieldOverride, WorkflowItem};
use tracing::debug;

/// Composes the workflow input item.
///
/// Object overrides marked with `=` are stored raw before the merge; all
/// other evaluation is left to the [`FieldMerger`].
pub struct InputComposer {
    merger: Arc<dyn FieldMerger>,
}

impl InputComposer {
    pub fn new(merger: Arc<dyn FieldMerger>) -> Self {
        Self { merger }
    }

    pub async fn compose(&self, query: &str, overrides: &[FieldOverride]) -> WorkflowItem {
        let mut base = WorkflowItem::from_query(query);
        let mut options = MergeOptions::include_all();

        for field in overrides {
            if let Some(raw) = field.unevaluated_object_value() {
                debug!(field = %field.name, "Passing object field through unevaluated");
                base.set(field.name.clone(), raw);
                if !options.is_raw(&field.name) {
                    options = options.with_raw_field(field.name.clone());
                }
            }
        }

        self.merger.merge(base, overrides, &options).await
    }
}
