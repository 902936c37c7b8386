//! Field-merge transform port
//!
//! The merge transform evaluates configured [`FieldOverride`]s into the
//! composed input item. Its evaluation policy belongs to the adapter; the
//! composer only decides which fields skip evaluation.

use async_trait::async_trait;
use toolbridge_domain::{FieldOverride, WorkflowItem};

/// Options passed to [`FieldMerger::merge`].
///
/// Every field of the base item survives the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Fields already set verbatim in the base item; their unevaluated
    /// overrides are written as-is instead of being evaluated.
    pub raw_fields: Vec<String>,
}

impl MergeOptions {
    pub fn include_all() -> Self {
        Self::default()
    }

    pub fn with_raw_field(mut self, name: impl Into<String>) -> Self {
        self.raw_fields.push(name.into());
        self
    }

    pub fn is_raw(&self, name: &str) -> bool {
        self.raw_fields.iter().any(|f| f == name)
    }
}

/// Port for the field-setting transform.
///
/// Overrides are applied in order; a later override of the same name wins.
#[async_trait]
pub trait FieldMerger: Send + Sync {
    async fn merge(
        &self,
        base: WorkflowItem,
        overrides: &[FieldOverride],
        options: &MergeOptions,
    ) -> WorkflowItem;
}
