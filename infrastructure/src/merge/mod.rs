//! Field-merge transform adapters
//!
//! Implementations of the [`FieldMerger`](toolbridge_application::FieldMerger) port.

mod set_fields;

pub use set_fields::SetFieldsMerger;
