//! Use cases
//!
//! The invocation pipeline, leaf-first:
//!
//! - [`compose_input`]: query + field overrides → input item
//! - [`execute_workflow`]: hands the item to the execution engine
//! - [`extract_response`]: pulls the response property out of the result
//! - [`workflow_tool`]: the adapter sequencing all of the above

pub mod compose_input;
pub mod execute_workflow;
pub mod extract_response;
pub mod workflow_tool;

#[cfg(test)]
pub(crate) mod test_support;
