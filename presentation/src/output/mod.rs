//! Output formatting for invocation reports and tool listings

pub mod console;
