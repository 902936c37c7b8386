//! Core domain concepts shared across all subdomains.
//!
//! - [`error::BridgeError`]: failures folded into text by the tool adapter

pub mod error;
