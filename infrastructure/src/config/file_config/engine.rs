//! Execution engine configuration from TOML (`[engine]` section)
//!
//! ```toml
//! [engine]
//! base_url = "http://localhost:5678"
//! execute_path = "/api/v1/workflows/execute"
//! token = "..."        # or TOOLBRIDGE_ENGINE__TOKEN
//! ```

use serde::{Deserialize, Serialize};

/// Raw execution engine configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Engine base URL
    pub base_url: String,
    /// Path of the execute endpoint, relative to `base_url`
    pub execute_path: String,
    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
            execute_path: "/api/v1/workflows/execute".to_string(),
            token: None,
        }
    }
}

impl FileEngineConfig {
    /// Full URL of the execute endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.execute_path.trim_start_matches('/')
        )
    }
}
