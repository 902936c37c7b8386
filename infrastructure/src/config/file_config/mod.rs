//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod engine;
mod provenance;
mod tools;

pub use engine::FileEngineConfig;
pub use provenance::FileProvenanceConfig;
pub use tools::FileWorkflowToolConfig;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use toolbridge_application::WorkflowToolConfig;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("engine.base_url must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("no tools configured; add a [tools.<name>] section")]
    NoTools,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Execution engine connection
    pub engine: FileEngineConfig,
    /// Provenance log settings
    pub provenance: FileProvenanceConfig,
    /// Workflow tools keyed by tool name
    pub tools: BTreeMap<String, FileWorkflowToolConfig>,
}

impl FileConfig {
    /// Validate the parts of the configuration needed to serve tools.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.engine.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(url.to_string()));
        }
        if self.tools.is_empty() {
            return Err(ConfigValidationError::NoTools);
        }
        Ok(())
    }

    /// Tool configurations, in name order.
    pub fn tool_configs(&self) -> Vec<WorkflowToolConfig> {
        self.tools
            .iter()
            .map(|(name, tool)| tool.to_tool_config(name))
            .collect()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbridge_domain::{FieldKind, FieldOverride, WorkflowSource};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[engine]
base_url = "https://engine.example.com"
execute_path = "/api/v1/execute"
token = "secret"

[provenance]
path = "/tmp/toolbridge/provenance.jsonl"

[tools.weather]
description = "Looks up the weather for a city"
workflow_id = "42"

[[tools.weather.fields]]
name = "units"
type = "string"
value = "metric"

[[tools.weather.fields]]
name = "extra"
type = "object"
value = "={a:1}"

[tools.inline_calc]
description = "Runs an inline calculation workflow"
source = "parameter"
workflow_json = '{"nodes": []}'
response_property_name = "result"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.base_url, "https://engine.example.com");
        assert_eq!(config.engine.token.as_deref(), Some("secret"));
        assert_eq!(
            config.provenance.path.as_deref(),
            Some("/tmp/toolbridge/provenance.jsonl")
        );
        assert!(config.validate().is_ok());

        let tools = config.tool_configs();
        assert_eq!(tools.len(), 2);

        // BTreeMap order: inline_calc, weather
        assert_eq!(tools[0].name, "inline_calc");
        assert_eq!(tools[0].source, WorkflowSource::Parameter);
        assert_eq!(tools[0].response_property_name, "result");

        assert_eq!(tools[1].name, "weather");
        assert_eq!(tools[1].source, WorkflowSource::Database);
        assert_eq!(tools[1].workflow_id.as_deref(), Some("42"));
        assert_eq!(tools[1].response_property_name, "response");
        assert_eq!(
            tools[1].fields,
            vec![
                FieldOverride::new("units", FieldKind::String, "metric"),
                FieldOverride::new("extra", FieldKind::Object, "={a:1}"),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = FileConfig::default();
        config.engine.base_url = "ftp://engine".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl("ftp://engine".into()))
        );
    }

    #[test]
    fn test_validate_requires_tools() {
        assert_eq!(
            FileConfig::default().validate(),
            Err(ConfigValidationError::NoTools)
        );
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let rendered = FileConfig::default().to_toml_string().unwrap();
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, FileConfig::default());
    }
}
