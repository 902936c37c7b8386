//! Configuration file loading for toolbridge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLBRIDGE_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolbridge.toml` or `./.toolbridge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/toolbridge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEngineConfig, FileProvenanceConfig,
    FileWorkflowToolConfig,
};
pub use loader::ConfigLoader;
