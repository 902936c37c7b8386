//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for invocation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the text the agent would receive
    Text,
    /// Structured report with trace index and outcome
    Json,
}

/// CLI arguments for toolbridge
#[derive(Parser, Debug)]
#[command(name = "toolbridge")]
#[command(author, version, about = "Expose engine workflows as agent tools")]
#[command(long_about = r#"
toolbridge wraps sub-workflows of an execution engine as agent tools.
Each tool takes one natural-language query, runs its workflow and answers
with a single string. Failures are answered as text, never as errors.

Configuration files are loaded from (in priority order):
1. TOOLBRIDGE_* environment variables (e.g. TOOLBRIDGE_ENGINE__TOKEN)
2. --config <path>     Explicit config file
3. ./toolbridge.toml   Project-level config
4. ~/.config/toolbridge/config.toml   Global config

Example:
  toolbridge --list
  toolbridge --tool colors "What color is the sky?"
  toolbridge --tool colors --output json --log-file run.log "sky?"
"#)]
pub struct Cli {
    /// The query passed to the tool
    pub query: Option<String>,

    /// Tool to invoke (may be omitted when exactly one tool is configured)
    #[arg(short, long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Print the configured tools and exit
    #[arg(short, long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
