//! CLI entrypoint for toolbridge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use toolbridge_application::{ProvenanceRecorder, ToolSchemaPort};
use toolbridge_domain::AgentTool;
use toolbridge_infrastructure::{
    ConfigLoader, FileConfig, HttpWorkflowExecutor, JsonSchemaToolConverter,
    JsonlProvenanceRecorder, SetFieldsMerger, TracingProvenanceRecorder, WorkflowToolRegistry,
};
use toolbridge_presentation::{Cli, ConsoleFormatter, OutputFormat};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting toolbridge");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        let mut shown = config.clone();
        if shown.engine.token.is_some() {
            shown.engine.token = Some("********".to_string());
        }
        println!();
        println!("{}", shown.to_toml_string()?);
        return Ok(());
    }

    // === Dependency Injection ===
    let registry = WorkflowToolRegistry::from_configs(
        config.tool_configs(),
        Arc::new(HttpWorkflowExecutor::from_config(&config.engine)),
        Arc::new(SetFieldsMerger::new()),
        provenance_recorder(&config),
    )?;

    if cli.list {
        let definitions = registry.definitions();
        let output = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format_tool_list(&definitions),
            OutputFormat::Json => ConsoleFormatter::format_tool_schemas(
                &JsonSchemaToolConverter.tools_schema(&definitions),
            ),
        };
        println!("{}", output);
        return Ok(());
    }

    config.validate()?;

    let tool = match (&cli.tool, registry.sole_tool()) {
        (Some(name), _) => name.clone(),
        (None, Some(tool)) => tool.definition().name.clone(),
        (None, None) => bail!(
            "Several tools are configured; choose one with --tool ({})",
            registry.names().join(", ")
        ),
    };

    let Some(query) = cli.query else {
        bail!("A query is required. Use --list to see the configured tools.");
    };

    let report = registry.run(&tool, &query).await?;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_report(&report),
        OutputFormat::Json => ConsoleFormatter::format_report_json(&tool, &report),
    };
    println!("{}", output);

    Ok(())
}

/// Install the tracing subscriber: stderr always, plus a file when requested.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Could not open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// JSONL transcript when a path is configured, the tracing log otherwise.
fn provenance_recorder(config: &FileConfig) -> Arc<dyn ProvenanceRecorder> {
    if let Some(path) = &config.provenance.path {
        match JsonlProvenanceRecorder::new(path) {
            Some(recorder) => {
                info!(
                    path = %recorder.path().display(),
                    run = recorder.run_id(),
                    "Recording provenance to JSONL"
                );
                return Arc::new(recorder);
            }
            None => warn!(path = %path, "Falling back to tracing provenance"),
        }
    }
    Arc::new(TracingProvenanceRecorder::new())
}
