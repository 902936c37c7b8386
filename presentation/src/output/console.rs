//! Console output formatter for invocation reports

use colored::Colorize;
use serde_json::{Value, json};
use toolbridge_application::InvocationReport;
use toolbridge_domain::ToolDefinition;

/// Formats invocation reports and tool listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The agent-facing text; failures are highlighted.
    pub fn format_report(report: &InvocationReport) -> String {
        let text = report.text();
        if report.outcome.is_success() {
            text
        } else {
            text.red().to_string()
        }
    }

    /// `{ tool, index, success, text, response | error }`
    pub fn format_report_json(tool: &str, report: &InvocationReport) -> String {
        let mut value = json!({
            "tool": tool,
            "index": report.index,
            "success": report.outcome.is_success(),
            "text": report.text(),
        });
        if let (Value::Object(map), Value::Object(payload)) =
            (&mut value, report.outcome.to_payload())
        {
            map.extend(payload);
        }
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_tool_list(tools: &[&ToolDefinition]) -> String {
        if tools.is_empty() {
            return format!("{}\n", "No tools configured.".yellow());
        }

        let mut output = format!("{}\n", "Configured tools:".cyan().bold());
        let width = tools.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for tool in tools {
            output.push_str(&format!(
                "  {}  {}\n",
                format!("{:width$}", tool.name, width = width).bold(),
                Self::indent_continuation(&tool.description, width + 4)
            ));
        }
        output
    }

    pub fn format_tool_schemas(schemas: &[Value]) -> String {
        serde_json::to_string_pretty(schemas).unwrap_or_else(|_| "[]".to_string())
    }

    /// Indent every line after the first so wrapped descriptions line up.
    fn indent_continuation(text: &str, width: usize) -> String {
        let pad = " ".repeat(width);
        text.lines().collect::<Vec<_>>().join(&format!("\n{}", pad))
    }
}
