//! @ai:module:intent Format output for different formats (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_lint_result, format_rules
//! @ai:module:depends_on linter, rules
//! @ai:module:stateless true

use crate::finding::PREFIX;
use crate::linter::LintResult;
use crate::rules::RuleRegistry;
use colored::Colorize;
use serde::Serialize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format lint results as a string
/// @ai:effects pure
pub fn format_lint_result(result: &LintResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Text => format_lint_result_text(result),
    }
}

/// @ai:intent Format lint results as `path:row:col: CODE message` lines plus a summary
/// @ai:effects pure
fn format_lint_result_text(result: &LintResult) -> String {
    let mut output = String::new();

    for finding in &result.findings {
        let location = format!("{}:{}:{}", finding.path, finding.row, finding.col);
        let text = finding
            .message
            .split_once(": ")
            .map(|(_, text)| text)
            .unwrap_or(&finding.message);

        output.push_str(&format!(
            "{}: {} {}\n",
            location.dimmed(),
            finding.code.yellow().bold(),
            text
        ));
    }

    for failure in &result.failures {
        output.push_str(&format!(
            "{} {} - {}\n",
            "ERROR".red().bold(),
            failure.path.dimmed(),
            failure.reason
        ));
    }

    output.push('\n');
    output.push_str(&format!("Checked {} files\n", result.files_checked));

    if !result.failures.is_empty() {
        output.push_str(&format!(
            "{} findings, {} unreadable inputs\n",
            result.findings.len().to_string().yellow(),
            result.failures.len().to_string().red().bold()
        ));
    } else if !result.findings.is_empty() {
        output.push_str(&format!(
            "{} findings\n",
            result.findings.len().to_string().yellow().bold()
        ));
    } else {
        output.push_str(&format!("{} No issues found\n", "OK".green().bold()));
    }

    output
}

#[derive(Serialize)]
struct RuleInfo {
    code: String,
    name: &'static str,
    message: &'static str,
}

/// @ai:intent List registered rules in registration order
/// @ai:effects pure
pub fn format_rules(registry: &RuleRegistry, format: OutputFormat) -> String {
    let rules: Vec<RuleInfo> = registry
        .iter()
        .map(|rule| RuleInfo {
            code: format!("{}{}", PREFIX, rule.code()),
            name: rule.name(),
            message: rule.text(),
        })
        .collect();

    match format {
        OutputFormat::Json => serde_json::to_string(&rules).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&rules).unwrap_or_default(),
        OutputFormat::Text => rules
            .iter()
            .map(|rule| format!("{} {:<14} {}\n", rule.code.bold(), rule.name.cyan(), rule.message))
            .collect(),
    }
}
