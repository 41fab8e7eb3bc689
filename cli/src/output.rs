//! Output formatting for parse reports.

use std::str::FromStr;

use optscan_core::{OptionTable, ParseOutcome};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "text" => Ok(Self::Text),
            other => Err(format!(
                "unknown output format '{other}' (expected json, yaml or text)"
            )),
        }
    }
}

/// How one argument vector was parsed against a table.
#[derive(Debug, Serialize)]
pub struct ParseReport<'a> {
    pub arguments: &'a [&'a str],
    pub options: Vec<OptionReport<'a>>,
    pub free_args: Vec<FreeArgReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct OptionReport<'a> {
    pub name: String,
    pub seen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct FreeArgReport<'a> {
    pub index: usize,
    pub value: &'a str,
}

impl<'a> ParseReport<'a> {
    pub fn new(table: &OptionTable, arguments: &'a [&'a str], outcome: &'a ParseOutcome) -> Self {
        let options = table
            .options
            .iter()
            .zip(&outcome.values)
            .map(|(option, parsed)| OptionReport {
                name: option.display_name(),
                seen: parsed.seen,
                value: parsed.value.as_deref(),
            })
            .collect();

        let free_args = outcome
            .free_args
            .iter()
            .filter_map(|&index| {
                arguments
                    .get(index)
                    .map(|&value| FreeArgReport { index, value })
            })
            .collect();

        Self {
            arguments,
            options,
            free_args,
        }
    }
}

/// Formats a parse report in the requested output format.
pub fn format_report(report: &ParseReport<'_>, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(report_to_text(report)),
    }
}

fn report_to_text(report: &ParseReport<'_>) -> String {
    let mut out = String::new();

    let width = report
        .options
        .iter()
        .map(|o| o.name.chars().count())
        .max()
        .unwrap_or(0);

    out.push_str("Options:\n");
    for option in &report.options {
        let state = match (option.seen, option.value) {
            (false, _) => "-".to_string(),
            (true, None) => "seen".to_string(),
            (true, Some(value)) => format!("seen = {value:?}"),
        };
        out.push_str(&format!("  {:<width$}  {state}\n", option.name));
    }

    out.push_str("Free arguments:\n");
    if report.free_args.is_empty() {
        out.push_str("  (none)\n");
    }
    for free in &report.free_args {
        out.push_str(&format!("  [{}] {}\n", free.index, free.value));
    }

    out
}
