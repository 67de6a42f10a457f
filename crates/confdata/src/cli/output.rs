//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use confdata_diagnostics::ConfError;
use serde_json::Value;
use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::Path;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "json-pretty" => Self::JsonPretty,
            _ => Self::Text,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonPretty)
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

/// Format an error for display
///
/// confdata errors are shown as diagnostics, with help text when the error
/// code has any.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ConfError>() {
        Some(err) => err.to_diagnostic().render(),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        log::debug!("output written to {}", path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

/// Print a JSON value, or `text` when the format is not JSON
pub fn print_output(
    value: &Value,
    text: impl FnOnce() -> String,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let content = match format {
        OutputFormat::Json => format_json(value, false)?,
        OutputFormat::JsonPretty => format_json(value, true)?,
        OutputFormat::Text => text(),
    };
    write_output(&content, output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("pretty"), OutputFormat::JsonPretty);
        assert_eq!(OutputFormat::from_name("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name("whatever"), OutputFormat::Text);
    }

    #[test]
    fn test_format_error_uses_diagnostic() {
        colored::control::set_override(false);
        let err = anyhow::Error::new(ConfError::unknown_kind("Integer"));
        let text = format_error(&err);
        assert!(text.starts_with("error[CFG0001]"));
        assert!(text.contains("help:"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let content = format_json(&json!({"valid": true}), false).unwrap();
        write_output(&content, Some(&path)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\"valid\":true}\n"
        );
    }
}
