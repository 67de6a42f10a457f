//! Kinds command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use confdata_types::DataType;
use serde_json::{Value, json};
use std::path::Path;

/// Describe every data type as JSON
pub fn describe_kinds() -> Value {
    Value::Array(
        DataType::ALL
            .iter()
            .map(|kind| {
                json!({
                    "id": kind.discriminant(),
                    "name": kind.name(),
                    "numeric": kind.is_numeric(),
                    "path": kind.is_path(),
                    "requires_filesystem": kind.requires_filesystem(),
                })
            })
            .collect(),
    )
}

/// Print the known data types
pub fn list(format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    output::print_output(&describe_kinds(), render_text, format, output_file)
}

fn render_text() -> String {
    DataType::ALL
        .iter()
        .map(|kind| {
            let note = if kind.requires_filesystem() {
                " (checks filesystem)".dimmed().to_string()
            } else {
                String::new()
            };
            format!("{:>2}  {}{}", kind.discriminant(), kind.name().cyan(), note)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_kinds() {
        let kinds = describe_kinds();
        let kinds = kinds.as_array().unwrap();
        assert_eq!(kinds.len(), DataType::ALL.len());
        assert_eq!(kinds[2]["name"], "positive integer");
        assert_eq!(kinds[6]["requires_filesystem"], true);
        assert_eq!(kinds[8]["numeric"], false);
    }
}
