//! Check command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use confdata_diagnostics::{CFG0112, Diagnostic, Severity};
use confdata_types::{DataType, FileSystem, Validator, kind_from_name};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

/// Configuration for check command
pub struct CheckConfig {
    pub kind: String,
    pub values: Vec<String>,
    pub quiet: bool,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Outcome of checking a single value
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub value: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Check every value against the named data type.
///
/// Returns `Ok(true)` when all values are accepted.
pub fn check<F: FileSystem>(config: CheckConfig, validator: &Validator<F>) -> Result<bool> {
    if config.values.is_empty() {
        anyhow::bail!("No values specified to check");
    }

    let kind = kind_from_name(&config.kind)?;
    let reports: Vec<CheckReport> = config
        .values
        .iter()
        .map(|value| check_value(validator, kind, value))
        .collect();
    let failed = reports.iter().filter(|r| !r.valid).count();

    if config.format.is_json() {
        let value = json!({
            "kind": kind,
            "valid": failed == 0,
            "results": reports,
        });
        output::print_output(&value, String::new, config.format, config.output_file.as_deref())?;
    } else if !config.quiet {
        for report in &reports {
            print_report(report);
        }
        println!();
        if failed == 0 {
            println!(
                "{}",
                output::format_success(&format!(
                    "All {} value(s) are valid {}",
                    reports.len(),
                    kind
                ))
            );
        } else {
            eprintln!(
                "{} {} of {} value(s) rejected",
                "Check failed:".red().bold(),
                failed,
                reports.len()
            );
        }
    }

    Ok(failed == 0)
}

/// Check a single value and collect diagnostics
pub fn check_value<F: FileSystem>(
    validator: &Validator<F>,
    kind: DataType,
    value: &str,
) -> CheckReport {
    let mut diagnostics = Vec::new();
    let valid = match validator.check(kind, value) {
        Ok(()) => {
            if kind == DataType::String && value.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(CFG0112, "string value is blank").with_subject(value),
                );
            }
            true
        }
        Err(err) => {
            diagnostics.push(err.to_diagnostic());
            false
        }
    };

    CheckReport {
        value: value.to_string(),
        valid,
        diagnostics,
    }
}

fn print_report(report: &CheckReport) {
    let status = if report.valid {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    println!("{} {}", status, format!("{:?}", report.value).cyan());

    for diag in &report.diagnostics {
        if diag.severity == Severity::Warning {
            println!("  {}", output::format_warning(&diag.message));
        } else {
            println!("  {}", diag.render().replace('\n', "\n  "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdata_types::MemoryFs;

    #[test]
    fn test_check_value_collects_diagnostics() {
        let validator = Validator::new(MemoryFs::new());

        let ok = check_value(&validator, DataType::Integer, "12");
        assert!(ok.valid);
        assert!(ok.diagnostics.is_empty());

        let bad = check_value(&validator, DataType::FolderPath, "/missing");
        assert!(!bad.valid);
        assert_eq!(bad.diagnostics.len(), 1);
    }

    #[test]
    fn test_blank_string_warns_but_passes() {
        let validator = Validator::new(MemoryFs::new());
        let report = check_value(&validator, DataType::String, "  ");
        assert!(report.valid);
        assert_eq!(report.diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_check_unknown_kind_is_an_error() {
        let validator = Validator::new(MemoryFs::new());
        let config = CheckConfig {
            kind: "int".to_string(),
            values: vec!["1".to_string()],
            quiet: true,
            format: OutputFormat::Text,
            output_file: None,
        };
        assert!(check(config, &validator).is_err());
    }

    #[test]
    fn test_check_reports_failure() {
        let validator = Validator::new(MemoryFs::new());
        let config = CheckConfig {
            kind: "positive integer".to_string(),
            values: vec!["3".to_string(), "0".to_string()],
            quiet: true,
            format: OutputFormat::Text,
            output_file: None,
        };
        assert!(!check(config, &validator).unwrap());
    }
}
