//! Parse command implementation

use super::output::{self, OutputFormat};
use anyhow::{Context, Result};
use confdata_types::{FileSystem, Validator, kind_from_name};
use serde_json::json;
use std::path::PathBuf;

/// Configuration for parse command
pub struct ParseConfig {
    pub kind: String,
    pub value: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Parse a value and print its native representation
pub fn parse<F: FileSystem>(config: ParseConfig, validator: &Validator<F>) -> Result<()> {
    let kind = kind_from_name(&config.kind)?;
    let value = validator.parse_value(kind, &config.value)?;
    log::debug!("parsed {:?} as {}: {:?}", config.value, kind, value);

    let json = json!({
        "kind": kind,
        "input": config.value,
        "value": serde_json::to_value(&value).context("Failed to serialize value")?,
        "timestamp": value.as_timestamp(),
    });
    output::print_output(
        &json,
        || value.to_string(),
        config.format,
        config.output_file.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdata_diagnostics::{CFG0105, ConfError};
    use confdata_types::MemoryFs;

    fn config(kind: &str, value: &str, output_file: Option<PathBuf>) -> ParseConfig {
        ParseConfig {
            kind: kind.to_string(),
            value: value.to_string(),
            format: OutputFormat::Json,
            output_file,
        }
    }

    #[test]
    fn test_parse_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("value.json");
        let validator = Validator::new(MemoryFs::new());

        parse(config("date", "01/01/2017", Some(out.clone())), &validator).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["kind"], "date");
        assert_eq!(written["timestamp"], 1_483_228_800);
        assert_eq!(written["value"]["type"], "date");
    }

    #[test]
    fn test_parse_rejects_bad_value() {
        let validator = Validator::new(MemoryFs::new());
        let err = parse(config("date", "2017-13-01", None), &validator).unwrap_err();
        let err = err.downcast_ref::<ConfError>().unwrap();
        assert_eq!(err.code(), CFG0105);
    }
}
