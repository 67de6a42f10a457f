//! Pure, filesystem-free checks and conversions
//!
//! Everything in this module depends only on the text of a value. Path types
//! are only checked for being well-formed here; whether the entry exists is
//! answered by [`crate::exists_on_disk`].

use crate::DataType;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use confdata_diagnostics::{
    CFG0101, CFG0102, CFG0103, CFG0104, CFG0105, CFG0111, ConfError, Result,
};

/// Accepted date layouts, tried in order: chrono format, field separator,
/// and whether the year comes first
pub const DATE_FORMATS: [(&str, char, bool); 2] =
    [("%d/%m/%Y", '/', false), ("%Y-%m-%d", '-', true)];

/// Check the text of a value against a data type, without touching the filesystem
pub fn check_syntax(kind: DataType, value: &str) -> Result<()> {
    match kind {
        DataType::String => Ok(()),
        DataType::Integer | DataType::PositiveInteger => read_integer(kind, value).map(drop),
        DataType::Float | DataType::PositiveFloat => read_float(kind, value).map(drop),
        DataType::FilePath | DataType::ExecutablePath | DataType::FolderPath => {
            check_path_text(kind, value)
        }
        DataType::Date => read_date(kind, value).map(drop),
    }
}

/// True iff [`check_syntax`] accepts the value
pub fn syntactically_valid(kind: DataType, value: &str) -> bool {
    check_syntax(kind, value).is_ok()
}

/// Parse an integer value
///
/// Only `Integer` and `PositiveInteger` produce integers; any other data type
/// fails with a type mismatch.
pub fn parse_int(kind: DataType, value: &str) -> Result<i64> {
    if !kind.is_integer() {
        return Err(ConfError::type_mismatch(kind.name(), "an integer"));
    }
    read_integer(kind, value)
}

/// Parse a floating point value
pub fn parse_float(kind: DataType, value: &str) -> Result<f64> {
    if !kind.is_float() {
        return Err(ConfError::type_mismatch(kind.name(), "a floating point number"));
    }
    read_float(kind, value)
}

/// Parse a date into POSIX seconds at midnight UTC
pub fn parse_date(kind: DataType, value: &str) -> Result<i64> {
    parse_date_time(kind, value).map(|dt| dt.timestamp())
}

/// Parse a date into midnight UTC of that day
pub fn parse_date_time(kind: DataType, value: &str) -> Result<DateTime<Utc>> {
    if !kind.is_temporal() {
        return Err(ConfError::type_mismatch(kind.name(), "a date"));
    }
    let date = read_date(kind, value)?;
    Ok(date.and_time(NaiveTime::default()).and_utc())
}

fn read_integer(kind: DataType, value: &str) -> Result<i64> {
    let n = value.parse::<i64>().map_err(|err| {
        ConfError::invalid_value(CFG0101, kind.name(), value, err.to_string())
    })?;
    if kind == DataType::PositiveInteger && n <= 0 {
        return Err(ConfError::invalid_value(
            CFG0102,
            kind.name(),
            value,
            "must be greater than zero",
        ));
    }
    Ok(n)
}

fn read_float(kind: DataType, value: &str) -> Result<f64> {
    let x = value.parse::<f64>().map_err(|err| {
        ConfError::invalid_value(CFG0103, kind.name(), value, err.to_string())
    })?;
    if !x.is_finite() {
        return Err(ConfError::invalid_value(
            CFG0104,
            kind.name(),
            value,
            "must be a finite number",
        ));
    }
    if kind == DataType::PositiveFloat && x <= 0.0 {
        return Err(ConfError::invalid_value(
            CFG0102,
            kind.name(),
            value,
            "must be greater than zero",
        ));
    }
    Ok(x)
}

fn read_date(kind: DataType, value: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .filter(|(_, sep, year_first)| has_date_shape(value, *sep, *year_first))
        .find_map(|(fmt, _, _)| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            ConfError::invalid_value(
                CFG0105,
                kind.name(),
                value,
                "expected DD/MM/YYYY or YYYY-MM-DD",
            )
        })
}

/// Three ASCII-digit fields: a four-digit year and one- or two-digit day
/// and month. chrono alone would accept whitespace, signs and short years.
fn has_date_shape(value: &str, sep: char, year_first: bool) -> bool {
    let fields: Vec<&str> = value.split(sep).collect();
    let [a, b, c] = fields.as_slice() else {
        return false;
    };
    let (year, day_month) = if year_first { (a, [b, c]) } else { (c, [a, b]) };
    let digits = |f: &str| f.bytes().all(|b| b.is_ascii_digit());

    year.len() == 4
        && digits(year)
        && day_month
            .iter()
            .all(|f| (1..=2).contains(&f.len()) && digits(f))
}

fn check_path_text(kind: DataType, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConfError::invalid_value(CFG0111, kind.name(), value, "empty path"));
    }
    if value.contains('\0') {
        return Err(ConfError::invalid_value(
            CFG0111,
            kind.name(),
            value,
            "path contains a NUL byte",
        ));
    }
    Ok(())
}
