//! Free-function interface over [`DataType`]
//!
//! These are the entry points a configuration loader calls for each field:
//! look the declared type up by name, then validate or parse the raw text.
//! Validation uses the host filesystem; build a [`Validator`] directly to
//! substitute another one.

use crate::{ConfValue, DataType, Validator};
use confdata_diagnostics::Result;

/// Look up a data type by its canonical name.
///
/// Matching is exact and case-sensitive. Fails with `UnknownKind` when no
/// data type has this name.
pub fn kind_from_name(name: &str) -> Result<DataType> {
    name.parse::<DataType>().inspect_err(|err| {
        log::debug!("data type lookup failed: {}", err);
    })
}

/// True iff [`kind_from_name`] would succeed
pub fn is_recognized_name(name: &str) -> bool {
    DataType::from_name(name).is_some()
}

/// The canonical name of a data type
pub fn name_of(kind: DataType) -> &'static str {
    kind.name()
}

/// True iff `value` satisfies `kind`.
///
/// Path data types stat the host filesystem.
pub fn validate(kind: DataType, value: &str) -> bool {
    Validator::local().validate(kind, value)
}

/// Like [`validate`], but returns why the value is rejected
pub fn check(kind: DataType, value: &str) -> Result<()> {
    Validator::local().check(kind, value)
}

/// Parse a value into its native representation using the host filesystem
pub fn parse_value(kind: DataType, value: &str) -> Result<ConfValue> {
    Validator::local().parse_value(kind, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in DataType::ALL {
            let name = name_of(kind);
            assert_eq!(kind_from_name(name).unwrap(), kind);
            assert!(is_recognized_name(name));
        }
    }

    #[test]
    fn test_unknown_names() {
        for name in ["", "int", "String", " string", "string ", "positive_integer"] {
            assert!(kind_from_name(name).is_err());
            assert!(!is_recognized_name(name));
        }
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate(DataType::Integer, "42"));
        assert!(!validate(DataType::Integer, "42x"));
        assert!(!validate(DataType::Integer, ""));
        assert!(!validate(DataType::PositiveInteger, "-1"));
        assert!(!validate(DataType::PositiveInteger, "0"));
        assert!(validate(DataType::PositiveInteger, "3"));
        assert!(validate(DataType::Float, "3.14"));
        assert!(!validate(DataType::PositiveFloat, "-2.0"));
    }

    #[test]
    fn test_validate_string_accepts_anything() {
        assert!(validate(DataType::String, ""));
        assert!(validate(DataType::String, "  any\ttext "));
    }
}
