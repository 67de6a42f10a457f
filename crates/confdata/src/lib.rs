//! Typed configuration values
//!
//! A configuration loader reads a raw string and a declared data type name
//! for each field. This crate answers whether the string is acceptable for
//! that type and converts it to a native value.
//!
//! # Example
//!
//! ```
//! use confdata::{DataType, kind_from_name, parse_int, validate};
//!
//! let kind = kind_from_name("positive integer")?;
//! assert_eq!(kind, DataType::PositiveInteger);
//! assert!(validate(kind, "12"));
//! assert!(!validate(kind, "0"));
//! assert_eq!(parse_int(kind, "12")?, 12);
//! # Ok::<(), confdata::ConfError>(())
//! ```

// Re-export all public APIs from internal crates
pub use confdata_diagnostics as diagnostics;
pub use confdata_types as types;

// Convenience re-exports
pub use confdata_diagnostics::{ConfError, Diagnostic, ErrorCode, Result};
pub use confdata_types::{
    ConfValue, DataType, EntryKind, FileSystem, LocalFs, MemoryFs, Validator, check,
    check_syntax, exists_on_disk, is_recognized_name, kind_from_name, name_of, parse_date,
    parse_date_time, parse_float, parse_int, parse_value, resolve_executable,
    syntactically_valid, validate,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
