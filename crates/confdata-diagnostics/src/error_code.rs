//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - CFG0001-CFG0099: Lookup errors (data type names and discriminants)
//! - CFG0100-CFG0199: Value errors (a string rejected for a data type)
//! - CFG0400-CFG0499: System errors (I/O)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a lookup error (0001-0099)
    pub const fn is_lookup_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a value error (0100-0199)
    pub const fn is_value_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CFG{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Lookup errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Unknown data type name")
            .with_help("Data type names are case-sensitive; run `confdata kinds` for the list"),
    );
    map.insert(2, ErrorInfo::new("Invalid data type discriminant"));

    // Value errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Type mismatch")
            .with_help("The value was requested as a type its data type cannot produce"),
    );
    map.insert(101, ErrorInfo::new("Invalid integer"));
    map.insert(102, ErrorInfo::new("Value is not positive"));
    map.insert(103, ErrorInfo::new("Invalid floating point number"));
    map.insert(104, ErrorInfo::new("Number is not finite"));
    map.insert(
        105,
        ErrorInfo::new("Invalid date").with_help("Dates are written DD/MM/YYYY or YYYY-MM-DD"),
    );
    map.insert(106, ErrorInfo::new("Path not found"));
    map.insert(107, ErrorInfo::new("Not a regular file"));
    map.insert(108, ErrorInfo::new("Not a directory"));
    map.insert(109, ErrorInfo::new("File is not executable"));
    map.insert(
        110,
        ErrorInfo::new("Executable not found in search path")
            .with_help("Give a path to the program or add its directory to PATH"),
    );
    map.insert(111, ErrorInfo::new("Malformed path"));
    map.insert(112, ErrorInfo::new("Blank string"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));

    map
});

// Lookup errors
pub const CFG0001: ErrorCode = ErrorCode::new(1);
pub const CFG0002: ErrorCode = ErrorCode::new(2);

// Value errors
pub const CFG0100: ErrorCode = ErrorCode::new(100);
pub const CFG0101: ErrorCode = ErrorCode::new(101);
pub const CFG0102: ErrorCode = ErrorCode::new(102);
pub const CFG0103: ErrorCode = ErrorCode::new(103);
pub const CFG0104: ErrorCode = ErrorCode::new(104);
pub const CFG0105: ErrorCode = ErrorCode::new(105);
pub const CFG0106: ErrorCode = ErrorCode::new(106);
pub const CFG0107: ErrorCode = ErrorCode::new(107);
pub const CFG0108: ErrorCode = ErrorCode::new(108);
pub const CFG0109: ErrorCode = ErrorCode::new(109);
pub const CFG0110: ErrorCode = ErrorCode::new(110);
pub const CFG0111: ErrorCode = ErrorCode::new(111);
pub const CFG0112: ErrorCode = ErrorCode::new(112);

// System errors
pub const CFG0401: ErrorCode = ErrorCode::new(401);
