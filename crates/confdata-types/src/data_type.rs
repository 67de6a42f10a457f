//! Configuration data types

use confdata_diagnostics::ConfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The data type a configuration value declares itself as.
///
/// Serialized as its canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum DataType {
    /// Any text, including the empty string
    #[serde(rename = "string")]
    String = 0,
    /// Base-10 signed integer
    #[serde(rename = "integer")]
    Integer = 1,
    /// Integer greater than zero
    #[serde(rename = "positive integer")]
    PositiveInteger = 2,
    /// Finite base-10 floating point number
    #[serde(rename = "floating point number")]
    Float = 3,
    /// Floating point number greater than zero
    #[serde(rename = "positive floating point number")]
    PositiveFloat = 4,
    /// Existing regular file
    #[serde(rename = "file")]
    FilePath = 5,
    /// Executable file, by path or by name on the search path
    #[serde(rename = "executable")]
    ExecutablePath = 6,
    /// Existing directory
    #[serde(rename = "folder")]
    FolderPath = 7,
    /// Calendar day
    #[serde(rename = "date")]
    Date = 8,
}

impl DataType {
    /// Every data type, in discriminant order
    pub const ALL: [DataType; 9] = [
        Self::String,
        Self::Integer,
        Self::PositiveInteger,
        Self::Float,
        Self::PositiveFloat,
        Self::FilePath,
        Self::ExecutablePath,
        Self::FolderPath,
        Self::Date,
    ];

    /// Get the canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::PositiveInteger => "positive integer",
            Self::Float => "floating point number",
            Self::PositiveFloat => "positive floating point number",
            Self::FilePath => "file",
            Self::ExecutablePath => "executable",
            Self::FolderPath => "folder",
            Self::Date => "date",
        }
    }

    /// Look up a data type by exact, case-sensitive canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dt| dt.name() == name)
    }

    /// Get the raw discriminant
    pub const fn discriminant(&self) -> u8 {
        *self as u8
    }

    /// Check if values of this type parse to an integer
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer | Self::PositiveInteger)
    }

    /// Check if values of this type parse to a floating point number
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::PositiveFloat)
    }

    /// Check if this type is numeric
    pub const fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Check if this type names a filesystem entry
    pub const fn is_path(&self) -> bool {
        matches!(
            self,
            Self::FilePath | Self::ExecutablePath | Self::FolderPath
        )
    }

    /// Check if this type is temporal
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date)
    }

    /// Check if validation of this type has to consult the filesystem
    pub const fn requires_filesystem(&self) -> bool {
        self.is_path()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = ConfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfError::unknown_kind(s))
    }
}

impl TryFrom<u8> for DataType {
    type Error = ConfError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ConfError::invalid_kind(value))
    }
}

impl From<DataType> for u8 {
    fn from(dt: DataType) -> Self {
        dt.discriminant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdata_diagnostics::{CFG0001, CFG0002};

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, dt) in DataType::ALL.iter().enumerate() {
            assert_eq!(usize::from(dt.discriminant()), i);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = DataType::ALL.iter().map(DataType::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DataType::ALL.len());
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!("integer".parse::<DataType>().unwrap(), DataType::Integer);
        let err = "Integer".parse::<DataType>().unwrap_err();
        assert_eq!(err.code(), CFG0001);
    }

    #[test]
    fn test_try_from_discriminant() {
        assert_eq!(DataType::try_from(8).unwrap(), DataType::Date);
        assert_eq!(DataType::try_from(9).unwrap_err().code(), CFG0002);
        assert_eq!(u8::from(DataType::FolderPath), 7);
    }

    #[test]
    fn test_classification() {
        assert!(DataType::PositiveInteger.is_numeric());
        assert!(DataType::PositiveFloat.is_float());
        assert!(!DataType::Float.is_integer());
        assert!(DataType::ExecutablePath.requires_filesystem());
        assert!(!DataType::Date.requires_filesystem());
        assert!(DataType::Date.is_temporal());
        assert!(!DataType::String.is_path());
    }
}
