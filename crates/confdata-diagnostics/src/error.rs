//! confdata error types

use crate::{CFG0001, CFG0002, CFG0100, CFG0401, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The value is rejected
    Error,
    /// The value is accepted but looks suspicious
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message about a single configuration value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// The raw value or name the diagnostic is about
    pub subject: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            subject: None,
            help: code.info().help.map(str::to_string),
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Render for a terminal, one line plus an optional help line.
    ///
    /// With the `colored` feature the severity is highlighted.
    pub fn render(&self) -> String {
        #[cfg(feature = "colored")]
        let severity = {
            use colored::Colorize;
            match self.severity {
                Severity::Error => self.severity.to_string().red().bold().to_string(),
                Severity::Warning => self.severity.to_string().yellow().bold().to_string(),
            }
        };
        #[cfg(not(feature = "colored"))]
        let severity = self.severity.to_string();

        let mut out = format!("{}[{}]: {}", severity, self.code, self.message);
        if let Some(help) = &self.help {
            out.push_str("\n  help: ");
            out.push_str(help);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(subject) = &self.subject {
            write!(f, " ({:?})", subject)?;
        }
        Ok(())
    }
}

/// Main confdata error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfError {
    /// No data type carries this name
    #[error("{code}: unknown data type '{name}'")]
    UnknownKind { code: ErrorCode, name: String },

    /// A raw discriminant outside the defined data types
    #[error("{code}: invalid data type discriminant {value}")]
    InvalidKind { code: ErrorCode, value: u8 },

    /// A value was requested as a type its data type cannot produce
    #[error("{code}: a {kind} value cannot be read as {expected}")]
    TypeMismatch {
        code: ErrorCode,
        kind: String,
        expected: &'static str,
    },

    /// The string does not satisfy the data type
    #[error("{code}: '{value}' is not a valid {kind}: {message}")]
    InvalidValue {
        code: ErrorCode,
        kind: String,
        value: String,
        message: String,
    },

    /// I/O failure while probing the filesystem
    #[error("{code}: {message}")]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<String>,
    },
}

impl ConfError {
    /// Create an unknown data type error
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownKind {
            code: CFG0001,
            name: name.into(),
        }
    }

    /// Create an invalid discriminant error
    pub fn invalid_kind(value: u8) -> Self {
        Self::InvalidKind {
            code: CFG0002,
            value,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(kind: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            code: CFG0100,
            kind: kind.into(),
            expected,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        code: ErrorCode,
        kind: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            code,
            kind: kind.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            code: CFG0401,
            message: message.into(),
            path,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownKind { code, .. } => *code,
            Self::InvalidKind { code, .. } => *code,
            Self::TypeMismatch { code, .. } => *code,
            Self::InvalidValue { code, .. } => *code,
            Self::Io { code, .. } => *code,
        }
    }

    /// True for errors caused by user-supplied text rather than caller bugs
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownKind { .. } | Self::InvalidValue { .. })
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::UnknownKind { code, name } => {
                Diagnostic::error(*code, format!("unknown data type '{}'", name))
                    .with_subject(name.clone())
            }
            Self::InvalidKind { code, value } => Diagnostic::error(
                *code,
                format!("invalid data type discriminant {}", value),
            ),
            Self::TypeMismatch {
                code,
                kind,
                expected,
            } => Diagnostic::error(
                *code,
                format!("a {} value cannot be read as {}", kind, expected),
            ),
            Self::InvalidValue {
                code,
                kind,
                value,
                message,
            } => Diagnostic::error(*code, format!("not a valid {}: {}", kind, message))
                .with_subject(value.clone()),
            Self::Io {
                code,
                message,
                path,
            } => {
                let diag = Diagnostic::error(*code, message.clone());
                match path {
                    Some(path) => diag.with_subject(path.clone()),
                    None => diag,
                }
            }
        }
    }
}

impl From<std::io::Error> for ConfError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}
