//! Validation against filesystem state
//!
//! A [`Validator`] combines the pure checks in [`crate::syntax`] with the
//! existence checks for path data types. Results for path types are a
//! snapshot: the entry may change as soon as the check returns.

use crate::{
    ConfValue, DataType, EntryKind, FileSystem, LocalFs, check_syntax, parse_date_time,
    parse_float, parse_int,
};
use confdata_diagnostics::{CFG0106, CFG0107, CFG0108, CFG0109, CFG0110, ConfError, Result};
use std::path::{Path, PathBuf};

/// Validates and parses values, consulting `F` for path data types.
#[derive(Debug, Clone, Default)]
pub struct Validator<F = LocalFs> {
    fs: F,
}

impl Validator<LocalFs> {
    /// Validator over the host filesystem and `PATH`
    pub fn local() -> Self {
        Self::new(LocalFs::new())
    }
}

impl<F: FileSystem> Validator<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Check a value, returning the reason it is rejected
    pub fn check(&self, kind: DataType, value: &str) -> Result<()> {
        check_syntax(kind, value)?;
        exists_on_disk(kind, value, &self.fs)
    }

    /// True iff the value satisfies the data type. Never panics.
    pub fn validate(&self, kind: DataType, value: &str) -> bool {
        match self.check(kind, value) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("rejected {:?} as {}: {}", value, kind, err);
                false
            }
        }
    }

    /// Parse a value into its native representation.
    ///
    /// Bare executable names are resolved against the search path; every
    /// other path is returned as written.
    pub fn parse_value(&self, kind: DataType, value: &str) -> Result<ConfValue> {
        match kind {
            DataType::String => Ok(ConfValue::String(value.to_string())),
            DataType::Integer | DataType::PositiveInteger => {
                parse_int(kind, value).map(ConfValue::Integer)
            }
            DataType::Float | DataType::PositiveFloat => {
                parse_float(kind, value).map(ConfValue::Float)
            }
            DataType::Date => parse_date_time(kind, value).map(ConfValue::Date),
            DataType::FilePath | DataType::FolderPath => {
                self.check(kind, value)?;
                Ok(ConfValue::Path(PathBuf::from(value)))
            }
            DataType::ExecutablePath => {
                check_syntax(kind, value)?;
                resolve_executable(value, &self.fs).map(ConfValue::Path)
            }
        }
    }
}

/// Check that a path value names an entry of the right kind.
///
/// Data types that are not paths always pass. The syntax of `value` is not
/// checked here; see [`check_syntax`].
pub fn exists_on_disk<F: FileSystem + ?Sized>(kind: DataType, value: &str, fs: &F) -> Result<()> {
    match kind {
        DataType::FilePath => match stat(fs, kind, Path::new(value))? {
            Some(EntryKind::File { .. }) => Ok(()),
            Some(_) => Err(ConfError::invalid_value(
                CFG0107,
                kind.name(),
                value,
                "not a regular file",
            )),
            None => Err(not_found(kind, value)),
        },
        DataType::FolderPath => match stat(fs, kind, Path::new(value))? {
            Some(EntryKind::Directory) => Ok(()),
            Some(_) => Err(ConfError::invalid_value(
                CFG0108,
                kind.name(),
                value,
                "not a directory",
            )),
            None => Err(not_found(kind, value)),
        },
        DataType::ExecutablePath => resolve_executable(value, fs).map(drop),
        _ => Ok(()),
    }
}

/// Resolve an executable value to the file it names.
///
/// A value containing a path separator must itself be an executable file.
/// A bare name is looked up in each search path directory in turn; the
/// current directory is not searched.
pub fn resolve_executable<F: FileSystem + ?Sized>(value: &str, fs: &F) -> Result<PathBuf> {
    let kind = DataType::ExecutablePath;

    if value.contains(std::path::is_separator) {
        let path = Path::new(value);
        return match stat(fs, kind, path)? {
            Some(EntryKind::File { executable: true }) => Ok(path.to_path_buf()),
            Some(EntryKind::File { executable: false }) => Err(ConfError::invalid_value(
                CFG0109,
                kind.name(),
                value,
                "no execute permission",
            )),
            Some(_) => Err(ConfError::invalid_value(
                CFG0107,
                kind.name(),
                value,
                "not a regular file",
            )),
            None => Err(not_found(kind, value)),
        };
    }

    for dir in fs.search_path() {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(value);
        match fs.entry(&candidate) {
            Ok(Some(EntryKind::File { executable: true })) => {
                log::trace!("resolved {} to {}", value, candidate.display());
                return Ok(candidate);
            }
            Ok(_) => {}
            Err(err) => log::debug!("skipping {}: {}", candidate.display(), err),
        }
    }

    Err(ConfError::invalid_value(
        CFG0110,
        kind.name(),
        value,
        "not found in search path",
    ))
}

fn stat<F: FileSystem + ?Sized>(fs: &F, kind: DataType, path: &Path) -> Result<Option<EntryKind>> {
    fs.entry(path).map_err(|err| {
        ConfError::io(
            format!("cannot check {} '{}': {}", kind, path.display(), err),
            Some(path.display().to_string()),
        )
    })
}

fn not_found(kind: DataType, value: &str) -> ConfError {
    ConfError::invalid_value(CFG0106, kind.name(), value, "no such file or directory")
}
