//! CLI functionality for the confdata tool
//!
//! This module contains the subcommands and their shared plumbing:
//! - Listing data types
//! - Checking values
//! - Parsing values
//! - Logging and output formatting

pub mod check;
pub mod kinds;
pub mod logging;
pub mod output;
pub mod parse;

use confdata_types::{LocalFs, Validator};
use std::path::PathBuf;

/// Build the validator for the host filesystem.
///
/// An empty `search_path` means `PATH` is used.
pub fn local_validator(search_path: Vec<PathBuf>) -> Validator<LocalFs> {
    if search_path.is_empty() {
        Validator::local()
    } else {
        log::debug!("executable search path: {:?}", search_path);
        Validator::new(LocalFs::new().with_search_path(search_path))
    }
}
