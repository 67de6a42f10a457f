//! Diagnostics and error handling for configuration value typing
//!
//! This crate provides the error type shared by the confdata crates,
//! structured error codes, and a small diagnostic record used when reporting
//! rejected values to a user.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for confdata operations
pub type Result<T> = std::result::Result<T, ConfError>;
