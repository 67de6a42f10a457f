//! Configuration value typing
//!
//! This crate defines the data types a configuration value may declare
//! itself as, and the operations over them:
//! - Lookup between a data type and its canonical name
//! - Validation of raw strings (pure syntax, plus filesystem state for path types)
//! - Parsing of validated strings into native values

pub mod data_type;
pub mod fs;
pub mod registry;
pub mod syntax;
pub mod validator;
pub mod value;

pub use confdata_diagnostics::{ConfError, Result};
pub use data_type::*;
pub use fs::*;
pub use registry::*;
pub use syntax::*;
pub use validator::*;
pub use value::*;
