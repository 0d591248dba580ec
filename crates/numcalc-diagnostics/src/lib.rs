//! numcalc diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! numcalc crates: structured error codes and the `CalcError` type.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for numcalc operations
pub type Result<T> = std::result::Result<T, CalcError>;
