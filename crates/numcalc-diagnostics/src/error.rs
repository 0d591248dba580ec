//! numcalc error types

use crate::{CALC0001, CALC0002, CALC0100, ErrorCode};
use thiserror::Error;

/// Main numcalc error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Slot index past the end of a collection
    #[error("{code}: index {index} out of range for length {len}", code = CALC0001)]
    IndexOutOfRange { index: usize, len: usize },

    /// Inclusive range whose start lies past `finish + 1`
    #[error(
        "{code}: invalid range {start}..={finish} for length {len}",
        code = CALC0002
    )]
    InvalidRange {
        start: usize,
        finish: usize,
        len: usize,
    },

    /// Text that is not a real or complex literal
    #[error("{code}: {message}: '{input}'", code = CALC0100)]
    Conversion { message: String, input: String },
}

impl CalcError {
    /// Create an index-out-of-range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid-range error
    pub fn invalid_range(start: usize, finish: usize, len: usize) -> Self {
        Self::InvalidRange { start, finish, len }
    }

    /// Create a conversion error
    pub fn conversion(message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
            input: input.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IndexOutOfRange { .. } => CALC0001,
            Self::InvalidRange { .. } => CALC0002,
            Self::Conversion { .. } => CALC0100,
        }
    }

    /// Help text registered for this error's code
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }
}
