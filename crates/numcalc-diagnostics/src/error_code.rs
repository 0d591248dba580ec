//! numcalc error codes following a structured numbering system
//!
//! Error code ranges:
//! - CALC0001-CALC0099: Access errors (indexing, ranges)
//! - CALC0100-CALC0199: Conversion errors (numeric literals, raw input)

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

    /// Check if this is an access error (0001-0099)
    pub const fn is_access_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a conversion error (0100-0199)
    pub const fn is_conversion_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CALC{:04}", self.0)
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

    // Access errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Index out of range").with_help("Check the index against len() before use"),
    );
    map.insert(
        2,
        ErrorInfo::new("Invalid range")
            .with_help("Ranges are inclusive: start must not exceed finish + 1"),
    );

    // Conversion errors (0100-0199)
    map.insert(100, ErrorInfo::new("Invalid numeric literal"));

    map
});

// Access errors
pub const CALC0001: ErrorCode = ErrorCode::new(1);
pub const CALC0002: ErrorCode = ErrorCode::new(2);

// Conversion errors
pub const CALC0100: ErrorCode = ErrorCode::new(100);
