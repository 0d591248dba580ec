//! Numeric type ranks
//!
//! Every value carries a `NumericType`. Ranks are totally ordered so a
//! collection can track the dominant type of everything it holds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a numeric value
///
/// Variant order is the rank order: `Real < Complex`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum NumericType {
    /// Real number
    #[default]
    Real,
    /// Complex number
    Complex,
}

impl NumericType {
    /// The lowest rank, used for empty collections
    pub const fn lowest() -> Self {
        Self::Real
    }

    /// The highest rank
    pub const fn highest() -> Self {
        Self::Complex
    }

    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Complex => "Complex",
        }
    }

    /// Check if this is the highest rank
    pub const fn is_highest(&self) -> bool {
        matches!(self, Self::Complex)
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
