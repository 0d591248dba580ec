//! numcalc value collections
//!
//! `Values` is the main list type of numcalc: an ordered, resizable
//! sequence of numeric slots that tracks its core type, the highest
//! `NumericType` among the values it holds.

mod collection;
mod slot;

pub use collection::*;
pub use slot::*;
