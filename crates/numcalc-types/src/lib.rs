//! numcalc type system
//!
//! This crate defines the numeric building blocks of numcalc:
//! - `NumericType`, the ordered rank of a value (Real < Complex)
//! - `Value`, a real or complex number with a canonical zero
//! - Conversion of untyped input into values

pub mod coercion;
pub mod type_system;
pub mod value;

pub use coercion::make_value;
pub use num_complex::Complex64;
pub use type_system::*;
pub use value::*;
