//! numcalc: numeric values and value collections
//!
//! This crate bundles the numcalc building blocks:
//! - Real and complex values with a ranked numeric type
//! - Conversion of untyped input into values
//! - `Values`, a resizable list that tracks its core type
//!
//! # Example
//!
//! ```
//! use numcalc::{NumericType, Value, Values};
//!
//! let mut values = Values::new(3);
//! values.set(1, Value::complex(2.0, 3.0))?;
//! values.append(Value::real(5.0));
//!
//! assert_eq!(values.len(), 4);
//! assert_eq!(values.core_type(), NumericType::Complex);
//! assert_eq!(values.get(3)?, Value::real(5.0));
//! # Ok::<(), numcalc::CalcError>(())
//! ```

// Re-export all public APIs from internal crates
pub use numcalc_diagnostics as diagnostics;
pub use numcalc_types as types;
pub use numcalc_values as values;

// Convenience re-exports
pub use numcalc_diagnostics::{CalcError, ErrorCode, Result};
pub use numcalc_types::{Complex64, NumericType, Value, make_value};
pub use numcalc_values::{Slot, Values};
