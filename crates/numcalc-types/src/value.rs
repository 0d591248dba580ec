//! Numeric values - the runtime representation of calculator numbers
//!
//! This module defines the `Value` enum and its conversions.

use num_complex::Complex64;
use numcalc_diagnostics::{CalcError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::NumericType;

/// A real or complex number.
///
/// `Value::zero()` is the canonical zero; `is_zero` is true for it and for
/// any other value equal to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Real number
    Real(f64),
    /// Complex number
    Complex(Complex64),
}

impl Value {
    /// The canonical zero value
    pub const ZERO: Value = Value::Real(0.0);

    /// Create the zero value
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create a real value
    pub const fn real(value: f64) -> Self {
        Self::Real(value)
    }

    /// Create a complex value
    pub const fn complex(re: f64, im: f64) -> Self {
        Self::Complex(Complex64::new(re, im))
    }

    /// Check if this value equals zero
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Real(r) => *r == 0.0,
            Self::Complex(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    /// Get the numeric rank of this value
    ///
    /// The rank follows the variant, so `Complex(3+0i)` is still Complex.
    pub fn get_type(&self) -> NumericType {
        match self {
            Self::Real(_) => NumericType::Real,
            Self::Complex(_) => NumericType::Complex,
        }
    }

    /// Real component
    pub fn real_part(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Complex(c) => c.re,
        }
    }

    /// Value as a complex number (`re + 0i` for reals)
    pub fn complex_value(&self) -> Complex64 {
        match self {
            Self::Real(r) => Complex64::new(*r, 0.0),
            Self::Complex(c) => *c,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{}", r),
            Self::Complex(c) => {
                let sign = if c.im < 0.0 { '-' } else { '+' };
                write!(f, "{}{}{}i", c.re, sign, c.im.abs())
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Real(value as f64)
    }
}

impl From<Complex64> for Value {
    fn from(value: Complex64) -> Self {
        Self::Complex(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        value.to_f64().map(Self::Real).unwrap_or_default()
    }
}

impl FromStr for Value {
    type Err = CalcError;

    /// Parse a real (`2.5`) or complex (`2+3i`, `-1.5i`, `i`) literal
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Err(CalcError::conversion("Empty numeric literal", s));
        }

        let Some(body) = text.strip_suffix('i') else {
            return parse_component(text, s).map(Self::Real);
        };

        let (re, im) = match split_imaginary(body) {
            Some(at) => (parse_component(&body[..at], s)?, &body[at..]),
            None => (0.0, body),
        };
        let im = match im {
            "" | "+" => 1.0,
            "-" => -1.0,
            other => parse_component(other, s)?,
        };
        Ok(Self::complex(re, im))
    }
}

/// Position of the sign separating the real part from the imaginary part.
///
/// Signs belonging to an exponent (`1e-3`) are skipped.
fn split_imaginary(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_component(text: &str, input: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| CalcError::conversion("Invalid numeric literal", input))
}
