//! Coercion of untyped input into numeric values
//!
//! Untyped input arrives as `serde_json::Value`. Supported shapes:
//! - numbers become reals
//! - strings are parsed as real or complex literals
//! - `[re, im]` pairs and `{"re": .., "im": ..}` objects become complex
//!
//! Anything else is forced to the zero value; conversion never fails.

use serde_json::{Map, Value as Json};

use crate::Value;

/// Convert untyped input into a `Value`, mapping unsupported input to zero
pub fn make_value(raw: &Json) -> Value {
    let value = match raw {
        Json::Number(n) => n.as_f64().map(Value::Real),
        Json::String(s) => s.parse().ok(),
        Json::Array(items) => complex_from_pair(items),
        Json::Object(fields) => complex_from_object(fields),
        Json::Null | Json::Bool(_) => None,
    };
    value.unwrap_or_else(|| {
        log::debug!("unsupported numeric input {raw}, coercing to zero");
        Value::ZERO
    })
}

fn complex_from_pair(items: &[Json]) -> Option<Value> {
    match items {
        [re, im] => Some(Value::complex(re.as_f64()?, im.as_f64()?)),
        _ => None,
    }
}

fn complex_from_object(fields: &Map<String, Json>) -> Option<Value> {
    let component = |short: &str, long: &str| fields.get(short).or_else(|| fields.get(long));
    let re = component("re", "real");
    let im = component("im", "imag");
    if re.is_none() && im.is_none() {
        return None;
    }

    let part = |field: Option<&Json>| match field {
        Some(v) => v.as_f64(),
        None => Some(0.0),
    };
    Some(Value::complex(part(re)?, part(im)?))
}

impl From<&Json> for Value {
    fn from(raw: &Json) -> Self {
        make_value(raw)
    }
}
