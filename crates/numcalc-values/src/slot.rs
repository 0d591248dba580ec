//! Collection slots

use numcalc_types::Value;
use serde::{Deserialize, Serialize};

/// A position in a `Values` collection.
///
/// An empty slot reads as the zero value. Collections never store a zero
/// value in a filled slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Value>", into = "Option<Value>")]
pub enum Slot {
    /// Implicit zero
    #[default]
    Empty,
    /// Stored value
    Filled(Value),
}

impl Slot {
    /// Check if the slot is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Value held by the slot, zero when empty
    pub fn value(&self) -> Value {
        match self {
            Self::Empty => Value::ZERO,
            Self::Filled(value) => *value,
        }
    }

    /// Stored value, if any
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Empty => None,
            Self::Filled(value) => Some(value),
        }
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Self::Filled(value)
    }
}

impl From<Option<Value>> for Slot {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Self::Empty, Self::Filled)
    }
}

impl From<Slot> for Option<Value> {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Empty => None,
            Slot::Filled(value) => Some(value),
        }
    }
}
