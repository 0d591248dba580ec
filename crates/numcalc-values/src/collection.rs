//! The `Values` collection
//!
//! Slots are populated through the same path as `set`, so zero values are
//! stored as empty slots and the core type is the highest rank present.
//! Construction, `append` and `subset` rebuild the whole collection and
//! recompute the core type from scratch; `set` only ever raises it.

use numcalc_diagnostics::{CalcError, Result};
use numcalc_types::{NumericType, Value, make_value};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Index;

use crate::Slot;

/// Slots stored inline before spilling to the heap
const INLINE_SLOTS: usize = 8;

type SlotVec = SmallVec<[Slot; INLINE_SLOTS]>;

/// Iterator over the values of a collection, empty slots yielding zero
pub type Iter<'a> = std::iter::Map<std::slice::Iter<'a, Slot>, fn(&Slot) -> Value>;

/// Ordered, resizable list of numeric values with a tracked core type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Slot>", into = "Vec<Slot>")]
pub struct Values {
    slots: SlotVec,
    core_type: NumericType,
}

impl Values {
    /// Create a collection of `len` empty slots with the lowest core type
    pub fn new(len: usize) -> Self {
        Self {
            slots: SmallVec::from_elem(Slot::Empty, len),
            core_type: NumericType::lowest(),
        }
    }

    /// Build a collection from values, normalizing zeros to empty slots
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::populate(values.into_iter().map(Slot::Filled).collect())
    }

    /// Build a collection from slots, normalizing zeros to empty slots
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Slot>,
    {
        Self::populate(slots.into_iter().collect())
    }

    /// Build a collection from untyped input.
    ///
    /// Each input goes through [`make_value`]; unsupported input becomes zero.
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<serde_json::Value>,
    {
        Self::from_values(raw.into_iter().map(|input| make_value(input.borrow())))
    }

    fn populate(source: SlotVec) -> Self {
        let mut values = Self::new(source.len());
        for (index, slot) in source.into_iter().enumerate() {
            if let Slot::Filled(value) = slot {
                values.store(index, value);
            }
        }
        log::trace!(
            "rebuilt {} slots, core type {}",
            values.len(),
            values.core_type
        );
        values
    }

    /// Write `value` at an index already known to be in bounds
    fn store(&mut self, index: usize, value: Value) {
        if value.is_zero() {
            self.slots[index] = Slot::Empty;
        } else {
            self.core_type = self.core_type.max(value.get_type());
            self.slots[index] = Slot::Filled(value);
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the collection has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Highest rank among the stored values
    pub fn core_type(&self) -> NumericType {
        self.core_type
    }

    /// Get the value at `index`, zero for an empty slot
    pub fn get(&self, index: usize) -> Result<Value> {
        self.slots
            .get(index)
            .map(Slot::value)
            .ok_or_else(|| CalcError::index_out_of_range(index, self.len()))
    }

    /// Set the value at `index`.
    ///
    /// A zero value empties the slot. The core type is raised to the
    /// value's rank if higher and is never lowered.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        if index >= self.len() {
            return Err(CalcError::index_out_of_range(index, self.len()));
        }
        self.store(index, value);
        Ok(())
    }

    /// Append a value, rebuilding the collection
    pub fn append(&mut self, value: Value) {
        let mut slots = std::mem::take(&mut self.slots);
        slots.push(Slot::Filled(value));
        *self = Self::populate(slots);
    }

    /// Copy of the collection with slots and core type taken verbatim
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Collection of slots `start..=finish`.
    ///
    /// Both ends are inclusive. `start == finish + 1` yields an empty
    /// collection.
    pub fn subset(&self, start: usize, finish: usize) -> Result<Self> {
        let len = self.len();
        let end = finish
            .checked_add(1)
            .filter(|&end| end <= len)
            .ok_or_else(|| CalcError::index_out_of_range(finish, len))?;
        if start > end {
            return Err(CalcError::invalid_range(start, finish, len));
        }
        Ok(Self::populate(self.slots[start..end].iter().copied().collect()))
    }

    /// Index of the first slot matching `value`.
    ///
    /// A slot of the highest rank matches on the full complex value; any
    /// other slot matches on the real component alone. Empty slots never
    /// match.
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.slots.iter().position(|slot| match slot {
            Slot::Empty => false,
            Slot::Filled(stored) if stored.get_type().is_highest() => {
                stored.complex_value() == value.complex_value()
            }
            Slot::Filled(stored) => stored.real_part() == value.real_part(),
        })
    }

    /// Backing slots
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Copy of the backing slots
    pub fn retrieve_slots(&self) -> Vec<Slot> {
        self.copy().slots.into_vec()
    }

    /// Iterate over the values, empty slots yielding zero
    pub fn iter(&self) -> Iter<'_> {
        self.slots.iter().map(Slot::value as fn(&Slot) -> Value)
    }

    /// Values with zeros materialized
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }
}

impl Index<usize> for Values {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match &self.slots[index] {
            Slot::Filled(value) => value,
            Slot::Empty => &Value::ZERO,
        }
    }
}

impl PartialEq for Values {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Value> for Values {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl From<Vec<Value>> for Values {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl From<Vec<Slot>> for Values {
    fn from(slots: Vec<Slot>) -> Self {
        Self::from_slots(slots)
    }
}

impl From<Values> for Vec<Slot> {
    fn from(values: Values) -> Self {
        values.slots.into_vec()
    }
}
