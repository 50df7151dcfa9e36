//! Labeled result payloads.
//!
//! Calculations hand their outputs to presentation layers as an ordered
//! mapping from result key to `(display label, value)`, so a table renderer
//! or JSON response can show human-readable labels without knowing anything
//! about the calculation. Values are plain `f64` or `Vec<f64>`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single result value: one number or an ordered list of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabeledValue {
    /// A single number.
    Scalar(f64),
    /// An ordered series of numbers.
    Series(Vec<f64>),
}

/// A display label paired with its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledEntry {
    /// Human-readable label.
    pub label: String,
    /// The value.
    pub value: LabeledValue,
}

/// Ordered `key -> (label, value)` mapping.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledResult {
    entries: Vec<(String, LabeledEntry)>,
}

impl LabeledResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar entry.
    #[must_use]
    pub fn with_scalar(mut self, key: &str, label: &str, value: f64) -> Self {
        self.push(key, label, LabeledValue::Scalar(value));
        self
    }

    /// Adds a series entry.
    #[must_use]
    pub fn with_series(mut self, key: &str, label: &str, values: Vec<f64>) -> Self {
        self.push(key, label, LabeledValue::Series(values));
        self
    }

    /// Inserts an entry, replacing any existing entry under the same key in place.
    pub fn push(&mut self, key: &str, label: &str, value: LabeledValue) {
        let entry = LabeledEntry {
            label: label.to_string(),
            value,
        };
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((key.to_string(), entry)),
        }
    }

    /// Returns the entry stored under `key`.
    pub fn get(&self, key: &str) -> Option<&LabeledEntry> {
        self.entries
            .iter()
            .find_map(|(k, entry)| (k == key).then_some(entry))
    }

    /// Returns the scalar stored under `key`, if it is one.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        match self.get(key)?.value {
            LabeledValue::Scalar(v) => Some(v),
            LabeledValue::Series(_) => None,
        }
    }

    /// Returns the series stored under `key`, if it is one.
    pub fn series(&self, key: &str) -> Option<&[f64]> {
        match &self.get(key)?.value {
            LabeledValue::Series(values) => Some(values),
            LabeledValue::Scalar(_) => None,
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabeledEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LabeledResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}
