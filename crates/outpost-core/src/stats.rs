//! Stat values and the ordered stat block carried by blueprints and items.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single stat value. Most stats are numeric; a few (like `damage_type`)
/// are short text markers set by crafting rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A numeric stat such as `damage` or `weight`.
    Number(f64),
    /// A text stat such as `damage_type`.
    Text(String),
}

impl StatValue {
    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// An ordered map of stat name to value.
///
/// Backed by a `BTreeMap` so iteration order (and therefore serialized and
/// printed output) is stable regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatBlock(BTreeMap<String, StatValue>);

impl StatBlock {
    /// Create an empty stat block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stat by name.
    pub fn get(&self, stat: &str) -> Option<&StatValue> {
        self.0.get(stat)
    }

    /// The numeric value of a stat, if present and numeric.
    pub fn number(&self, stat: &str) -> Option<f64> {
        self.0.get(stat).and_then(StatValue::as_number)
    }

    /// The text value of a stat, if present and text.
    pub fn text(&self, stat: &str) -> Option<&str> {
        self.0.get(stat).and_then(StatValue::as_text)
    }

    /// True if the stat exists at all, numeric or text.
    pub fn contains(&self, stat: &str) -> bool {
        self.0.contains_key(stat)
    }

    /// Insert or overwrite a stat.
    pub fn set(&mut self, stat: impl Into<String>, value: impl Into<StatValue>) {
        self.0.insert(stat.into(), value.into());
    }

    /// Add `amount` to a numeric stat. A missing (or non-numeric) stat is
    /// seeded from `default` before the addition.
    pub fn add(&mut self, stat: &str, amount: f64, default: f64) {
        let base = self.number(stat).unwrap_or(default);
        self.0
            .insert(stat.to_string(), StatValue::Number(base + amount));
    }

    /// Multiply a numeric stat by `factor`. No-op when the stat is absent
    /// or text.
    pub fn scale(&mut self, stat: &str, factor: f64) {
        if let Some(base) = self.number(stat) {
            self.0
                .insert(stat.to_string(), StatValue::Number(base * factor));
        }
    }

    /// Iterate over stats in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stats in the block.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the block has no stats.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<StatValue>> FromIterator<(K, V)> for StatBlock {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
