//! Named numeric inputs to a calculation.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a calculation asks for a parameter that is not in the set.
///
/// Converts into [`crate::error::BoxError`], so calculations can use `?` on
/// [`ParameterSet::value`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter `{0}` is not defined")]
pub struct MissingParameter(pub String);

/// Mapping from parameter name to value.
///
/// Keys are unique and iterate in name order, so every traversal of the same
/// set visits parameters in the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Look up a value, failing with [`MissingParameter`] if it is absent
    pub fn value(&self, name: &str) -> Result<f64, MissingParameter> {
        self.get(name).ok_or_else(|| MissingParameter(name.to_string()))
    }

    /// Copy of this set with `name` replaced by `value`. Every other entry is untouched.
    #[must_use]
    pub fn with_value(&self, name: &str, value: f64) -> Self {
        let mut copy = self.clone();
        copy.values.insert(name.to_string(), value);
        copy
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parameter names in iteration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for ParameterSet {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<String, f64>> for ParameterSet {
    fn from(values: BTreeMap<String, f64>) -> Self {
        Self { values }
    }
}

impl Extend<(String, f64)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (String, f64)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
