use std::collections::BTreeMap;

use serde::Serialize;

use super::{CaseLabel, Direction};

/// Outputs of one sensitivity run.
///
/// Maps each parameter name to the calculation output under each case label.
/// The snapshot remembers the delta it was computed with; its labels only mean
/// something for that delta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityResults {
    delta: f64,
    outcomes: BTreeMap<String, BTreeMap<CaseLabel, f64>>,
}

impl SensitivityResults {
    pub(crate) fn new(delta: f64) -> Self {
        Self {
            delta,
            outcomes: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, parameter: &str, direction: Direction, value: f64) {
        self.outcomes
            .entry(parameter.to_string())
            .or_default()
            .insert(CaseLabel::new(direction, self.delta), value);
    }

    /// Delta these results were computed with
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Positive and negative labels for this snapshot's delta
    #[must_use]
    pub fn labels(&self) -> (CaseLabel, CaseLabel) {
        CaseLabel::pair(self.delta)
    }

    /// Output recorded for `parameter` under `label`
    #[must_use]
    pub fn get(&self, parameter: &str, label: &CaseLabel) -> Option<f64> {
        self.outcomes.get(parameter)?.get(label).copied()
    }

    #[must_use]
    pub fn up(&self, parameter: &str) -> Option<f64> {
        self.get(parameter, &CaseLabel::new(Direction::Up, self.delta))
    }

    #[must_use]
    pub fn down(&self, parameter: &str) -> Option<f64> {
        self.get(parameter, &CaseLabel::new(Direction::Down, self.delta))
    }

    /// Case outputs for one parameter
    #[must_use]
    pub fn cases(&self, parameter: &str) -> Option<&BTreeMap<CaseLabel, f64>> {
        self.outcomes.get(parameter)
    }

    #[must_use]
    pub fn contains(&self, parameter: &str) -> bool {
        self.outcomes.contains_key(parameter)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.outcomes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<CaseLabel, f64>)> {
        self.outcomes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Plain nested map form, keyed by label text
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.outcomes
            .into_iter()
            .map(|(name, cases)| {
                let cases = cases
                    .into_iter()
                    .map(|(label, value)| (String::from(label), value))
                    .collect();
                (name, cases)
            })
            .collect()
    }
}
