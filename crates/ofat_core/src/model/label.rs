//! Perturbation directions and the case labels derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decimal places kept when rendering `delta × 100` in a label
const LABEL_DECIMALS: i32 = 9;

/// Direction in which a parameter is perturbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// +1 for `Up`, -1 for `Down`
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }

    #[must_use]
    pub fn sign_char(self) -> char {
        match self {
            Direction::Up => '+',
            Direction::Down => '-',
        }
    }

    /// Multiplier applied to a base value: `1 ± delta`
    #[must_use]
    pub fn factor(self, delta: f64) -> f64 {
        1.0 + self.sign() * delta
    }

    /// Perturb `value` relative to itself
    #[must_use]
    pub fn perturb(self, value: f64, delta: f64) -> f64 {
        self.factor(delta) * value
    }
}

/// Text label for one perturbation case, e.g. `+10%` or `-2.5%`.
///
/// Built as the direction's sign, then `delta × 100`, then `%`. The percentage is
/// rounded to nine decimal places and printed with the shortest decimal that
/// round-trips (`f64`'s `Display`), so `0.1` gives `10` and `0.333` gives `33.3`
/// rather than `33.300000000000004`. Equal deltas always produce equal labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseLabel(String);

impl CaseLabel {
    #[must_use]
    pub fn new(direction: Direction, delta: f64) -> Self {
        Self(format!(
            "{}{}%",
            direction.sign_char(),
            format_percent(delta * 100.0)
        ))
    }

    /// Positive and negative labels for `delta`
    #[must_use]
    pub fn pair(delta: f64) -> (Self, Self) {
        (
            Self::new(Direction::Up, delta),
            Self::new(Direction::Down, delta),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CaseLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CaseLabel> for String {
    fn from(label: CaseLabel) -> Self {
        label.0
    }
}

fn format_percent(percent: f64) -> String {
    if !percent.is_finite() {
        return percent.to_string();
    }
    let scale = 10f64.powi(LABEL_DECIMALS);
    let scaled = percent * scale;
    // Too large to carry nine decimals anyway
    if !scaled.is_finite() {
        return percent.to_string();
    }
    let rounded = scaled.round() / scale;
    // -0 would otherwise print as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    rounded.to_string()
}
