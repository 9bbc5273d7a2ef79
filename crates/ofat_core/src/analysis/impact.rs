//! Percentage impact of each parameter relative to the base case.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::ReportError;
use crate::model::{CaseLabel, SensitivityResults};

/// Percentage deviation of `value` from `base`: `(value / base - 1) × 100`
#[must_use]
pub fn percent_change(value: f64, base: f64) -> f64 {
    (value / base - 1.0) * 100.0
}

/// Fails unless `base` is a usable divisor
pub(crate) fn check_base(base: f64) -> Result<f64, ReportError> {
    if base == 0.0 || !base.is_finite() {
        return Err(ReportError::UndefinedBase(base));
    }
    Ok(base)
}

/// How far one parameter moves the output in each direction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterImpact {
    pub parameter: String,
    /// Calculation output with the parameter increased
    pub up_value: f64,
    /// Calculation output with the parameter decreased
    pub down_value: f64,
    /// Percent change from base when increased
    pub up_percent: f64,
    /// Percent change from base when decreased
    pub down_percent: f64,
}

impl ParameterImpact {
    /// Distance between the two outcomes, in percentage points
    #[must_use]
    pub fn swing(&self) -> f64 {
        (self.up_percent - self.down_percent).abs()
    }
}

/// Impacts for every parameter in `results`, looked up under the given labels
pub(crate) fn impacts_for_labels(
    results: &SensitivityResults,
    labels: &(CaseLabel, CaseLabel),
    base: f64,
) -> Result<Vec<ParameterImpact>, ReportError> {
    let base = check_base(base)?;
    let (up_label, down_label) = labels;

    results
        .parameters()
        .map(|parameter| -> Result<ParameterImpact, ReportError> {
            let lookup = |label: &CaseLabel| {
                results
                    .get(parameter, label)
                    .ok_or_else(|| ReportError::MissingCase {
                        parameter: parameter.to_string(),
                        case: label.clone(),
                    })
            };
            let up_value = lookup(up_label)?;
            let down_value = lookup(down_label)?;
            Ok(ParameterImpact {
                parameter: parameter.to_string(),
                up_value,
                down_value,
                up_percent: percent_change(up_value, base),
                down_percent: percent_change(down_value, base),
            })
        })
        .collect()
}

impl SensitivityResults {
    /// Percentage impact of every parameter against `base`.
    ///
    /// Fails with [`ReportError::UndefinedBase`] when `base` is zero or not finite.
    pub fn impacts(&self, base: f64) -> Result<Vec<ParameterImpact>, ReportError> {
        impacts_for_labels(self, &self.labels(), base)
    }
}

/// Sort most influential first (largest swing). Ties keep name order.
pub fn rank_by_swing(impacts: &mut [ParameterImpact]) {
    impacts.sort_by(|a, b| {
        b.swing()
            .partial_cmp(&a.swing())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.parameter.cmp(&b.parameter))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    fn sample_results() -> SensitivityResults {
        let mut results = SensitivityResults::new(0.1);
        results.record("alpha", Direction::Up, 1.41);
        results.record("alpha", Direction::Down, 1.19);
        results.record("beta", Direction::Up, 1.32);
        results.record("beta", Direction::Down, 1.28);
        results
    }

    #[test]
    fn test_percent_change() {
        assert!((percent_change(1.25, 1.0) - 25.0).abs() < 1e-12);
        assert!((percent_change(0.875, 1.0) + 12.5).abs() < 1e-12);
        assert!((percent_change(-2.0, -1.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_impacts() {
        let impacts = sample_results().impacts(1.3).unwrap();
        assert_eq!(impacts.len(), 2);
        assert_eq!(impacts[0].parameter, "alpha");
        assert!((impacts[0].up_percent - 8.461538).abs() < 1e-5);
        assert!((impacts[0].down_percent + 8.461538).abs() < 1e-5);
        assert!((impacts[1].up_percent - 1.538461).abs() < 1e-5);
    }

    #[test]
    fn test_impacts_reject_zero_base() {
        let err = sample_results().impacts(0.0).unwrap_err();
        assert!(matches!(err, ReportError::UndefinedBase(b) if b == 0.0));
        assert!(sample_results().impacts(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rank_by_swing() {
        let mut impacts = sample_results().impacts(1.3).unwrap();
        impacts.reverse();
        rank_by_swing(&mut impacts);
        assert_eq!(impacts[0].parameter, "alpha");
        assert_eq!(impacts[1].parameter, "beta");
        assert!(impacts[0].swing() > impacts[1].swing());
    }
}
