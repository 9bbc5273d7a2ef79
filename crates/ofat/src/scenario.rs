//! Scenario files: which calculation to analyse, with what inputs.
//!
//! ```yaml
//! calculation: compound_growth
//! delta: 0.1
//! parameters:
//!   principal: 10000
//!   rate: 0.05
//!   years: 30
//! ```

use std::path::Path;

use ofat_core::{ParameterSet, SensitivityEngine, ValidationError};
use serde::{Deserialize, Serialize};

use crate::builtins::BuiltinCalculation;
use crate::error::AppError;

/// Delta applied when neither the scenario nor the command line sets one
pub const DEFAULT_DELTA: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub calculation: BuiltinCalculation,
    pub parameters: ParameterSet,
    #[serde(default)]
    pub delta: Option<f64>,
}

impl Scenario {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_yaml(&content).map_err(|e| AppError::Parse(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            calculation = scenario.calculation.name(),
            parameters = scenario.parameters.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    /// Delta to use: the override if given, then the file's, then [`DEFAULT_DELTA`]
    #[must_use]
    pub fn effective_delta(&self, delta_override: Option<f64>) -> f64 {
        delta_override.or(self.delta).unwrap_or(DEFAULT_DELTA)
    }

    /// Required parameters of the calculation that the scenario does not define
    #[must_use]
    pub fn missing_parameters(&self) -> Vec<&'static str> {
        self.calculation
            .required_parameters()
            .iter()
            .copied()
            .filter(|name| !self.parameters.contains(name))
            .collect()
    }

    pub fn engine(
        &self,
        delta_override: Option<f64>,
    ) -> Result<SensitivityEngine, ValidationError> {
        let calculation = self.calculation;
        SensitivityEngine::builder()
            .calculation_fn(move |p| calculation.evaluate(p))
            .parameters(self.parameters.clone())
            .delta(self.effective_delta(delta_override))
            .build()
    }
}
