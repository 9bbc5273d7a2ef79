//! One-factor-at-a-time sensitivity engine.
//!
//! The engine holds a calculation, a base-case [`ParameterSet`] and a delta. It
//! evaluates the base case, then re-evaluates the calculation once per parameter
//! and direction with only that parameter scaled by `1 ± delta`.
//!
//! ```ignore
//! use ofat_core::engine::SensitivityEngine;
//! use ofat_core::model::ParameterSet;
//!
//! let engine = SensitivityEngine::builder()
//!     .calculation_fn(|p| Ok(p.value("alpha")? + p.value("beta")?))
//!     .parameters(ParameterSet::from([("alpha", 1.1), ("beta", 0.2)]))
//!     .delta(0.1)
//!     .build()?;
//!
//! let results = engine.run()?;
//! println!("{}", engine.text_report(&results)?);
//! ```

mod builder;
mod evaluator;

use std::fmt;
use std::sync::Arc;

pub use builder::SensitivityEngineBuilder;

use crate::error::{BoxError, CalculationError, ReportError, ValidationError};
use crate::model::{CaseLabel, ParameterSet, SensitivityResults};

/// A numeric function over named parameters.
///
/// Implemented for any `Fn(&ParameterSet) -> Result<f64, BoxError>`. A `NaN`
/// return is treated as a non-numeric result.
pub trait Calculation: Send + Sync {
    fn evaluate(&self, parameters: &ParameterSet) -> Result<f64, BoxError>;
}

impl<F> Calculation for F
where
    F: Fn(&ParameterSet) -> Result<f64, BoxError> + Send + Sync,
{
    fn evaluate(&self, parameters: &ParameterSet) -> Result<f64, BoxError> {
        self(parameters)
    }
}

/// Pins a closure's signature so it can be passed where a [`Calculation`] is expected
pub fn calculation_fn<F>(f: F) -> F
where
    F: Fn(&ParameterSet) -> Result<f64, BoxError> + Send + Sync,
{
    f
}

/// Sensitivity engine: calculation, base-case parameters and delta
#[derive(Clone)]
pub struct SensitivityEngine {
    calculation: Arc<dyn Calculation>,
    parameters: ParameterSet,
    delta: f64,
}

impl fmt::Debug for SensitivityEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensitivityEngine")
            .field("calculation", &"<calculation>")
            .field("parameters", &self.parameters)
            .field("delta", &self.delta)
            .finish()
    }
}

impl SensitivityEngine {
    /// Start building an engine; all three fields are required
    #[must_use]
    pub fn builder() -> SensitivityEngineBuilder {
        SensitivityEngineBuilder::new()
    }

    /// Create an engine from its three fields, validating parameters and delta
    pub fn new(
        calculation: impl Calculation + 'static,
        parameters: ParameterSet,
        delta: f64,
    ) -> Result<Self, ValidationError> {
        Self::from_parts(Arc::new(calculation), parameters, delta)
    }

    pub(crate) fn from_parts(
        calculation: Arc<dyn Calculation>,
        parameters: ParameterSet,
        delta: f64,
    ) -> Result<Self, ValidationError> {
        validate_parameters(&parameters)?;
        validate_delta(delta)?;
        Ok(Self {
            calculation,
            parameters,
            delta,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn calculation(&self) -> &Arc<dyn Calculation> {
        &self.calculation
    }

    pub fn set_calculation(&mut self, calculation: impl Calculation + 'static) {
        self.calculation = Arc::new(calculation);
    }

    /// Replace the calculation with a shared one
    pub fn set_shared_calculation(&mut self, calculation: Arc<dyn Calculation>) {
        self.calculation = calculation;
    }

    #[must_use]
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Replace the whole parameter set. Nothing is merged with the old one.
    pub fn set_parameters(&mut self, parameters: ParameterSet) -> Result<(), ValidationError> {
        validate_parameters(&parameters)?;
        self.parameters = parameters;
        Ok(())
    }

    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn set_delta(&mut self, delta: f64) -> Result<(), ValidationError> {
        validate_delta(delta)?;
        self.delta = delta;
        Ok(())
    }

    /// Positive and negative case labels for the current delta
    #[must_use]
    pub fn labels(&self) -> (CaseLabel, CaseLabel) {
        CaseLabel::pair(self.delta)
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Evaluate the calculation at the base case
    pub fn base(&self) -> Result<f64, CalculationError> {
        let parameters = self.parameters.clone();
        let value = self
            .calculation
            .evaluate(&parameters)
            .map_err(|source| CalculationError::Base { source })?;
        if value.is_nan() {
            return Err(CalculationError::BaseNonNumeric);
        }
        Ok(value)
    }

    /// Evaluate every parameter perturbed up and down by delta, one at a time
    pub fn run(&self) -> Result<SensitivityResults, CalculationError> {
        evaluator::perturb_all(self.calculation.as_ref(), &self.parameters, self.delta)
    }

    /// Render `results` as a percentage-impact table against the base case
    pub fn text_report(&self, results: &SensitivityResults) -> Result<String, ReportError> {
        crate::analysis::text_report(self, results)
    }
}

fn validate_parameters(parameters: &ParameterSet) -> Result<(), ValidationError> {
    if parameters.is_empty() {
        return Err(ValidationError::EmptyParameters);
    }
    for (name, value) in parameters.iter() {
        if name.is_empty() {
            return Err(ValidationError::EmptyParameterName);
        }
        if !value.is_finite() {
            return Err(ValidationError::NonNumericParameter {
                name: name.to_string(),
                value,
            });
        }
    }
    Ok(())
}

fn validate_delta(delta: f64) -> Result<(), ValidationError> {
    if !delta.is_finite() {
        return Err(ValidationError::NonNumericDelta(delta));
    }
    Ok(())
}
