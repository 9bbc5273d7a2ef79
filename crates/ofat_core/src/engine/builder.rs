//! Fluent construction of a [`SensitivityEngine`].

use std::sync::Arc;

use super::{Calculation, SensitivityEngine};
use crate::error::{BoxError, ValidationError};
use crate::model::ParameterSet;

/// Builder requiring `calculation`, `parameters` and `delta`.
///
/// [`build`](Self::build) fails with [`ValidationError::MissingField`] naming the
/// first absent field, and never yields a partially configured engine.
#[derive(Default)]
pub struct SensitivityEngineBuilder {
    calculation: Option<Arc<dyn Calculation>>,
    parameters: Option<ParameterSet>,
    delta: Option<f64>,
}

impl SensitivityEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calculation(mut self, calculation: impl Calculation + 'static) -> Self {
        self.calculation = Some(Arc::new(calculation));
        self
    }

    /// Set the calculation from a closure
    #[must_use]
    pub fn calculation_fn<F>(self, f: F) -> Self
    where
        F: Fn(&ParameterSet) -> Result<f64, BoxError> + Send + Sync + 'static,
    {
        self.calculation(f)
    }

    #[must_use]
    pub fn shared_calculation(mut self, calculation: Arc<dyn Calculation>) -> Self {
        self.calculation = Some(calculation);
        self
    }

    #[must_use]
    pub fn parameters(mut self, parameters: impl Into<ParameterSet>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    /// Add a single parameter, creating the set if needed
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters
            .get_or_insert_with(ParameterSet::new)
            .insert(name, value);
        self
    }

    #[must_use]
    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn build(self) -> Result<SensitivityEngine, ValidationError> {
        let calculation = self
            .calculation
            .ok_or(ValidationError::MissingField("calculation"))?;
        let parameters = self
            .parameters
            .ok_or(ValidationError::MissingField("parameters"))?;
        let delta = self.delta.ok_or(ValidationError::MissingField("delta"))?;
        SensitivityEngine::from_parts(calculation, parameters, delta)
    }
}
