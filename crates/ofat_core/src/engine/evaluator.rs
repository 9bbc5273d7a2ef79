//! Perturbation evaluation with optional parallelism
//!
//! Each parameter is evaluated twice (up and down) against its own copy of the
//! base case. The cases share no mutable state, so with the `parallel` feature
//! they are spread across the rayon pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Calculation;
use crate::error::CalculationError;
use crate::model::{CaseLabel, Direction, ParameterSet, SensitivityResults};

/// One perturbed evaluation: which parameter, which way
#[derive(Debug, Clone, Copy)]
struct PerturbationCase<'a> {
    parameter: &'a str,
    base_value: f64,
    direction: Direction,
}

/// Every (parameter, direction) pair for the given base case
fn perturbation_cases(parameters: &ParameterSet) -> Vec<PerturbationCase<'_>> {
    parameters
        .iter()
        .flat_map(|(parameter, base_value)| {
            Direction::ALL.into_iter().map(move |direction| PerturbationCase {
                parameter,
                base_value,
                direction,
            })
        })
        .collect()
}

/// Evaluate one case on a fresh copy of the base parameters
fn evaluate_case(
    calculation: &dyn Calculation,
    parameters: &ParameterSet,
    delta: f64,
    case: PerturbationCase<'_>,
) -> Result<f64, CalculationError> {
    let perturbed_value = case.direction.perturb(case.base_value, delta);
    let perturbed = parameters.with_value(case.parameter, perturbed_value);

    tracing::trace!(
        parameter = case.parameter,
        direction = ?case.direction,
        value = perturbed_value,
        "evaluating perturbation"
    );

    let output = calculation.evaluate(&perturbed).map_err(|source| {
        tracing::warn!(
            parameter = case.parameter,
            direction = ?case.direction,
            error = %source,
            "calculation failed"
        );
        CalculationError::Perturbation {
            parameter: case.parameter.to_string(),
            case: CaseLabel::new(case.direction, delta),
            source,
        }
    })?;

    if output.is_nan() {
        tracing::warn!(
            parameter = case.parameter,
            direction = ?case.direction,
            "calculation returned NaN"
        );
        return Err(CalculationError::PerturbationNonNumeric {
            parameter: case.parameter.to_string(),
            case: CaseLabel::new(case.direction, delta),
        });
    }

    Ok(output)
}

/// Evaluate every parameter perturbed up and down, all others at base.
///
/// Fails with the first [`CalculationError`] encountered; no partial results are
/// returned.
pub(super) fn perturb_all(
    calculation: &dyn Calculation,
    parameters: &ParameterSet,
    delta: f64,
) -> Result<SensitivityResults, CalculationError> {
    let cases = perturbation_cases(parameters);

    tracing::debug!(
        parameters = parameters.len(),
        evaluations = cases.len(),
        delta,
        "starting sensitivity run"
    );

    #[cfg(feature = "parallel")]
    let outputs: Vec<f64> = cases
        .par_iter()
        .map(|&case| evaluate_case(calculation, parameters, delta, case))
        .collect::<Result<_, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let outputs: Vec<f64> = cases
        .iter()
        .map(|&case| evaluate_case(calculation, parameters, delta, case))
        .collect::<Result<_, _>>()?;

    // Outputs line up with cases, so aggregation order never depends on scheduling
    let mut results = SensitivityResults::new(delta);
    for (case, output) in cases.iter().zip(outputs) {
        results.record(case.parameter, case.direction, output);
    }

    tracing::debug!(parameters = results.len(), "sensitivity run complete");

    Ok(results)
}
