use thiserror::Error;

use crate::model::CaseLabel;

/// Boxed failure raised by a user-supplied calculation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while constructing or reconfiguring an engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("parameter set is empty")]
    EmptyParameters,
    #[error("parameter name is empty")]
    EmptyParameterName,
    #[error("parameter `{name}` is not numeric (value={value})")]
    NonNumericParameter { name: String, value: f64 },
    #[error("delta is not numeric (value={0})")]
    NonNumericDelta(f64),
}

/// Errors raised while evaluating the calculation
#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("base case calculation failed: {source}")]
    Base {
        #[source]
        source: BoxError,
    },
    #[error("base case calculation returned a non-numeric value")]
    BaseNonNumeric,
    #[error("calculation failed for parameter `{parameter}` ({case}): {source}")]
    Perturbation {
        parameter: String,
        case: CaseLabel,
        #[source]
        source: BoxError,
    },
    #[error("calculation returned a non-numeric value for parameter `{parameter}` ({case})")]
    PerturbationNonNumeric { parameter: String, case: CaseLabel },
}

impl CalculationError {
    /// Parameter whose perturbation triggered the failure, if any
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Perturbation { parameter, .. } | Self::PerturbationNonNumeric { parameter, .. } => {
                Some(parameter.as_str())
            }
            Self::Base { .. } | Self::BaseNonNumeric => None,
        }
    }

    /// Case label of the failing perturbation, if any
    #[must_use]
    pub fn case(&self) -> Option<&CaseLabel> {
        match self {
            Self::Perturbation { case, .. } | Self::PerturbationNonNumeric { case, .. } => {
                Some(case)
            }
            Self::Base { .. } | Self::BaseNonNumeric => None,
        }
    }
}

/// Errors raised while rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("base case is zero or undefined (base={0})")]
    UndefinedBase(f64),
    #[error("results were computed with delta={results_delta} but the engine now uses delta={engine_delta}")]
    StaleResults { results_delta: f64, engine_delta: f64 },
    #[error(
        "results cover parameters [{}] but the engine holds [{}]",
        .results.join(", "),
        .engine.join(", ")
    )]
    MismatchedParameters {
        results: Vec<String>,
        engine: Vec<String>,
    },
    #[error("results have no entry for parameter `{parameter}` under case {case}")]
    MissingCase { parameter: String, case: CaseLabel },
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// Any error produced by this crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

pub type Result<T> = std::result::Result<T, Error>;
