use std::path::PathBuf;

use ofat_core::{CalculationError, ReportError, ValidationError};
use thiserror::Error;

/// Errors raised by the command-line front end
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(String),
    #[error("invalid scenario: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
