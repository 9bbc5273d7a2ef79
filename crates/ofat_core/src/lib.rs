//! One-factor-at-a-time sensitivity analysis
//!
//! This crate measures how a numeric calculation responds to each of its inputs.
//! Every parameter is scaled up and down by a relative delta while the others stay
//! at their base-case values, and the outputs are collected per parameter.
//! It supports:
//! - Any calculation expressed as a closure over named parameters
//! - Parallel evaluation of perturbations (`parallel` feature, on by default)
//! - Percentage-impact reports and swing ranking
//!
//! # Example
//!
//! ```ignore
//! use ofat_core::SensitivityEngine;
//!
//! let engine = SensitivityEngine::builder()
//!     .calculation_fn(|p| Ok(p.value("alpha")? + p.value("beta")?))
//!     .parameter("alpha", 1.1)
//!     .parameter("beta", 0.2)
//!     .delta(0.1)
//!     .build()?;
//!
//! let results = engine.run()?;
//! assert_eq!(results.len(), 2);
//! print!("{}", engine.text_report(&results)?);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod engine;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{ParameterImpact, ReportFormatter, RowOrder, text_report};
pub use engine::{Calculation, SensitivityEngine, SensitivityEngineBuilder, calculation_fn};
pub use error::{BoxError, CalculationError, Error, ReportError, Result, ValidationError};
pub use model::{CaseLabel, Direction, MissingParameter, ParameterSet, SensitivityResults};
