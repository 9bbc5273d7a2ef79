//! Command-line front end for `ofat_core`.
//!
//! Loads a YAML scenario naming a built-in calculation, runs the sensitivity
//! analysis and renders the report as text or JSON.

pub mod builtins;
pub mod error;
pub mod logging;
pub mod output;
pub mod scenario;

pub use builtins::BuiltinCalculation;
pub use error::AppError;
pub use logging::init_logging;
pub use output::{OutputFormat, render};
pub use scenario::Scenario;
