//! Rendering analysis results for the terminal or for other programs.

use ofat_core::analysis::rank_by_swing;
use ofat_core::{ParameterImpact, ReportFormatter, RowOrder, SensitivityEngine, SensitivityResults};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable form of one analysis
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub delta: f64,
    pub base: f64,
    pub labels: [String; 2],
    pub results: &'a SensitivityResults,
    pub impacts: Vec<ParameterImpact>,
}

pub fn render(
    engine: &SensitivityEngine,
    results: &SensitivityResults,
    order: RowOrder,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(ReportFormatter::new(order).render(engine, results)?),
        OutputFormat::Json => {
            let base = engine.base()?;
            let mut impacts = results.impacts(base)?;
            if order == RowOrder::BySwing {
                rank_by_swing(&mut impacts);
            }
            let (up, down) = results.labels();
            let report = JsonReport {
                delta: results.delta(),
                base,
                labels: [up.into(), down.into()],
                results,
                impacts,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
