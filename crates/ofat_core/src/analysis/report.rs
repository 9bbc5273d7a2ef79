//! Plain-text sensitivity report.

use serde::{Deserialize, Serialize};

use super::impact::{ParameterImpact, check_base, impacts_for_labels, rank_by_swing};
use crate::engine::SensitivityEngine;
use crate::error::ReportError;
use crate::model::SensitivityResults;

const PARAMETER_HEADER: &str = "Parameter";
const COLUMN_GAP: &str = "  ";

/// Row order of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Alphabetical by parameter name
    #[default]
    ByName,
    /// Largest swing first
    BySwing,
}

/// Renders results as a table of percentage deviations from the base case
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    pub order: RowOrder,
}

impl ReportFormatter {
    #[must_use]
    pub fn new(order: RowOrder) -> Self {
        Self { order }
    }

    /// Render `results` against `engine`'s current base case and labels.
    ///
    /// Fails when the base case is zero or undefined, when the base calculation
    /// fails, or when `results` were produced under a different delta or over
    /// different parameter names than the engine now holds. Parameter values are
    /// not compared.
    pub fn render(
        &self,
        engine: &SensitivityEngine,
        results: &SensitivityResults,
    ) -> Result<String, ReportError> {
        if results.delta() != engine.delta() {
            return Err(ReportError::StaleResults {
                results_delta: results.delta(),
                engine_delta: engine.delta(),
            });
        }
        if !results.parameters().eq(engine.parameters().names()) {
            return Err(ReportError::MismatchedParameters {
                results: results.parameters().map(str::to_string).collect(),
                engine: engine.parameters().names().map(str::to_string).collect(),
            });
        }

        let base = check_base(engine.base()?)?;
        let labels = engine.labels();
        let mut impacts = impacts_for_labels(results, &labels, base)?;
        if self.order == RowOrder::BySwing {
            rank_by_swing(&mut impacts);
        }

        let (up_label, down_label) = labels;
        Ok(layout(up_label.as_str(), down_label.as_str(), &impacts))
    }
}

/// Render `results` in name order. See [`ReportFormatter::render`].
pub fn text_report(
    engine: &SensitivityEngine,
    results: &SensitivityResults,
) -> Result<String, ReportError> {
    ReportFormatter::default().render(engine, results)
}

/// Signed two-decimal percentage, e.g. `+25.00%`
#[must_use]
pub fn format_signed_percent(percent: f64) -> String {
    format!("{percent:+.2}%")
}

fn layout(up_label: &str, down_label: &str, impacts: &[ParameterImpact]) -> String {
    let rows: Vec<(&str, String, String)> = impacts
        .iter()
        .map(|impact| {
            (
                impact.parameter.as_str(),
                format_signed_percent(impact.up_percent),
                format_signed_percent(impact.down_percent),
            )
        })
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _, _)| name.chars().count())
        .chain(std::iter::once(PARAMETER_HEADER.len()))
        .max()
        .unwrap_or(0);
    let up_width = rows
        .iter()
        .map(|(_, up, _)| up.len())
        .chain(std::iter::once(up_label.chars().count()))
        .max()
        .unwrap_or(0);
    let down_width = rows
        .iter()
        .map(|(_, _, down)| down.len())
        .chain(std::iter::once(down_label.chars().count()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{PARAMETER_HEADER:<name_width$}{COLUMN_GAP}{up_label:>up_width$}{COLUMN_GAP}{down_label:>down_width$}"
    ));
    for (name, up, down) in &rows {
        lines.push(format!(
            "{name:<name_width$}{COLUMN_GAP}{up:>up_width$}{COLUMN_GAP}{down:>down_width$}"
        ));
    }
    lines.join("\n")
}
