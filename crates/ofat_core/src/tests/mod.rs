//! Integration tests for the sensitivity engine
//!
//! Tests are organized by topic:
//! - `scenario` - Worked examples with known outputs
//! - `properties` - Invariants checked over generated parameter sets
//! - `failures` - Calculation failures and how they propagate
//! - `report` - Text report layout and guards
//! - `staleness` - Results reused after the engine's delta changes

mod properties;

use crate::engine::SensitivityEngine;
use crate::model::ParameterSet;

/// `alpha + beta` at {alpha: 1.1, beta: 0.2} with a 10% delta
fn alpha_beta_engine() -> SensitivityEngine {
    SensitivityEngine::builder()
        .calculation_fn(|p| Ok(p.value("alpha")? + p.value("beta")?))
        .parameters(ParameterSet::from([("alpha", 1.1), ("beta", 0.2)]))
        .delta(0.1)
        .build()
        .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
