//! Calculations the command line can run by name.
//!
//! These are selected, never parsed: a scenario names one of them and supplies
//! its parameters.

use ofat_core::{BoxError, ParameterSet};
use serde::{Deserialize, Serialize};

/// A calculation shipped with the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinCalculation {
    /// Sum of every parameter
    Sum,
    /// Product of every parameter
    Product,
    /// `principal × (1 + rate)^years`
    CompoundGrowth,
    /// Level payment amortizing `principal` over `periods` at periodic `rate`
    LoanPayment,
}

impl BuiltinCalculation {
    pub const ALL: [BuiltinCalculation; 4] = [
        BuiltinCalculation::Sum,
        BuiltinCalculation::Product,
        BuiltinCalculation::CompoundGrowth,
        BuiltinCalculation::LoanPayment,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::CompoundGrowth => "compound_growth",
            Self::LoanPayment => "loan_payment",
        }
    }

    /// Parameters the calculation reads; empty when it uses whatever is supplied
    #[must_use]
    pub fn required_parameters(self) -> &'static [&'static str] {
        match self {
            Self::Sum | Self::Product => &[],
            Self::CompoundGrowth => &["principal", "rate", "years"],
            Self::LoanPayment => &["principal", "rate", "periods"],
        }
    }

    pub fn evaluate(self, parameters: &ParameterSet) -> Result<f64, BoxError> {
        match self {
            Self::Sum => Ok(parameters.iter().map(|(_, v)| v).sum()),
            Self::Product => Ok(parameters.iter().map(|(_, v)| v).product()),
            Self::CompoundGrowth => {
                let principal = parameters.value("principal")?;
                let rate = parameters.value("rate")?;
                let years = parameters.value("years")?;
                Ok(principal * (1.0 + rate).powf(years))
            }
            Self::LoanPayment => {
                let principal = parameters.value("principal")?;
                let rate = parameters.value("rate")?;
                let periods = parameters.value("periods")?;
                loan_payment(principal, rate, periods)
            }
        }
    }
}

fn loan_payment(principal: f64, rate: f64, periods: f64) -> Result<f64, BoxError> {
    if periods <= 0.0 {
        return Err(format!("periods must be positive (got {periods})").into());
    }
    if rate == 0.0 {
        return Ok(principal / periods);
    }
    Ok(principal * rate / (1.0 - (1.0 + rate).powf(-periods)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_growth() {
        let params = ParameterSet::from([("principal", 1000.0), ("rate", 0.1), ("years", 2.0)]);
        let value = BuiltinCalculation::CompoundGrowth.evaluate(&params).unwrap();
        assert!((value - 1210.0).abs() < 1e-9);
    }

    #[test]
    fn test_loan_payment() {
        let params = ParameterSet::from([("principal", 1200.0), ("rate", 0.0), ("periods", 12.0)]);
        let value = BuiltinCalculation::LoanPayment.evaluate(&params).unwrap();
        assert!((value - 100.0).abs() < 1e-9);

        // 100k over 360 months at 0.5%/month
        let params =
            ParameterSet::from([("principal", 100_000.0), ("rate", 0.005), ("periods", 360.0)]);
        let value = BuiltinCalculation::LoanPayment.evaluate(&params).unwrap();
        assert!((value - 599.55).abs() < 0.01);
    }

    #[test]
    fn test_loan_payment_rejects_zero_periods() {
        let params = ParameterSet::from([("principal", 1200.0), ("rate", 0.01), ("periods", 0.0)]);
        assert!(BuiltinCalculation::LoanPayment.evaluate(&params).is_err());
    }

    #[test]
    fn test_missing_parameter() {
        let params = ParameterSet::from([("principal", 1000.0)]);
        let err = BuiltinCalculation::CompoundGrowth
            .evaluate(&params)
            .unwrap_err();
        assert_eq!(err.to_string(), "parameter `rate` is not defined");
    }

    #[test]
    fn test_sum_and_product() {
        let params = ParameterSet::from([("a", 2.0), ("b", 3.0), ("c", 4.0)]);
        assert_eq!(BuiltinCalculation::Sum.evaluate(&params).unwrap(), 9.0);
        assert_eq!(BuiltinCalculation::Product.evaluate(&params).unwrap(), 24.0);
    }

    #[test]
    fn test_names_round_trip_through_serde() {
        for builtin in BuiltinCalculation::ALL {
            let json = serde_json::to_string(&builtin).unwrap();
            assert_eq!(json, format!("\"{}\"", builtin.name()));
        }
    }
}
