//! Interpreting sensitivity results.
//!
//! [`text_report`] turns a [`SensitivityResults`](crate::model::SensitivityResults)
//! into a table of percentage deviations from the base case:
//!
//! ```text
//! Parameter    +10%    -10%
//! alpha      +8.46%  -8.46%
//! beta       +1.54%  -1.54%
//! ```
//!
//! The same numbers are available programmatically through
//! [`ParameterImpact`], which also exposes the swing used for tornado-style
//! ranking.

mod impact;
mod report;

pub use impact::*;
pub use report::*;
