mod label;
mod parameters;
mod results;

pub use label::*;
pub use parameters::*;
pub use results::*;
