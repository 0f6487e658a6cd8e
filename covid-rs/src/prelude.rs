pub use crate::{
    error::{EstimatorError, Result},
    estimate::{projection_factor, Estimate, Scenario},
    estimator::{estimate, estimate_json, estimate_value, CombinedResult},
    input::{EstimationInput, PeriodType, Quantity, Region},
};

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
