//! Fixed parameters of the impact projections.
//!
//! Every number that enters the estimates lives here, so the formulas in the
//! [`crate::estimate`] module read as plain arithmetic over named ratios.
mod constants;

pub use constants::*;

use crate::prelude::Real;

/// Surge capacity of hospital beds, i.e., the number of beds expected to be
/// available for COVID-19 patients from the total bed count.
///
/// Ratios are applied one at a time and in order, so the floating point result
/// is not the same as multiplying by a pre-computed combined ratio.
pub fn available_beds(total_beds: u64) -> Real {
    total_beds as Real * OPERATIONAL_BEDS_RATIO * FREE_BEDS_RATIO * COVID_BEDS_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn available_beds_applies_all_ratios() {
        assert_approx_eq!(available_beds(5000), 551.25, 1e-9);
        assert_approx_eq!(available_beds(100), 11.025, 1e-9);
        assert_eq!(available_beds(0), 0.0);
    }

    #[test]
    fn severe_multiplier_is_five_times_normal() {
        assert_eq!(SEVERE_IMPACT_MULTIPLIER, 5 * NORMAL_IMPACT_MULTIPLIER);
    }
}
