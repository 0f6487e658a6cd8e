use crate::{
    error::{EstimatorError, Result},
    params::{self, DOUBLING_PERIOD, ICU_CASES_RATIO, SEVERE_CASES_RATIO, VENTILATOR_CASES_RATIO},
    prelude::Real,
};
use getset::CopyGetters;
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Impact scenario of a projection.
///
/// Scenarios differ only by the ratio between reported cases and the actual
/// number of infected people.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Scenario {
    Normal,
    Severe,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Normal, Scenario::Severe];

    /// Number of infected people per reported case.
    pub fn multiplier(self) -> i64 {
        match self {
            Scenario::Normal => params::NORMAL_IMPACT_MULTIPLIER,
            Scenario::Severe => params::SEVERE_IMPACT_MULTIPLIER,
        }
    }

    /// Estimated number of people currently infected.
    pub fn currently_infected(self, reported_cases: u64) -> i128 {
        reported_cases as i128 * self.multiplier() as i128
    }

    /// Estimated number of infections after the given number of days, or None
    /// if it does not fit in 128 bits.
    pub fn infections_by(self, reported_cases: u64, days: Real) -> Option<i128> {
        let infected = self.currently_infected(reported_cases);
        if infected == 0 {
            return Some(0);
        }
        2i128.checked_pow(projection_factor(days))?.checked_mul(infected)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Normal => f.write_str("normal"),
            Scenario::Severe => f.write_str("severe"),
        }
    }
}

/// Number of times infections double during a period of the given number of
/// days. Only whole doubling periods count.
pub fn projection_factor(days: Real) -> u32 {
    (days / DOUBLING_PERIOD).trunc() as u32
}

/// Projected impact of the epidemic in a single scenario.
///
/// All fields are truncated toward zero. Hospital beds may be negative, which
/// signals a shortage of beds.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize, CopyGetters)]
#[serde(rename_all = "camelCase")]
#[getset(get_copy = "pub")]
pub struct Estimate {
    currently_infected: i128,
    infections_by_requested_time: i128,
    severe_cases_by_requested_time: i128,
    hospital_beds_by_requested_time: i128,
    #[serde(rename = "casesForICUByRequestedTime")]
    cases_for_icu_by_requested_time: i128,
    cases_for_ventilators_by_requested_time: i128,
    dollars_in_flight: i128,
}

impl Estimate {
    /// Compute the projections for a scenario.
    ///
    /// `period_days` must be positive. The only failure is a projection too
    /// large to be represented by a 128 bit integer.
    pub fn compute(
        scenario: Scenario,
        reported_cases: u64,
        period_days: Real,
        hospital_beds: u64,
        earning_population: i64,
        daily_income: Real,
    ) -> Result<Self> {
        let overflow = || {
            EstimatorError::invalid_input(format!(
                "{} scenario: projections after {} days exceed the representable range",
                scenario, period_days
            ))
        };
        let to_int = |x: Real| truncate(x).ok_or_else(overflow);

        let currently_infected = scenario.currently_infected(reported_cases);
        let infections = scenario
            .infections_by(reported_cases, period_days)
            .ok_or_else(overflow)?;

        let severe_cases = to_int(infections as Real * SEVERE_CASES_RATIO)?;
        let beds_left = to_int(severe_cases as Real - params::available_beds(hospital_beds))?;
        let icu_cases = to_int(infections as Real * ICU_CASES_RATIO)?;
        let ventilator_cases = to_int(severe_cases as Real * VENTILATOR_CASES_RATIO)?;

        // Exact integer product before going to floating point, when it fits
        let earning_population = earning_population as i128;
        let income_base = match infections.checked_mul(earning_population) {
            Some(n) => n as Real,
            None => infections as Real * earning_population as Real,
        };
        let dollars_in_flight = to_int(income_base * daily_income / period_days)?;

        if beds_left < 0 {
            debug!(target: "estimate", "{} scenario: shortage of {} beds", scenario, -beds_left);
        }

        let estimate = Estimate {
            currently_infected,
            infections_by_requested_time: infections,
            severe_cases_by_requested_time: severe_cases,
            hospital_beds_by_requested_time: beds_left,
            cases_for_icu_by_requested_time: icu_cases,
            cases_for_ventilators_by_requested_time: ventilator_cases,
            dollars_in_flight,
        };
        trace!(target: "estimate", "{} scenario: {:?}", scenario, estimate);
        Ok(estimate)
    }
}

/// Drop the fractional part toward zero, or None if the result does not fit
/// in an i128.
fn truncate(x: Real) -> Option<i128> {
    const LIMIT: Real = 170141183460469231731687303715884105728.0; // 2^127
    let x = x.trunc();
    if x.is_finite() && x < LIMIT && x >= -LIMIT {
        Some(x as i128)
    } else {
        None
    }
}
