use crate::prelude::Real;

///////////////////////////////////////////////////////////////////////////////
// Impact multipliers
///////////////////////////////////////////////////////////////////////////////

/// Ratio between reported and estimated current infections in the normal
/// impact scenario.
pub const NORMAL_IMPACT_MULTIPLIER: i64 = 10;

/// Ratio between reported and estimated current infections in the severe
/// impact scenario.
pub const SEVERE_IMPACT_MULTIPLIER: i64 = 50;

/// Number of days it takes for the number of infections to double.
pub const DOUBLING_PERIOD: Real = 3.0;

///////////////////////////////////////////////////////////////////////////////
// Clinical ratios
///////////////////////////////////////////////////////////////////////////////

/// Fraction of infections that require hospitalization.
pub const SEVERE_CASES_RATIO: Real = 0.15;

/// Fraction of infections that require intensive care.
pub const ICU_CASES_RATIO: Real = 0.05;

/// Fraction of severe cases that require ventilators.
pub const VENTILATOR_CASES_RATIO: Real = 0.02;

///////////////////////////////////////////////////////////////////////////////
// Hospital beds
///////////////////////////////////////////////////////////////////////////////

// Beds available for COVID-19 patients are 35% of the 35% left free when
// hospitals run at 65% occupancy, assuming 90% of all beds are operational.
pub const OPERATIONAL_BEDS_RATIO: Real = 0.9;
pub const FREE_BEDS_RATIO: Real = 0.35;
pub const COVID_BEDS_RATIO: Real = 0.35;

///////////////////////////////////////////////////////////////////////////////
// Calendar
///////////////////////////////////////////////////////////////////////////////

pub const DAYS_PER_WEEK: Real = 7.0;
pub const DAYS_PER_MONTH: Real = 30.0;
