//! Projections of the impact of COVID-19 on a region.
//!
//! From the number of reported cases and a few regional indicators, the
//! estimator projects infections, hospital and ICU demand and daily economic
//! losses after a given period of time. Projections are computed for a normal
//! and a severe impact scenario.
//!
//! ```
//! use covid_impact::prelude::*;
//!
//! let data = r#"{
//!     "region": {"name": "Africa", "avgDailyIncomeInUSD": 1.5, "avgDailyIncomePopulation": 0.6},
//!     "periodType": "days",
//!     "timeToElapse": 30,
//!     "reportedCases": 10,
//!     "population": 1000,
//!     "totalHospitalBeds": 5000
//! }"#;
//! let result = estimate(EstimationInput::from_json(data)?)?;
//! assert_eq!(result.impact().infections_by_requested_time(), 102400);
//! # Ok::<(), EstimatorError>(())
//! ```
pub mod error;
pub mod estimate;
pub mod estimator;
pub mod input;
pub mod params;
pub mod prelude;

pub use crate::error::{EstimatorError, Result};
pub use crate::estimate::{Estimate, Scenario};
pub use crate::estimator::{estimate, estimate_json, estimate_value, CombinedResult};
pub use crate::input::{EstimationInput, PeriodType, Quantity, Region};
pub use crate::prelude::Real;
