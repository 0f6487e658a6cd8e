//! Combine the normal and severe projections for a region.
use crate::{
    error::Result,
    estimate::{Estimate, Scenario},
    input::EstimationInput,
};
use getset::Getters;
use log::*;
use serde::{Deserialize, Serialize};

/// Result of an estimation: the input data followed by the projections in the
/// normal and severe impact scenarios.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct CombinedResult {
    data: EstimationInput,
    impact: Estimate,
    severe_impact: Estimate,
}

impl CombinedResult {
    /// Projection for the given scenario.
    pub fn scenario(&self, scenario: Scenario) -> &Estimate {
        match scenario {
            Scenario::Normal => &self.impact,
            Scenario::Severe => &self.severe_impact,
        }
    }

    /// Render result as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render result as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute normal and severe impact projections for the given input.
///
/// The period is validated before any projection is computed and an
/// [`crate::EstimatorError::InvalidInput`] is returned if it is not a positive
/// number of days. Projections too large for a 128 bit integer fail with the
/// same error.
pub fn estimate(data: EstimationInput) -> Result<CombinedResult> {
    let days = data.period_days()?;
    let earning_population = data.earning_population();
    let daily_income = data.daily_income();
    debug!(
        target: "estimator",
        "region={}, period={} days, earning population={}",
        data.region.name, days, earning_population
    );

    let project = |scenario| {
        Estimate::compute(
            scenario,
            data.reported_cases,
            days,
            data.total_hospital_beds,
            earning_population,
            daily_income,
        )
    };
    let impact = project(Scenario::Normal)?;
    let severe_impact = project(Scenario::Severe)?;

    Ok(CombinedResult {
        data,
        impact,
        severe_impact,
    })
}

/// Same as [`estimate`], but takes an already parsed JSON document.
pub fn estimate_value(data: serde_json::Value) -> Result<CombinedResult> {
    estimate(serde_json::from_value(data)?)
}

/// Decode input from JSON text and return the result rendered as JSON.
pub fn estimate_json(data: &str) -> Result<String> {
    estimate(EstimationInput::from_json(data)?)?.to_json()
}
