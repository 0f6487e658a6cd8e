//! Input records of the estimator.
//!
//! Field names follow the camelCase wire format used by callers, so an
//! [`EstimationInput`] decoded from a document serializes back to the same
//! document.
use crate::{
    error::{EstimatorError, Result},
    params::{DAYS_PER_MONTH, DAYS_PER_WEEK},
    prelude::Real,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A numeric input field that may be given either as an integer or as a real
/// number. Keeping the original representation makes the echoed input
/// identical to what the caller sent.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Integer(i64),
    Real(Real),
}

impl Quantity {
    pub fn value(self) -> Real {
        match self {
            Quantity::Integer(n) => n as Real,
            Quantity::Real(x) => x,
        }
    }
}

/// Unit in which `timeToElapse` is measured.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Days,
    Weeks,
    Months,
}

impl PeriodType {
    /// Number of days in a single unit of this period type.
    pub fn days_per_unit(self) -> Real {
        match self {
            PeriodType::Days => 1.0,
            PeriodType::Weeks => DAYS_PER_WEEK,
            PeriodType::Months => DAYS_PER_MONTH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodType::Days => "days",
            PeriodType::Weeks => "weeks",
            PeriodType::Months => "months",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "days" => Ok(PeriodType::Days),
            "weeks" => Ok(PeriodType::Weeks),
            "months" => Ok(PeriodType::Months),
            _ => Err(EstimatorError::invalid_input(format!(
                "unknown periodType {:?}, expected one of \"days\", \"weeks\", \"months\"",
                s
            ))),
        }
    }
}

/// Socio-economic description of the region under analysis.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,

    /// Average age of the population. Informative only, no estimate uses it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_age: Option<Quantity>,

    /// Average income of a working person, in USD per day.
    #[serde(rename = "avgDailyIncomeInUSD")]
    pub avg_daily_income_in_usd: Quantity,

    /// Fraction of the population that earns a daily income.
    pub avg_daily_income_population: Quantity,
}

/// Regional and epidemic data given to the estimator.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationInput {
    pub region: Region,
    pub period_type: PeriodType,
    pub time_to_elapse: Quantity,
    pub reported_cases: u64,
    pub population: u64,
    pub total_hospital_beds: u64,
}

impl EstimationInput {
    /// Decode input from a JSON document.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Decode input from a TOML document.
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Length of the projection period in days.
    ///
    /// Days are taken as given, while weeks and months are converted and
    /// truncated to whole days. Periods that are not positive are rejected
    /// since the daily economic loss divides by them.
    pub fn period_days(&self) -> Result<Real> {
        let time = self.time_to_elapse.value();
        let days = match self.period_type {
            PeriodType::Days => time,
            _ => (time * self.period_type.days_per_unit()).trunc(),
        };
        if !(days > 0.0) {
            return Err(EstimatorError::invalid_input(format!(
                "timeToElapse must be a positive period, got {} {}",
                time, self.period_type
            )));
        }
        Ok(days)
    }

    /// Size of the population that earns a daily income.
    pub fn earning_population(&self) -> i64 {
        (self.population as Real * self.region.avg_daily_income_population.value()).trunc() as i64
    }

    /// Average daily income in USD.
    pub fn daily_income(&self) -> Real {
        self.region.avg_daily_income_in_usd.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn input(period_type: PeriodType, time_to_elapse: Quantity) -> EstimationInput {
        EstimationInput {
            region: Region {
                name: "Africa".into(),
                avg_age: None,
                avg_daily_income_in_usd: Quantity::Real(1.5),
                avg_daily_income_population: Quantity::Real(0.6),
            },
            period_type,
            time_to_elapse,
            reported_cases: 10,
            population: 1000,
            total_hospital_beds: 5000,
        }
    }

    #[test]
    fn converts_periods_to_days() {
        assert_eq!(input(PeriodType::Days, Quantity::Integer(30)).period_days(), Ok(30.0));
        assert_eq!(input(PeriodType::Weeks, Quantity::Integer(2)).period_days(), Ok(14.0));
        assert_eq!(input(PeriodType::Months, Quantity::Integer(3)).period_days(), Ok(90.0));
    }

    #[test]
    fn truncates_fractional_weeks_and_months() {
        assert_eq!(input(PeriodType::Weeks, Quantity::Real(1.5)).period_days(), Ok(10.0));
        assert_eq!(input(PeriodType::Months, Quantity::Real(0.5)).period_days(), Ok(15.0));
    }

    #[test]
    fn fractional_days_pass_through() {
        assert_eq!(input(PeriodType::Days, Quantity::Real(4.5)).period_days(), Ok(4.5));
        assert_eq!(input(PeriodType::Days, Quantity::Real(0.5)).period_days(), Ok(0.5));
    }

    #[test]
    fn rejects_non_positive_periods() {
        for time in &[Quantity::Integer(0), Quantity::Integer(-2), Quantity::Real(-0.5)] {
            let err = input(PeriodType::Days, *time).period_days().unwrap_err();
            assert!(err.reason().contains("timeToElapse must be a positive period"));
        }
        assert!(input(PeriodType::Days, Quantity::Real(Real::NAN)).period_days().is_err());

        // Less than a day once truncated
        assert!(input(PeriodType::Weeks, Quantity::Real(0.1)).period_days().is_err());
    }

    #[test]
    fn earning_population_is_truncated() {
        let mut data = input(PeriodType::Days, Quantity::Integer(30));
        assert_eq!(data.earning_population(), 600);

        data.population = 999;
        assert_eq!(data.earning_population(), 599);
        assert_approx_eq!(data.daily_income(), 1.5);
    }

    #[test]
    fn parses_period_type() {
        assert_eq!("weeks".parse::<PeriodType>(), Ok(PeriodType::Weeks));
        assert_eq!(PeriodType::Months.to_string(), "months");

        let err = "years".parse::<PeriodType>().unwrap_err();
        assert!(err.reason().contains("years"));
    }

    #[test]
    fn decodes_camel_case_json() {
        let data = r#"{
            "region": {
                "name": "Africa",
                "avgAge": 19.7,
                "avgDailyIncomeInUSD": 5,
                "avgDailyIncomePopulation": 0.71
            },
            "periodType": "days",
            "timeToElapse": 58,
            "reportedCases": 674,
            "population": 66622705,
            "totalHospitalBeds": 1380614
        }"#;
        let input = EstimationInput::from_json(data).unwrap();
        assert_eq!(input.region.avg_age, Some(Quantity::Real(19.7)));
        assert_eq!(input.region.avg_daily_income_in_usd, Quantity::Integer(5));
        assert_eq!(input.time_to_elapse, Quantity::Integer(58));
        assert_eq!(input.period_type, PeriodType::Days);
        assert_eq!(input.total_hospital_beds, 1380614);

        // Integers are echoed as integers
        let echo: serde_json::Value = serde_json::to_value(&input).unwrap();
        assert_eq!(echo["timeToElapse"], serde_json::json!(58));
        assert_eq!(echo["region"]["avgDailyIncomeInUSD"], serde_json::json!(5));
    }

    #[test]
    fn decodes_toml() {
        let data = r#"
            periodType = "weeks"
            timeToElapse = 2
            reportedCases = 10
            population = 1000
            totalHospitalBeds = 5000

            [region]
            name = "Africa"
            avgDailyIncomeInUSD = 1.5
            avgDailyIncomePopulation = 0.6
        "#;
        let input = EstimationInput::from_toml(data).unwrap();
        assert_eq!(input.period_days(), Ok(14.0));
        assert_eq!(input.region.avg_age, None);
    }

    #[test]
    fn missing_fields_are_invalid_input() {
        let err = EstimationInput::from_json(r#"{"periodType": "days"}"#).unwrap_err();
        assert!(err.reason().contains("missing field"));
    }

    #[test]
    fn unknown_period_type_is_invalid_input() {
        let data = r#"{
            "region": {"name": "X", "avgDailyIncomeInUSD": 1, "avgDailyIncomePopulation": 0.5},
            "periodType": "years",
            "timeToElapse": 1,
            "reportedCases": 1,
            "population": 1,
            "totalHospitalBeds": 1
        }"#;
        let err = EstimationInput::from_json(data).unwrap_err();
        assert!(err.reason().contains("unknown variant"));
    }
}
