use crate::{
    error::{Error, Result},
    period::Period,
    prelude::{Days, Real},
};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Regional income indicators used by the economic-loss estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, CopyGetters, Serialize, Deserialize)]
pub struct Region {
    /// Share of the population earning the average daily income, in [0, 1].
    #[getset(get_copy = "pub")]
    #[serde(rename = "avgDailyIncomePopulation")]
    avg_daily_income_population: Real,

    /// Average daily income in USD.
    #[getset(get_copy = "pub")]
    #[serde(rename = "avgDailyIncomeInUSD")]
    avg_daily_income_in_usd: Real,
}

impl Region {
    pub fn new(avg_daily_income_population: Real, avg_daily_income_in_usd: Real) -> Self {
        Region {
            avg_daily_income_population,
            avg_daily_income_in_usd,
        }
    }
}

/// One estimation request: the reported epidemic state of a region and the
/// horizon over which to project it.
///
/// Wire names follow the consuming API and the parsed record is echoed
/// back in the result, so nothing here is ever mutated.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorInput {
    /// Currently confirmed cases.
    #[getset(get_copy = "pub")]
    reported_cases: u64,

    /// Unit of `time_to_elapse`.
    #[getset(get_copy = "pub")]
    period_type: Period,

    /// Requested horizon, in `period_type` units.
    #[getset(get_copy = "pub")]
    time_to_elapse: Days,

    /// Total bed capacity of the region.
    #[getset(get_copy = "pub")]
    total_hospital_beds: u64,

    #[getset(get_copy = "pub")]
    region: Region,
}

impl EstimatorInput {
    pub fn new(
        reported_cases: u64,
        period_type: Period,
        time_to_elapse: Days,
        total_hospital_beds: u64,
        region: Region,
    ) -> Self {
        EstimatorInput {
            reported_cases,
            period_type,
            time_to_elapse,
            total_hospital_beds,
            region,
        }
    }

    /// Normalized horizon in days.
    pub fn days(&self) -> Days {
        self.period_type.days(self.time_to_elapse)
    }

    /// Check every numeric range the pipeline relies on.
    ///
    /// Runs before any arithmetic. The error names the offending field with
    /// its wire spelling. Negative counts cannot occur at all (unsigned
    /// types), so only the horizon and the income figures are checked here.
    pub fn validate(&self) -> Result<()> {
        if self.time_to_elapse == 0 {
            return Err(Error::InvalidNumericInput {
                field: "timeToElapse",
                value: 0.0,
            });
        }
        let share = self.region.avg_daily_income_population();
        if !(0.0..=1.0).contains(&share) {
            return Err(Error::InvalidNumericInput {
                field: "avgDailyIncomePopulation",
                value: share,
            });
        }
        let income = self.region.avg_daily_income_in_usd();
        if !(income >= 0.0) {
            return Err(Error::InvalidNumericInput {
                field: "avgDailyIncomeInUSD",
                value: income,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> EstimatorInput {
        EstimatorInput::new(10, Period::Days, 30, 10_000, Region::new(0.6, 1.5))
    }

    #[test]
    fn reads_wire_format() {
        let raw = r#"{
            "reportedCases": 10,
            "periodType": "days",
            "timeToElapse": 30,
            "totalHospitalBeds": 10000,
            "region": {
                "avgDailyIncomePopulation": 0.6,
                "avgDailyIncomeInUSD": 1.5
            }
        }"#;
        let input: EstimatorInput = serde_json::from_str(raw).unwrap();
        assert_eq!(input, example());
        assert_eq!(input.days(), 30);
    }

    #[test]
    fn roundtrip() {
        let input = example();
        let data = toml::to_string(&input).unwrap();
        let input_: EstimatorInput = toml::from_str(&data).unwrap();
        assert_eq!(input, input_);
    }

    #[test]
    fn accepts_the_full_income_range() {
        let zero = EstimatorInput::new(1, Period::Days, 1, 0, Region::new(0.0, 0.0));
        assert!(zero.validate().is_ok());
        let one = EstimatorInput::new(1, Period::Days, 1, 0, Region::new(1.0, 4.5));
        assert!(one.validate().is_ok());
    }

    #[test]
    fn rejects_zero_horizon() {
        let input = EstimatorInput::new(10, Period::Weeks, 0, 100, Region::new(0.5, 2.0));
        match input.validate() {
            Err(Error::InvalidNumericInput { field, .. }) => {
                assert_eq!(field, "timeToElapse")
            }
            other => panic!("expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_income_share() {
        for share in &[-0.1, 1.5, Real::NAN] {
            let input = EstimatorInput::new(10, Period::Days, 3, 100, Region::new(*share, 2.0));
            match input.validate() {
                Err(Error::InvalidNumericInput { field, .. }) => {
                    assert_eq!(field, "avgDailyIncomePopulation")
                }
                other => panic!("expected InvalidNumericInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_negative_or_nan_income() {
        for income in &[-2.0, Real::NAN] {
            let input = EstimatorInput::new(10, Period::Days, 3, 100, Region::new(0.5, *income));
            match input.validate() {
                Err(Error::InvalidNumericInput { field, .. }) => {
                    assert_eq!(field, "avgDailyIncomeInUSD")
                }
                other => panic!("expected InvalidNumericInput, got {:?}", other),
            }
        }
    }
}
