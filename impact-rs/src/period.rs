use crate::{error::Error, prelude::Days};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Days in a month, as assumed by the period normalization.
pub const DAYS_PER_MONTH: Days = 30;
/// Days in a week.
pub const DAYS_PER_WEEK: Days = 7;

/// Unit of the requested estimation horizon.
///
/// The wire format is a lower-case string; parsing accepts any casing.
/// Anything outside the three known units is rejected with
/// [`Error::InvalidPeriodType`] at the boundary, so no sentinel value can
/// ever reach the arithmetic downstream.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Days,
    Weeks,
    Months,
}

impl Period {
    /// Convert a horizon expressed in this unit to plain days.
    ///
    /// Saturates at `Days::MAX`, so absurd horizons stay finite here and
    /// overflow to infinity only in the projection itself.
    pub fn days(self, time_to_elapse: Days) -> Days {
        match self {
            Period::Days => time_to_elapse,
            Period::Weeks => DAYS_PER_WEEK.saturating_mul(time_to_elapse),
            Period::Months => DAYS_PER_MONTH.saturating_mul(time_to_elapse),
        }
    }

    /// Lower-case wire spelling of the unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Days => "days",
            Period::Weeks => "weeks",
            Period::Months => "months",
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Days
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Error> {
        match raw.to_lowercase().as_str() {
            "days" => Ok(Period::Days),
            "weeks" => Ok(Period::Weeks),
            "months" => Ok(Period::Months),
            _ => Err(Error::InvalidPeriodType(raw.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
