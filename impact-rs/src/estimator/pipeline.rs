use crate::{
    error::Result,
    estimator::{economy, growth, CareDemand},
    input::EstimatorInput,
    prelude::Real,
    scenario::Scenario,
};
use getset::{CopyGetters, Getters};
use log::*;
use serde::{Deserialize, Serialize};

/// Projected impact of the epidemic under one scenario.
///
/// Field names are the wire contract of the consuming API and must not
/// drift. The integer/real split is part of that contract too: severe
/// cases, beds and the current count are whole numbers, everything else
/// stays fractional.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    #[getset(get_copy = "pub")]
    currently_infected: u64,

    #[getset(get_copy = "pub")]
    infections_by_requested_time: Real,

    #[getset(get_copy = "pub")]
    severe_cases_by_requested_time: u64,

    /// Signed balance: negative means a shortfall of that many beds.
    #[getset(get_copy = "pub")]
    hospital_beds_by_requested_time: i64,

    #[getset(get_copy = "pub")]
    #[serde(rename = "casesForICUByRequestedTime")]
    cases_for_icu_by_requested_time: Real,

    #[getset(get_copy = "pub")]
    cases_for_ventilators_by_requested_time: Real,

    #[getset(get_copy = "pub")]
    dollars_in_flight: Real,
}

impl Impact {
    /// Run the projection for `input` under one scenario.
    ///
    /// Scale reported cases by the scenario multiplier, grow them over the
    /// horizon, then derive care demand and economic loss from the
    /// projected count. Assumes a validated input; [`estimate`] is the
    /// checked entry point.
    pub fn for_scenario(input: &EstimatorInput, scenario: Scenario) -> Self {
        let currently_infected = input.reported_cases().saturating_mul(scenario.multiplier());
        let projected = growth::project(
            currently_infected,
            input.period_type(),
            input.time_to_elapse(),
        );
        let care = CareDemand::for_infections(projected, input.total_hospital_beds());
        let days = input.days();
        let dollars = economy::dollars_in_flight(input.region(), days, projected);

        debug!(
            "{}: {} infected now, {} projected after {} days",
            scenario.label(),
            currently_infected,
            projected,
            days
        );

        Impact {
            currently_infected,
            infections_by_requested_time: projected,
            severe_cases_by_requested_time: care.severe_cases(),
            hospital_beds_by_requested_time: care.available_beds(),
            cases_for_icu_by_requested_time: care.icu_cases(),
            cases_for_ventilators_by_requested_time: care.ventilator_cases(),
            dollars_in_flight: dollars,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
// Combined result record
///////////////////////////////////////////////////////////////////////////////

/// The full estimation result: the echoed input plus one [`Impact`] per
/// scenario.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// The parsed input record, echoed back.
    #[getset(get = "pub")]
    data: EstimatorInput,

    #[getset(get = "pub")]
    impact: Impact,

    #[getset(get = "pub")]
    severe_impact: Impact,
}

impl Estimate {
    /// Impact record for the given scenario.
    pub fn impact_for(&self, scenario: Scenario) -> &Impact {
        scenario.select(&self.impact, &self.severe_impact)
    }
}

/// Validate `input`, then compute both scenario projections.
///
/// Fails fast: nothing is projected unless every range check on the input
/// passes, so an error never comes with partial results attached.
pub fn estimate(input: &EstimatorInput) -> Result<Estimate> {
    input.validate()?;
    Ok(Estimate {
        data: *input,
        impact: Impact::for_scenario(input, Scenario::Normal),
        severe_impact: Impact::for_scenario(input, Scenario::Severe),
    })
}
