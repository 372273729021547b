use crate::{
    input::Region,
    prelude::{Days, Real},
};

/// Aggregate daily income lost across the projected-infected population
/// over the whole horizon.
///
/// Every projected infection inside the income-earning share of the
/// population is assumed to lose the full average daily income on each of
/// the `days` elapsed. `days` must already be normalized; raw horizon
/// counts in weeks or months would understate the loss.
pub fn dollars_in_flight(region: Region, days: Days, projected_infections: Real) -> Real {
    projected_infections
        * region.avg_daily_income_population()
        * region.avg_daily_income_in_usd()
        * days as Real
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn loss_scales_with_every_factor() {
        let region = Region::new(0.6, 1.5);
        assert_approx_eq!(dollars_in_flight(region, 30, 102_400.0), 2_764_800.0);
        assert_approx_eq!(dollars_in_flight(region, 60, 102_400.0), 5_529_600.0);
        assert_approx_eq!(dollars_in_flight(region, 30, 51_200.0), 1_382_400.0);
    }

    #[test]
    fn idle_population_costs_nothing() {
        assert_eq!(dollars_in_flight(Region::new(0.0, 5.0), 30, 1_000.0), 0.0);
        assert_eq!(dollars_in_flight(Region::new(0.5, 0.0), 30, 1_000.0), 0.0);
    }
}
