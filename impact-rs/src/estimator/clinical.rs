use crate::prelude::Real;
use getset::CopyGetters;
use std::convert::TryFrom;

// Severity fractions applied to projected infections.
pub const SEVERE_CASE_RATE: Real = 0.15;
pub const ICU_RATE: Real = 0.05;
pub const VENTILATOR_RATE: Real = 0.02;
/// Fraction of total beds realistically free for new patients; the rest is
/// assumed committed to existing occupants.
pub const BED_AVAILABILITY: Real = 0.35;

/// Care demand derived from a projected infection count.
///
/// Severe cases and beds truncate to whole patients and beds; ICU and
/// ventilator demand stay fractional. `available_beds` is signed and a
/// negative value means a shortfall of that many beds.
#[derive(Debug, Clone, Copy, PartialEq, Default, CopyGetters)]
pub struct CareDemand {
    #[getset(get_copy = "pub")]
    severe_cases: u64,

    #[getset(get_copy = "pub")]
    icu_cases: Real,

    #[getset(get_copy = "pub")]
    ventilator_cases: Real,

    #[getset(get_copy = "pub")]
    available_beds: i64,
}

impl CareDemand {
    /// Derive the demand that `projected_infections` places on a region
    /// with the given total bed capacity.
    pub fn for_infections(projected_infections: Real, total_hospital_beds: u64) -> Self {
        let severe_cases = (SEVERE_CASE_RATE * projected_infections).floor() as u64;
        let free_beds = (BED_AVAILABILITY * total_hospital_beds as Real).floor() as i64;
        // An `as` cast would wrap here; clamp so huge projections keep the
        // balance negative.
        let severe = i64::try_from(severe_cases).unwrap_or(i64::MAX);
        CareDemand {
            severe_cases,
            icu_cases: ICU_RATE * projected_infections,
            ventilator_cases: VENTILATOR_RATE * projected_infections,
            available_beds: free_beds.saturating_sub(severe),
        }
    }
}
