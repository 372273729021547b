use crate::{
    period::Period,
    prelude::{Days, Real},
};

/// Length of one doubling window: infections double every three days.
pub const DOUBLING_PERIOD: Days = 3;

/// Project an infection count forward over the requested horizon.
///
/// The count doubles once per completed [`DOUBLING_PERIOD`]; a partial
/// window at the end of the horizon contributes nothing (truncating
/// division, no interpolation). Powers of two are exact in a `Real`, so
/// the result is an integral value for any horizon that fits one.
pub fn project(infected: u64, period: Period, time_to_elapse: Days) -> Real {
    let windows = period.days(time_to_elapse) / DOUBLING_PERIOD;
    infected as Real * Real::powi(2.0, windows as i32)
}
