use crate::prelude::Real;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while estimating.
///
/// All failures are detected at the boundary, before any projection is
/// computed, so an `Err` never carries partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The period string is not one of days/weeks/months (any casing).
    #[error("invalid period type: {0:?}")]
    InvalidPeriodType(String),

    /// A numeric field is outside its documented range. Carries the wire
    /// name of the offending field.
    #[error("invalid numeric input for {field}: {value}")]
    InvalidNumericInput { field: &'static str, value: Real },
}
