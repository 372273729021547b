pub use crate::batch::estimate_many;
pub use crate::error::{Error, Result};
pub use crate::estimator::*;
pub use crate::input::{EstimatorInput, Region};
pub use crate::period::Period;
pub use crate::report::{ImpactTable, CSV_HEADER};
pub use crate::scenario::Scenario;

/// Basic representation of time. Horizons are always normalized to days
/// before any arithmetic happens.
pub type Days = u32;

/// Base Real type used by this crate. Uses an alias to easily change
/// precision if necessary.
pub type Real = f64;
