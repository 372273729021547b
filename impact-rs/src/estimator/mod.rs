//! The estimation pipeline: infection growth, the care demand it creates,
//! and the income it takes out of circulation, computed in two parallel
//! scenarios over a single input record.
//!
//! Everything here is closed-form arithmetic. There is no state carried
//! between calls and no I/O; callers hand in an [`EstimatorInput`] and get
//! back a fully assembled [`Estimate`].
//!
//! [`EstimatorInput`]: crate::input::EstimatorInput
//! [`Estimate`]: crate::estimator::Estimate
mod clinical;
mod economy;
mod growth;
mod pipeline;

pub use clinical::*;
pub use economy::*;
pub use growth::*;
pub use pipeline::*;
