pub mod batch;
pub mod error;
pub mod estimator;
pub mod input;
pub mod period;
pub mod prelude;
pub mod report;
pub mod scenario;
