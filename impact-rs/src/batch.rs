//! Batch estimation over many input records.

use crate::{
    error::Result,
    estimator::{estimate, Estimate},
    input::EstimatorInput,
};
use rayon::prelude::*;

/// Estimate every record in `inputs`, in parallel.
///
/// Output order matches input order, and each record carries its own
/// [`Result`]: a bad row is reported in place without sinking the rest of
/// the batch.
pub fn estimate_many(inputs: &[EstimatorInput]) -> Vec<Result<Estimate>> {
    inputs.par_iter().map(estimate).collect()
}
