//! Innovation-based diagnostics for a completed filter run.
//!
//! ## Purpose
//!
//! This module summarizes how well the filter's model matched the data it
//! was fed, using the per-step innovations. A well-tuned filter produces
//! innovations that are zero-mean and, once normalized by their predicted
//! variance, have unit second moment.
//!
//! ## Key concepts
//!
//! * **Innovation mean**: Systematic bias in the predictions; should hover
//!   near zero.
//! * **Innovation RMSE**: Typical magnitude of the measurement surprise.
//! * **Mean NIS**: Average of `innovation^2 / S` (normalized innovation
//!   squared). Values far above 1 suggest the noise variances are set too
//!   small; far below 1, too large.
//!
//! ## Non-goals
//!
//! * This module does not tune or adapt the filter parameters.
//! * This module does not perform hypothesis tests on the innovations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::recursion::StepOutput;

// ============================================================================
// Filter Diagnostics
// ============================================================================

/// Summary statistics over the innovations of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDiagnostics<T> {
    /// Mean of the innovations.
    pub innovation_mean: T,

    /// Root mean square of the innovations.
    pub innovation_rmse: T,

    /// Mean normalized innovation squared, `mean(innovation^2 / S)`.
    pub mean_nis: T,
}

impl<T: Float> FilterDiagnostics<T> {
    /// Compute diagnostics from a sequence of step outputs.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_outputs(outputs: &[StepOutput<T>]) -> Option<Self> {
        if outputs.is_empty() {
            return None;
        }
        let n = T::from(outputs.len()).unwrap_or(T::one());

        let mut sum = T::zero();
        let mut sum_sq = T::zero();
        let mut sum_nis = T::zero();
        for output in outputs {
            sum = sum + output.innovation;
            sum_sq = sum_sq + output.innovation * output.innovation;
            sum_nis = sum_nis + output.innovation * output.innovation / output.innovation_variance;
        }

        Some(Self {
            innovation_mean: sum / n,
            innovation_rmse: (sum_sq / n).sqrt(),
            mean_nis: sum_nis / n,
        })
    }
}
