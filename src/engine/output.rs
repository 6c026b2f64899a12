//! Result assembly and failure reporting for filter runs.
//!
//! ## Purpose
//!
//! This module defines the two shapes a batch run can produce: a
//! [`KalmanResult`] holding the full ordered sequence of estimates, and a
//! [`RunFailure`] reporting the partial sequence completed before the first
//! failing step, the failing index, and the error.
//!
//! ## Design notes
//!
//! * **Column layout**: Results are stored as parallel vectors (one per
//!   quantity) rather than a vector of structs, matching how callers plot
//!   and post-process them.
//! * **No silent continuation**: A failed step never yields a hole in the
//!   output; everything after the failing index is simply absent.
//!
//! ## Invariants
//!
//! * All column vectors in a [`KalmanResult`] have the same length.
//! * `RunFailure::index == RunFailure::completed.len()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::recursion::StepOutput;
use crate::evaluation::diagnostics::FilterDiagnostics;
use crate::primitives::errors::KalmanError;

// ============================================================================
// Kalman Result
// ============================================================================

/// The ordered output of a completed filter run.
///
/// Element `i` of every column is the result of processing measurements
/// `0..=i`.
#[derive(Debug, Clone, PartialEq)]
pub struct KalmanResult<T> {
    /// State estimates, one per measurement.
    pub estimates: Vec<T>,

    /// Error covariances, one per measurement.
    pub covariances: Vec<T>,

    /// Kalman gains, one per measurement.
    pub gains: Vec<T>,

    /// Innovations (measurement minus predicted measurement), one per
    /// measurement.
    pub innovations: Vec<T>,

    /// Innovation diagnostics, present when requested at build time.
    pub diagnostics: Option<FilterDiagnostics<T>>,
}

impl<T: Float> KalmanResult<T> {
    /// Assemble a result from the per-step outputs of a run.
    pub fn from_outputs(
        outputs: &[StepOutput<T>],
        diagnostics: Option<FilterDiagnostics<T>>,
    ) -> Self {
        let mut estimates = Vec::with_capacity(outputs.len());
        let mut covariances = Vec::with_capacity(outputs.len());
        let mut gains = Vec::with_capacity(outputs.len());
        let mut innovations = Vec::with_capacity(outputs.len());
        for output in outputs {
            estimates.push(output.estimate);
            covariances.push(output.covariance);
            gains.push(output.gain);
            innovations.push(output.innovation);
        }

        Self {
            estimates,
            covariances,
            gains,
            innovations,
            diagnostics,
        }
    }

    /// Number of processed measurements.
    #[inline]
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Whether the run processed no measurements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

impl<T: Float + fmt::Display> fmt::Display for KalmanResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Measurements: {}", self.len())?;
        if let (Some(estimate), Some(covariance)) =
            (self.estimates.last(), self.covariances.last())
        {
            writeln!(f, "  Final estimate: {:.5}", estimate)?;
            writeln!(f, "  Final covariance: {:.5}", covariance)?;
        }

        if let Some(diagnostics) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "Filter Diagnostics:")?;
            writeln!(f, "  Innovation mean: {:.6}", diagnostics.innovation_mean)?;
            writeln!(f, "  Innovation RMSE: {:.6}", diagnostics.innovation_rmse)?;
            writeln!(f, "  Mean NIS:        {:.3}", diagnostics.mean_nis)?;
        }

        writeln!(f)?;
        writeln!(f, "Filtered Data:")?;
        writeln!(f, "  {:>6} {:>12} {:>12}", "Step", "Estimate", "Covariance")?;
        writeln!(f, "  {:-<32}", "")?;
        for (i, (estimate, covariance)) in self
            .estimates
            .iter()
            .zip(self.covariances.iter())
            .enumerate()
        {
            writeln!(f, "  {:>6} {:>12.5} {:>12.5}", i, estimate, covariance)?;
        }
        Ok(())
    }
}

// ============================================================================
// Run Failure
// ============================================================================

/// Report of a run that stopped at its first failing step.
///
/// Carries everything the caller needs to decide whether to halt or
/// reinitialize: the results that were produced before the failure, the
/// index of the measurement that failed, and the error itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RunFailure<T> {
    /// Outputs of the steps that succeeded, in order.
    pub completed: Vec<StepOutput<T>>,

    /// Index of the measurement whose step failed.
    pub index: usize,

    /// The error the failing step produced.
    pub error: KalmanError,
}

impl<T> fmt::Display for RunFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Run stopped at measurement {} after {} successful steps: {}",
            self.index,
            self.completed.len(),
            self.error
        )
    }
}

impl<T> From<RunFailure<T>> for KalmanError {
    /// Discard the partial results and keep the underlying error, enabling
    /// `?` in callers that only care about the error kind.
    fn from(failure: RunFailure<T>) -> Self {
        failure.error
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for RunFailure<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
