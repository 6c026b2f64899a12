//! Sequential execution of the filter over a measurement sequence.
//!
//! ## Purpose
//!
//! This module drives the core recursion over an ordered sequence of
//! measurements and assembles the output. It is pure sequential composition
//! of [`ScalarKalman::step`]: element `i` of the result is the state after
//! processing measurements `0..=i`.
//!
//! ## Design notes
//!
//! * **Ordering**: Measurements are applied strictly in slice order; there
//!   is no buffering, reordering, or parallelism within a run.
//! * **First failure wins**: The run stops at the first failing step and
//!   reports the partial results together with the failing index. Nothing
//!   is skipped or continued past a failure.
//! * **Hygiene at the boundary**: Each measurement is checked for
//!   finiteness before it reaches the arithmetic core, so the recursion
//!   itself stays pure.
//!
//! ## Invariants
//!
//! * An empty input yields an empty result, not an error.
//! * A rerun over the same inputs with a fresh filter reproduces the same
//!   outputs bit for bit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::recursion::ScalarKalman;
use crate::engine::output::{KalmanResult, RunFailure};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::FilterDiagnostics;

// ============================================================================
// Kalman Executor
// ============================================================================

/// Drives a filter across a full measurement sequence.
pub struct KalmanExecutor;

impl KalmanExecutor {
    /// Apply `filter` to each measurement in order.
    ///
    /// On success returns the assembled [`KalmanResult`], with diagnostics
    /// when `compute_diagnostics` is set. On the first failing step returns
    /// a [`RunFailure`] carrying the completed prefix, the failing index,
    /// and the error; the filter retains the state it had before that step.
    pub fn run<T: Float>(
        filter: &mut ScalarKalman<T>,
        measurements: &[T],
        compute_diagnostics: bool,
    ) -> Result<KalmanResult<T>, RunFailure<T>> {
        let mut outputs = Vec::with_capacity(measurements.len());

        for (index, &measurement) in measurements.iter().enumerate() {
            if let Err(error) = Validator::validate_measurement(measurement, index) {
                return Err(RunFailure {
                    completed: outputs,
                    index,
                    error,
                });
            }
            match filter.step(measurement) {
                Ok(output) => outputs.push(output),
                Err(error) => {
                    return Err(RunFailure {
                        completed: outputs,
                        index,
                        error,
                    });
                }
            }
        }

        let diagnostics = if compute_diagnostics {
            FilterDiagnostics::from_outputs(&outputs)
        } else {
            None
        };

        Ok(KalmanResult::from_outputs(&outputs, diagnostics))
    }
}
