//! Batch adapter for filtering complete measurement sequences.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes a complete,
//! ordered measurement sequence and produces the full sequence of state
//! estimates in a single call.
//!
//! ## Design notes
//!
//! * **Stateless between runs**: Each [`run`](BatchKalman::run) starts from
//!   a fresh copy of the configured initial state, so repeated runs over the
//!   same input reproduce the same output bit for bit.
//! * **Delegation**: Sequencing and failure reporting are handled by the
//!   execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * All measurements must be finite; the first non-finite one aborts the
//!   run with its index.
//! * Output order matches input order, one result per measurement.
//!
//! ## Non-goals
//!
//! * This adapter does not process measurements incrementally (use the
//!   online adapter).
//! * This adapter does not resample, reorder, or gap-fill input sequences.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::recursion::{FilterParameters, ScalarKalman};
use crate::engine::executor::KalmanExecutor;
use crate::engine::output::{KalmanResult, RunFailure};
use crate::engine::validator::Validator;
use crate::primitives::errors::KalmanError;

// ============================================================================
// Batch Kalman Builder
// ============================================================================

/// Builder for the batch filter processor.
#[derive(Debug, Clone)]
pub struct BatchKalmanBuilder<T: Float + Debug> {
    /// State transition coefficient `A`.
    pub transition: T,

    /// Observation coefficient `H`.
    pub observation: T,

    /// Process noise variance `Q`.
    pub process_noise: T,

    /// Measurement noise variance `R`.
    pub measurement_noise: T,

    /// Initial state estimate.
    pub initial_estimate: T,

    /// Initial error covariance.
    pub initial_covariance: T,

    /// Whether to compute innovation diagnostics per run.
    pub return_diagnostics: bool,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<KalmanError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for BatchKalmanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> BatchKalmanBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        let params = FilterParameters::default();
        Self {
            transition: params.transition,
            observation: params.observation,
            process_noise: params.process_noise,
            measurement_noise: params.measurement_noise,
            initial_estimate: T::zero(),
            initial_covariance: T::one(),
            return_diagnostics: false,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the state transition coefficient `A`.
    pub fn transition(mut self, transition: T) -> Self {
        self.transition = transition;
        self
    }

    /// Set the observation coefficient `H`.
    pub fn observation(mut self, observation: T) -> Self {
        self.observation = observation;
        self
    }

    /// Set the process noise variance `Q`.
    pub fn process_noise(mut self, process_noise: T) -> Self {
        self.process_noise = process_noise;
        self
    }

    /// Set the measurement noise variance `R`.
    pub fn measurement_noise(mut self, measurement_noise: T) -> Self {
        self.measurement_noise = measurement_noise;
        self
    }

    /// Set the initial state estimate.
    pub fn initial_estimate(mut self, estimate: T) -> Self {
        self.initial_estimate = estimate;
        self
    }

    /// Set the initial error covariance.
    pub fn initial_covariance(mut self, covariance: T) -> Self {
        self.initial_covariance = covariance;
        self
    }

    /// Enable innovation diagnostics on each run.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    ///
    /// Validates builder usage and the filter parameters; the parameter
    /// constraints are enforced by the core constructor.
    pub fn build(self) -> Result<BatchKalman<T>, KalmanError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let prototype = ScalarKalman::new(
            self.initial_estimate,
            self.initial_covariance,
            FilterParameters {
                transition: self.transition,
                observation: self.observation,
                process_noise: self.process_noise,
                measurement_noise: self.measurement_noise,
            },
        )?;

        Ok(BatchKalman {
            prototype,
            return_diagnostics: self.return_diagnostics,
        })
    }
}

// ============================================================================
// Batch Kalman Processor
// ============================================================================

/// Batch filter processor.
///
/// Applies the configured filter to complete measurement sequences. Each
/// call to [`run`](BatchKalman::run) is independent and restartable.
#[derive(Debug, Clone)]
pub struct BatchKalman<T: Float> {
    prototype: ScalarKalman<T>,
    return_diagnostics: bool,
}

impl<T: Float> BatchKalman<T> {
    /// Filter an ordered sequence of measurements.
    ///
    /// Element `i` of the result is the state after processing
    /// `measurements[0..=i]`. An empty input yields an empty result. On the
    /// first failing step the returned [`RunFailure`] reports the partial
    /// results, the failing index, and the error.
    pub fn run(&self, measurements: &[T]) -> Result<KalmanResult<T>, RunFailure<T>> {
        let mut filter = self.prototype;
        KalmanExecutor::run(&mut filter, measurements, self.return_diagnostics)
    }

    /// The model parameters this processor was built with.
    #[inline]
    pub fn parameters(&self) -> &FilterParameters<T> {
        self.prototype.parameters()
    }
}
