//! Online adapter for step-at-a-time filtering.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. It
//! advances the filter one measurement at a time as data arrives, exposing
//! the running state between steps.
//!
//! ## Design notes
//!
//! * **Owned state**: The processor owns its filter state exclusively; each
//!   call to [`step`](OnlineKalman::step) mutates it in place.
//! * **Sequential contract**: Measurement `k` must be applied after
//!   measurement `k-1`'s effects are incorporated. The processor performs no
//!   buffering or reordering; one instance must not be stepped from more
//!   than one logical thread of control at a time.
//! * **Resettable**: [`reset`](OnlineKalman::reset) restores the exact
//!   construction-time state, so a replayed sequence reproduces the same
//!   outputs.
//!
//! ## Invariants
//!
//! * The steps counter equals the number of successful steps.
//! * A failed step leaves the state and the counter unchanged.
//!
//! ## Non-goals
//!
//! * This adapter does not compute run-level diagnostics (use the batch
//!   adapter).
//! * This adapter does not handle out-of-order measurements.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::recursion::{FilterParameters, ScalarKalman, StepOutput};
use crate::engine::validator::Validator;
use crate::primitives::errors::KalmanError;

// ============================================================================
// Online Kalman Builder
// ============================================================================

/// Builder for the online filter processor.
#[derive(Debug, Clone)]
pub struct OnlineKalmanBuilder<T: Float + Debug> {
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

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<KalmanError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for OnlineKalmanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> OnlineKalmanBuilder<T> {
    /// Create a new online builder with default parameters.
    fn new() -> Self {
        let params = FilterParameters::default();
        Self {
            transition: params.transition,
            observation: params.observation,
            process_noise: params.process_noise,
            measurement_noise: params.measurement_noise,
            initial_estimate: T::zero(),
            initial_covariance: T::one(),
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

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineKalman<T>, KalmanError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let initial = ScalarKalman::new(
            self.initial_estimate,
            self.initial_covariance,
            FilterParameters {
                transition: self.transition,
                observation: self.observation,
                process_noise: self.process_noise,
                measurement_noise: self.measurement_noise,
            },
        )?;

        Ok(OnlineKalman {
            initial,
            filter: initial,
            steps: 0,
        })
    }
}

// ============================================================================
// Online Kalman Processor
// ============================================================================

/// Online filter processor for streaming measurements.
#[derive(Debug, Clone)]
pub struct OnlineKalman<T: Float> {
    initial: ScalarKalman<T>,
    filter: ScalarKalman<T>,
    steps: usize,
}

impl<T: Float> OnlineKalman<T> {
    /// Advance the filter by one measurement.
    ///
    /// Rejects non-finite measurements before they reach the arithmetic
    /// core. On success the steps counter is incremented; on failure the
    /// state and the counter are unchanged.
    pub fn step(&mut self, measurement: T) -> Result<StepOutput<T>, KalmanError> {
        Validator::validate_measurement(measurement, self.steps)?;
        let output = self.filter.step(measurement)?;
        self.steps += 1;
        Ok(output)
    }

    /// Current state estimate `x`.
    #[inline]
    pub fn estimate(&self) -> T {
        self.filter.estimate()
    }

    /// Current error covariance `P`.
    #[inline]
    pub fn covariance(&self) -> T {
        self.filter.covariance()
    }

    /// Number of measurements successfully processed since construction or
    /// the last reset.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The model parameters this processor was built with.
    #[inline]
    pub fn parameters(&self) -> &FilterParameters<T> {
        self.filter.parameters()
    }

    /// Restore the construction-time state and zero the steps counter.
    pub fn reset(&mut self) {
        self.filter = self.initial;
        self.steps = 0;
    }
}
