//! Scalar Kalman filter predict/update recursion.
//!
//! ## Purpose
//!
//! This module implements the core of the crate: a discrete-time scalar
//! Kalman filter that maintains a running state estimate and its error
//! covariance, advancing both once per measurement.
//!
//! ## Design notes
//!
//! * **Model**: Linear Gaussian, 1-D state and 1-D measurement. The state
//!   evolves as `x_k = A * x_{k-1} + w` with `w ~ N(0, Q)`, observed as
//!   `z_k = H * x_k + v` with `v ~ N(0, R)`.
//! * **Purity**: A step is a deterministic function of the current state,
//!   the parameters, and the measurement. No randomness, no I/O, no
//!   allocation.
//! * **Atomicity**: State is written only after the whole step has been
//!   computed, so a failing step leaves the filter unchanged.
//!
//! ## Invariants
//!
//! * `covariance >= 0` after every successful step.
//! * `measurement_noise > 0` for the lifetime of an instance (enforced at
//!   construction).
//! * Steps on one instance are strictly sequential; there is no internal
//!   buffering or reordering.
//!
//! ## Non-goals
//!
//! * This module does not handle vector-valued states or measurements.
//! * This module does not implement nonlinear (extended/unscented) variants.
//! * This module does not smooth (no backward pass).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KalmanError;

// ============================================================================
// Filter Parameters
// ============================================================================

/// Parameters of the linear Gaussian model, immutable for the lifetime of a
/// filter instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParameters<T: Float> {
    /// State transition coefficient `A`: `x_pred = A * x_prev`.
    pub transition: T,

    /// Observation coefficient `H`: `z_pred = H * x`.
    pub observation: T,

    /// Process noise variance `Q` (>= 0), uncertainty injected per step.
    pub process_noise: T,

    /// Measurement noise variance `R` (> 0).
    pub measurement_noise: T,
}

impl<T: Float> Default for FilterParameters<T> {
    /// The random-walk observation model: `A = H = 1`, `Q = 0`, `R = 1`.
    fn default() -> Self {
        Self {
            transition: T::one(),
            observation: T::one(),
            process_noise: T::zero(),
            measurement_noise: T::one(),
        }
    }
}

impl<T: Float> FilterParameters<T> {
    /// Check the parameter constraints, failing fast on the first violation.
    pub fn validate(&self) -> Result<(), KalmanError> {
        if !self.transition.is_finite() {
            return Err(invalid("transition", self.transition, "must be finite"));
        }
        if !self.observation.is_finite() {
            return Err(invalid("observation", self.observation, "must be finite"));
        }
        if !self.process_noise.is_finite() || self.process_noise < T::zero() {
            return Err(invalid(
                "process_noise",
                self.process_noise,
                "must be >= 0 and finite",
            ));
        }
        if !self.measurement_noise.is_finite() || self.measurement_noise <= T::zero() {
            return Err(invalid(
                "measurement_noise",
                self.measurement_noise,
                "must be > 0 and finite",
            ));
        }
        Ok(())
    }
}

fn invalid<T: Float>(parameter: &'static str, value: T, constraint: &'static str) -> KalmanError {
    KalmanError::InvalidParameter {
        parameter,
        value: value.to_f64().unwrap_or(f64::NAN),
        constraint,
    }
}

// ============================================================================
// Step Output
// ============================================================================

/// Result of a single filter step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput<T> {
    /// Updated state estimate `x`.
    pub estimate: T,

    /// Updated error covariance `P` (>= 0).
    pub covariance: T,

    /// Kalman gain `K` used for this step.
    pub gain: T,

    /// Innovation `z - H * x_pred`, the measurement surprise.
    pub innovation: T,

    /// Innovation variance `S = H * P_pred * H + R` (> 0).
    pub innovation_variance: T,
}

// ============================================================================
// Scalar Kalman Filter
// ============================================================================

/// A discrete-time scalar Kalman filter.
///
/// Holds the model parameters and the running `(estimate, covariance)` pair,
/// advancing both once per call to [`step`](ScalarKalman::step).
///
/// # Example
///
/// The canonical single-step computation, from `x = 0`, `P = 1`:
///
/// ```
/// use kalman_rs::prelude::*;
///
/// let params: FilterParameters<f64> = FilterParameters {
///     transition: 1.0,
///     observation: 1.0,
///     process_noise: 1e-3,
///     measurement_noise: 0.7e-2,
/// };
/// let mut filter = ScalarKalman::new(0.0, 1.0, params)?;
///
/// let output = filter.step(1.0)?;
/// // P_pred = 1.001, S = 1.008, K = 1.001 / 1.008
/// assert!((output.gain - 1.001 / 1.008).abs() < 1e-15);
/// assert!((output.estimate - 1.001 / 1.008).abs() < 1e-15);
/// # Result::<(), KalmanError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarKalman<T: Float> {
    params: FilterParameters<T>,
    estimate: T,
    covariance: T,
}

impl<T: Float> ScalarKalman<T> {
    /// Create a filter with the given initial state and parameters.
    ///
    /// Fails with [`KalmanError::InvalidParameter`] when a parameter violates
    /// its constraint (`measurement_noise <= 0`, `process_noise < 0`,
    /// `initial_covariance < 0`, or any value non-finite). Has no side
    /// effects beyond storing the given state.
    pub fn new(
        initial_estimate: T,
        initial_covariance: T,
        params: FilterParameters<T>,
    ) -> Result<Self, KalmanError> {
        params.validate()?;
        if !initial_estimate.is_finite() {
            return Err(invalid("initial_estimate", initial_estimate, "must be finite"));
        }
        if !initial_covariance.is_finite() || initial_covariance < T::zero() {
            return Err(invalid(
                "initial_covariance",
                initial_covariance,
                "must be >= 0 and finite",
            ));
        }

        Ok(Self {
            params,
            estimate: initial_estimate,
            covariance: initial_covariance,
        })
    }

    /// Current state estimate `x`.
    #[inline]
    pub fn estimate(&self) -> T {
        self.estimate
    }

    /// Current error covariance `P`.
    #[inline]
    pub fn covariance(&self) -> T {
        self.covariance
    }

    /// The model parameters this filter was constructed with.
    #[inline]
    pub fn parameters(&self) -> &FilterParameters<T> {
        &self.params
    }

    /// Advance the filter by one measurement.
    ///
    /// Executes the predict/update recursion in a single O(1) pass:
    ///
    /// ```text
    /// x_pred = A * x_prev
    /// P_pred = A * P_prev * A + Q
    /// S      = H * P_pred * H + R
    /// K      = P_pred * H / S
    /// x_new  = x_pred + K * (z - H * x_pred)
    /// P_new  = (1 - K * H) * P_pred
    /// ```
    ///
    /// Fails with [`KalmanError::DegenerateCovariance`] if `S <= 0`, which
    /// the construction invariants rule out unless state or parameters were
    /// corrupted externally. The state is not modified on failure.
    pub fn step(&mut self, measurement: T) -> Result<StepOutput<T>, KalmanError> {
        let a = self.params.transition;
        let h = self.params.observation;

        // Prediction
        let predicted_estimate = a * self.estimate;
        let predicted_covariance = a * self.covariance * a + self.params.process_noise;

        let innovation_variance =
            h * predicted_covariance * h + self.params.measurement_noise;
        if innovation_variance <= T::zero() {
            return Err(KalmanError::DegenerateCovariance {
                innovation_variance: innovation_variance.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Correction
        let gain = predicted_covariance * h / innovation_variance;
        let innovation = measurement - h * predicted_estimate;

        self.estimate = predicted_estimate + gain * innovation;
        self.covariance = (T::one() - gain * h) * predicted_covariance;

        Ok(StepOutput {
            estimate: self.estimate,
            covariance: self.covariance,
            gain,
            innovation,
            innovation_variance,
        })
    }
}
