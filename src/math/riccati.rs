//! Steady-state solutions of the scalar discrete algebraic Riccati recursion.
//!
//! ## Purpose
//!
//! This module computes the fixed point that the filter's error covariance
//! converges to under constant parameters, and the limiting Kalman gain that
//! follows from it. Both are closed-form in the scalar case.
//!
//! ## Design notes
//!
//! * **Formula**: The predicted covariance fixed point solves the quadratic
//!   `H^2 * Pp^2 + (R - A^2 * R - Q * H^2) * Pp - Q * R = 0`; the posterior
//!   fixed point is `Pp * R / (H^2 * Pp + R)`.
//! * **Stability**: The positive root is taken in a cancellation-free form
//!   depending on the sign of the linear coefficient.
//! * **Degenerate geometry**: With `H = 0` the measurement carries no
//!   information and the recursion reduces to `P <- A^2 * P + Q`, which has
//!   a fixed point only for `|A| < 1`.
//!
//! ## Invariants
//!
//! * Returned covariances are >= 0 for any valid parameter set.
//!
//! ## Non-goals
//!
//! * This module does not solve matrix-valued Riccati equations.
//! * This module does not iterate the recursion; see the filter core for that.

// External dependencies
use num_traits::Float;

// ============================================================================
// Steady-State Covariance
// ============================================================================

/// Compute the steady-state posterior error covariance of the scalar
/// predict/update recursion, if one exists.
///
/// Arguments are the filter parameters: state transition `A`, observation
/// coefficient `H`, process noise variance `Q` (>= 0), and measurement noise
/// variance `R` (> 0). Returns `None` when the covariance recursion has no
/// finite non-negative fixed point (`H = 0` with `|A| >= 1`).
pub fn steady_state_covariance<T: Float>(
    transition: T,
    observation: T,
    process_noise: T,
    measurement_noise: T,
) -> Option<T> {
    let a2 = transition * transition;
    let h2 = observation * observation;
    let q = process_noise;
    let r = measurement_noise;

    if h2 == T::zero() {
        // No measurement information: P <- A^2 * P + Q.
        if a2 < T::one() {
            return Some(q / (T::one() - a2));
        }
        return None;
    }

    // Quadratic in the predicted covariance Pp:
    //   h2 * Pp^2 + b * Pp - q * r = 0,  b = r - a2 * r - q * h2
    let b = r - a2 * r - q * h2;
    let discriminant = b * b + T::from(4.0).unwrap() * h2 * q * r;
    let root = discriminant.sqrt();

    // Positive root, avoiding cancellation between b and the radical.
    let two = T::from(2.0).unwrap();
    let predicted = if b > T::zero() {
        two * q * r / (b + root)
    } else {
        (root - b) / (two * h2)
    };

    Some(predicted * r / (h2 * predicted + r))
}

/// Compute the limiting Kalman gain corresponding to the steady-state
/// covariance, if one exists.
pub fn steady_state_gain<T: Float>(
    transition: T,
    observation: T,
    process_noise: T,
    measurement_noise: T,
) -> Option<T> {
    let posterior =
        steady_state_covariance(transition, observation, process_noise, measurement_noise)?;
    let predicted = transition * posterior * transition + process_noise;
    let innovation_variance = observation * predicted * observation + measurement_noise;
    Some(predicted * observation / innovation_variance)
}
