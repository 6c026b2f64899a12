//! Tests for the core predict/update recursion.
//!
//! ## Test Organization
//!
//! 1. **Worked Example** - The canonical single-step computation
//! 2. **Construction Validation** - Parameter constraint enforcement
//! 3. **Determinism** - Bit-identical replays
//! 4. **Convergence** - Constant signals and limiting cases
//! 5. **Invariants** - Covariance non-negativity across parameter sets

use approx::assert_relative_eq;
use kalman_rs::prelude::*;

fn sine_params() -> FilterParameters<f64> {
    FilterParameters {
        transition: 1.0,
        observation: 1.0,
        process_noise: 1e-3,
        measurement_noise: 0.7e-2,
    }
}

// ============================================================================
// Worked Example
// ============================================================================

/// Single step from x = 0, P = 1 with measurement z = 1.
///
/// Intermediate values: P_pred = 1.001, S = 1.008, K = 1.001 / 1.008.
#[test]
fn test_single_step_worked_example() {
    let mut filter = ScalarKalman::new(0.0, 1.0, sine_params()).expect("valid parameters");

    let output = filter.step(1.0).expect("step should succeed");

    let p_pred = 1.0 * 1.0 * 1.0 + 1e-3;
    let s = 1.0 * p_pred * 1.0 + 0.7e-2;
    let k = p_pred * 1.0 / s;

    // x_pred = 0, so the updated estimate is exactly the gain.
    assert_eq!(output.gain, k);
    assert_eq!(output.estimate, k);
    assert_eq!(output.covariance, (1.0 - k * 1.0) * p_pred);
    assert_eq!(output.innovation, 1.0);
    assert_eq!(output.innovation_variance, s);

    assert_relative_eq!(output.estimate, 0.9930555555555556, max_relative = 1e-12);
    assert_relative_eq!(output.covariance, 0.006951388888888889, max_relative = 1e-12);

    // The filter state is the returned state.
    assert_eq!(filter.estimate(), output.estimate);
    assert_eq!(filter.covariance(), output.covariance);
}

/// A non-unit observation coefficient scales the predicted measurement.
#[test]
fn test_step_with_observation_coefficient() {
    let params = FilterParameters {
        transition: 1.0,
        observation: 2.0,
        process_noise: 0.0,
        measurement_noise: 1.0,
    };
    let mut filter = ScalarKalman::new(1.0, 0.5, params).expect("valid parameters");

    let output = filter.step(2.5).expect("step should succeed");

    // x_pred = 1, z_pred = 2, innovation = 0.5
    assert_eq!(output.innovation, 0.5);
    // S = 4 * 0.5 + 1 = 3, K = 0.5 * 2 / 3
    assert_relative_eq!(output.gain, 1.0 / 3.0, max_relative = 1e-15);
    assert_relative_eq!(output.estimate, 1.0 + 0.5 / 3.0, max_relative = 1e-15);
    assert!(output.covariance >= 0.0);
}

// ============================================================================
// Construction Validation
// ============================================================================

/// Each constraint violation is rejected with `InvalidParameter`.
#[test]
fn test_construction_rejects_invalid_parameters() {
    let base = FilterParameters::<f64>::default();

    // R = 0
    let err = ScalarKalman::new(
        0.0,
        1.0,
        FilterParameters {
            measurement_noise: 0.0,
            ..base
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        KalmanError::InvalidParameter {
            parameter: "measurement_noise",
            ..
        }
    ));

    // R = -1
    let err = ScalarKalman::new(
        0.0,
        1.0,
        FilterParameters {
            measurement_noise: -1.0,
            ..base
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        KalmanError::InvalidParameter {
            parameter: "measurement_noise",
            ..
        }
    ));

    // Q = -1
    let err = ScalarKalman::new(
        0.0,
        1.0,
        FilterParameters {
            process_noise: -1.0,
            ..base
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        KalmanError::InvalidParameter {
            parameter: "process_noise",
            ..
        }
    ));

    // P0 = -1
    let err = ScalarKalman::new(0.0, -1.0, base).unwrap_err();
    assert!(matches!(
        err,
        KalmanError::InvalidParameter {
            parameter: "initial_covariance",
            ..
        }
    ));
}

/// Non-finite values are rejected everywhere at construction.
#[test]
fn test_construction_rejects_non_finite_values() {
    let base = FilterParameters::<f64>::default();

    assert!(ScalarKalman::new(f64::NAN, 1.0, base).is_err());
    assert!(ScalarKalman::new(0.0, f64::INFINITY, base).is_err());
    assert!(ScalarKalman::new(
        0.0,
        1.0,
        FilterParameters {
            transition: f64::NAN,
            ..base
        }
    )
    .is_err());
    assert!(ScalarKalman::new(
        0.0,
        1.0,
        FilterParameters {
            observation: f64::INFINITY,
            ..base
        }
    )
    .is_err());
}

/// Zero initial covariance and zero process noise are valid.
#[test]
fn test_construction_accepts_boundary_values() {
    let params = FilterParameters {
        transition: 1.0,
        observation: 1.0,
        process_noise: 0.0,
        measurement_noise: 1e-9,
    };
    let filter = ScalarKalman::new(3.0, 0.0, params).expect("boundary values are valid");
    assert_eq!(filter.estimate(), 3.0);
    assert_eq!(filter.covariance(), 0.0);
}

// ============================================================================
// Determinism
// ============================================================================

/// Two independent filters over the same sequence produce bit-identical
/// results.
#[test]
fn test_determinism_bit_identical() {
    let measurements: Vec<f64> = (0..200)
        .map(|i| (i as f64 * 0.31).sin() + 0.2 * (i as f64 * 1.7).cos())
        .collect();

    let mut first = ScalarKalman::new(0.0, 1.0, sine_params()).expect("valid parameters");
    let mut second = ScalarKalman::new(0.0, 1.0, sine_params()).expect("valid parameters");

    for &z in &measurements {
        let a = first.step(z).expect("step should succeed");
        let b = second.step(z).expect("step should succeed");
        assert_eq!(a.estimate.to_bits(), b.estimate.to_bits());
        assert_eq!(a.covariance.to_bits(), b.covariance.to_bits());
        assert_eq!(a.gain.to_bits(), b.gain.to_bits());
    }
}

// ============================================================================
// Convergence
// ============================================================================

/// A constant signal drives the estimate to the constant and the covariance
/// to the Riccati floor.
#[test]
fn test_convergence_on_constant_signal() {
    let c = 4.2;
    let mut filter = ScalarKalman::new(0.0, 1.0, sine_params()).expect("valid parameters");

    let mut last = None;
    for _ in 0..1000 {
        last = Some(filter.step(c).expect("step should succeed"));
    }
    let last = last.unwrap();

    assert!(
        (last.estimate - c).abs() < 1e-3,
        "estimate {} should be within 1e-3 of {}",
        last.estimate,
        c
    );

    let floor = steady_state_covariance(1.0, 1.0, 1e-3, 0.7e-2).expect("fixed point exists");
    assert_relative_eq!(last.covariance, floor, max_relative = 1e-9);
}

/// With no process noise and a near-perfect sensor, the estimate locks onto
/// the measurement within a few steps.
#[test]
fn test_zero_process_noise_perfect_measurement_limit() {
    let params: FilterParameters<f64> = FilterParameters {
        transition: 1.0,
        observation: 1.0,
        process_noise: 0.0,
        measurement_noise: 1e-12,
    };
    let mut filter = ScalarKalman::new(0.0, 1.0, params).expect("valid parameters");

    let z = 5.0;
    let mut estimate = 0.0;
    for _ in 0..5 {
        estimate = filter.step(z).expect("step should succeed").estimate;
    }
    assert!(
        (estimate - z).abs() < 1e-9,
        "estimate {} should track the measurement {}",
        estimate,
        z
    );
}

// ============================================================================
// Invariants
// ============================================================================

/// Covariance stays non-negative for a spread of valid parameter sets and
/// an arbitrary finite measurement sequence.
#[test]
fn test_covariance_non_negative() {
    let parameter_sets = [
        (1.0, 1.0, 1e-3, 0.7e-2),
        (0.8, 1.0, 0.0, 1e-6),
        (-0.9, 2.0, 0.5, 0.3),
        (1.1, -1.5, 1e-4, 1e-2),
        (0.0, 1.0, 2.0, 5.0),
    ];

    for &(a, h, q, r) in &parameter_sets {
        let params = FilterParameters {
            transition: a,
            observation: h,
            process_noise: q,
            measurement_noise: r,
        };
        let mut filter = ScalarKalman::new(0.3, 2.0, params).expect("valid parameters");

        for i in 0..500 {
            let z = 3.0 * (i as f64 * 0.7).sin() - (i as f64 * 0.13).cos();
            let output = filter.step(z).expect("step should succeed");
            assert!(
                output.covariance >= 0.0,
                "covariance {} went negative for (A={}, H={}, Q={}, R={})",
                output.covariance,
                a,
                h,
                q,
                r
            );
            assert!(output.innovation_variance > 0.0);
        }
    }
}

/// The innovation variance is always at least the measurement noise.
#[test]
fn test_innovation_variance_floor() {
    let params = sine_params();
    let mut filter = ScalarKalman::new(0.0, 1.0, params).expect("valid parameters");
    for i in 0..100 {
        let output = filter.step(i as f64 * 0.01).expect("step should succeed");
        assert!(output.innovation_variance >= params.measurement_noise);
    }
}
