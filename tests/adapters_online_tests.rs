//! Tests for the Online adapter.
//!
//! The Online adapter advances the filter one measurement at a time,
//! designed for:
//! - Real-time sensor streams
//! - Control and monitoring loops
//! - Memory-constrained environments
//!
//! ## Test Organization
//!
//! 1. **Basic Functionality** - Step-at-a-time behavior
//! 2. **Lifecycle Management** - Steps counter and reset
//! 3. **Builder Validation** - Parameter validation and error handling
//! 4. **Edge Cases** - Non-finite measurements, failure atomicity

use kalman_rs::prelude::*;

// ============================================================================
// Basic Functionality Tests
// ============================================================================

/// Each step returns the updated state, which the accessors mirror.
#[test]
fn test_online_step_basic() {
    let mut processor = Kalman::new()
        .process_noise(1e-3)
        .measurement_noise(0.7e-2)
        .adapter(Online)
        .build()
        .expect("Builder should succeed");

    assert_eq!(processor.steps(), 0);
    assert_eq!(processor.estimate(), 0.0);
    assert_eq!(processor.covariance(), 1.0);

    let output = processor.step(1.0).expect("step should succeed");
    assert_eq!(processor.steps(), 1);
    assert_eq!(processor.estimate(), output.estimate);
    assert_eq!(processor.covariance(), output.covariance);

    // Second step pulls the estimate further toward the measurements.
    let second = processor.step(1.0).expect("step should succeed");
    assert!(second.estimate > output.estimate);
    assert!(second.estimate < 1.0);
    assert!(second.covariance < output.covariance);
}

/// The gain stays in (0, 1] for positive coefficients, blending prediction
/// and measurement.
#[test]
fn test_online_gain_is_a_blend() {
    let mut processor = Kalman::new()
        .process_noise(1e-2)
        .measurement_noise(1e-1)
        .adapter(Online)
        .build()
        .expect("Builder should succeed");

    for i in 0..50 {
        let output = processor.step(i as f64).expect("step should succeed");
        assert!(output.gain > 0.0);
        assert!(output.gain <= 1.0);
    }
}

// ============================================================================
// Lifecycle Management Tests
// ============================================================================

/// Reset restores the construction-time state exactly.
#[test]
fn test_online_reset() {
    let mut processor = Kalman::<f64>::new()
        .process_noise(1e-3)
        .measurement_noise(0.7e-2)
        .initial_estimate(2.5)
        .initial_covariance(0.4)
        .adapter(Online)
        .build()
        .expect("Builder should succeed");

    let sequence = [3.0, 2.8, 2.9, 3.1];
    let first: Vec<_> = sequence
        .iter()
        .map(|&z| processor.step(z).expect("step should succeed"))
        .collect();
    assert_eq!(processor.steps(), sequence.len());

    processor.reset();
    assert_eq!(processor.steps(), 0);
    assert_eq!(processor.estimate(), 2.5);
    assert_eq!(processor.covariance(), 0.4);

    // A replay reproduces the original outputs bit for bit.
    for (i, &z) in sequence.iter().enumerate() {
        let output = processor.step(z).expect("step should succeed");
        assert_eq!(output.estimate.to_bits(), first[i].estimate.to_bits());
        assert_eq!(output.covariance.to_bits(), first[i].covariance.to_bits());
    }
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Construction-time constraint violations surface from `build()`.
#[test]
fn test_online_builder_rejects_invalid_parameters() {
    let err = Kalman::new()
        .measurement_noise(0.0)
        .adapter(Online)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        KalmanError::InvalidParameter {
            parameter: "measurement_noise",
            ..
        }
    ));

    let err = Kalman::new()
        .initial_estimate(f64::NAN)
        .adapter(Online)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        KalmanError::InvalidParameter {
            parameter: "initial_estimate",
            ..
        }
    ));
}

/// Duplicate parameter configuration is rejected at build time.
#[test]
fn test_online_builder_rejects_duplicate_parameters() {
    let err = Kalman::new()
        .transition(1.0)
        .transition(0.9)
        .adapter(Online)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        KalmanError::DuplicateParameter {
            parameter: "transition"
        }
    );
}

/// Run-level diagnostics are a batch-only feature.
#[test]
fn test_online_rejects_diagnostics_request() {
    let err = Kalman::<f64>::new()
        .return_diagnostics()
        .adapter(Online)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        KalmanError::UnsupportedFeature {
            adapter: "Online",
            feature: "return_diagnostics"
        }
    );
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Non-finite measurements are rejected without advancing the filter.
#[test]
fn test_online_rejects_non_finite_measurement() {
    let mut processor = Kalman::new()
        .process_noise(1e-3)
        .measurement_noise(1e-2)
        .adapter(Online)
        .build()
        .expect("Builder should succeed");

    processor.step(1.0).expect("step should succeed");
    let estimate = processor.estimate();
    let covariance = processor.covariance();

    let err = processor.step(f64::NAN).unwrap_err();
    assert!(matches!(err, KalmanError::InvalidNumericValue(_)));

    // State and counter are untouched by the failed step.
    assert_eq!(processor.steps(), 1);
    assert_eq!(processor.estimate().to_bits(), estimate.to_bits());
    assert_eq!(processor.covariance().to_bits(), covariance.to_bits());

    // The processor remains usable.
    processor.step(1.1).expect("step should succeed");
    assert_eq!(processor.steps(), 2);
}
