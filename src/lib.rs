//! # kalman-rs — Scalar Kalman Filtering for Rust
//!
//! A small, careful implementation of the discrete-time scalar Kalman
//! filter for denoising noisy one-dimensional time series.
//!
//! ## What is a Kalman filter?
//!
//! A Kalman filter is a recursive estimator: given a linear model of how a
//! hidden quantity evolves and how noisily it is observed, it maintains the
//! statistically optimal running estimate of that quantity, updating it once
//! per incoming measurement. The scalar (1-D) case covered here applies to
//! a single signal observed through a single noisy sensor.
//!
//! **Key advantages:**
//! - Optimal blending of model prediction and measurement under the linear
//!   Gaussian assumptions
//! - O(1) work and O(1) memory per measurement, no history kept
//! - An explicit uncertainty (error covariance) alongside every estimate
//! - Deterministic: the same inputs always produce the same outputs
//!
//! **Common applications:**
//! - Denoising sensor readings (temperature, light, pressure, position)
//! - Smoothing financial or physiological time series
//! - Feeding stable values to control loops and monitoring dashboards
//!
//! **How a step works:**
//!
//! 1. Predict the state forward: `x_pred = A * x`, `P_pred = A * P * A + Q`
//! 2. Form the innovation `z - H * x_pred` and its variance
//!    `S = H * P_pred * H + R`
//! 3. Compute the gain `K = P_pred * H / S`
//! 4. Correct: `x = x_pred + K * (z - H * x_pred)`, `P = (1 - K * H) * P_pred`
//!
//! The gain moves toward 1 when measurements are trustworthy (small `R`)
//! and toward 0 when the model is (small `Q`), so the filter interpolates
//! smoothly between believing the sensor and believing its own prediction.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use kalman_rs::prelude::*;
//!
//! let measurements = vec![0.39, 0.50, 0.48, 0.29, 0.25, 0.32, 0.34, 0.48];
//!
//! // Build the model
//! let model = Kalman::new()
//!     .process_noise(1e-5)        // How much the state drifts per step
//!     .measurement_noise(1e-2)    // How noisy the sensor is
//!     .initial_estimate(0.0)
//!     .initial_covariance(1.0)
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Filter the sequence
//! let result = model.run(&measurements)?;
//!
//! assert_eq!(result.len(), measurements.len());
//! println!("{}", result);
//! # Result::<(), KalmanError>::Ok(())
//! ```
//!
//! ### Online (step-at-a-time) Use
//!
//! ```rust
//! use kalman_rs::prelude::*;
//!
//! let mut processor = Kalman::new()
//!     .process_noise(1e-3)
//!     .measurement_noise(0.7e-2)
//!     .adapter(Online)
//!     .build()?;
//!
//! for measurement in [0.98, 1.02, 1.01, 0.97] {
//!     let output = processor.step(measurement)?;
//!     // output.estimate is available immediately, before the next sample
//!     assert!(output.covariance >= 0.0);
//! }
//! assert_eq!(processor.steps(), 4);
//! # Result::<(), KalmanError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use kalman_rs::prelude::*;
//!
//! let measurements = vec![1.2, 0.9, 1.1, 1.0, 0.8, 1.05, 0.95, 1.0];
//!
//! let model = Kalman::new()
//!     .transition(1.0)            // State transition coefficient A
//!     .observation(1.0)           // Observation coefficient H
//!     .process_noise(1e-3)        // Process noise variance Q
//!     .measurement_noise(0.7e-2)  // Measurement noise variance R
//!     .initial_estimate(0.0)      // x at step 0
//!     .initial_covariance(1.0)    // P at step 0
//!     .return_diagnostics()       // Innovation statistics
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.run(&measurements)?;
//! println!("{}", result);
//! # Result::<(), KalmanError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The batch `run` method returns a `Result<KalmanResult<T>, RunFailure<T>>`.
//!
//! - **`Ok(KalmanResult<T>)`**: The ordered estimates, covariances, gains,
//!   and innovations, plus optional diagnostics.
//! - **`Err(RunFailure<T>)`**: The partial results completed before the
//!   first failing step, the failing index, and the [`KalmanError`].
//!
//! `RunFailure` converts into `KalmanError`, so the `?` operator works in
//! functions that only care about the error kind:
//!
//! ```rust
//! use kalman_rs::prelude::*;
//! # let measurements = vec![1.0, 2.0, 3.0];
//!
//! let model = Kalman::new().adapter(Batch).build()?;
//! let result = model.run(&measurements)?;
//! # Result::<(), KalmanError>::Ok(())
//! ```
//!
//! But you can also handle failures explicitly to keep the partial output:
//!
//! ```rust
//! use kalman_rs::prelude::*;
//! # let measurements = vec![1.0, 2.0, 3.0];
//!
//! let model = Kalman::new().adapter(Batch).build()?;
//!
//! match model.run(&measurements) {
//!     Ok(result) => {
//!         println!("Estimates: {:?}", result.estimates);
//!     }
//!     Err(failure) => {
//!         eprintln!("{}", failure);
//!         // failure.completed holds the results up to failure.index
//!     }
//! }
//! # Result::<(), KalmanError>::Ok(())
//! ```
//!
//! Construction rejects invalid parameters up front:
//!
//! ```rust
//! use kalman_rs::prelude::*;
//!
//! let err = Kalman::new()
//!     .measurement_noise(0.0) // division by R-derived quantity: must be > 0
//!     .adapter(Batch)
//!     .build()
//!     .unwrap_err();
//! assert!(matches!(err, KalmanError::InvalidParameter { .. }));
//! ```
//!
//! ## Choosing Q and R
//!
//! `R` is a property of the sensor: the variance of its noise, often known
//! from a datasheet or estimable from a still signal. `Q` expresses how far
//! the true state can wander between samples; it is the main tuning knob.
//! Larger `Q / R` tracks the measurements more closely, smaller `Q / R`
//! smooths harder. The steady-state behavior for a given parameter set is
//! available in closed form via [`steady_state_covariance`] and
//! [`steady_state_gain`] in the prelude.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded targets. Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kalman-rs = { version = "0.3", default-features = false }
//! ```
//!
//! The core recursion allocates nothing; only the batch result vectors
//! require `alloc`.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Standard library support, `std::error::Error` impls |
//! | `dev`   | no      | Exposes internal modules for development and testing |

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error types.
//
// Contains the error enum shared by every other layer.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the closed-form steady-state solutions of the scalar Riccati
// recursion.
mod math;

// Layer 3: Algorithms - the core estimation algorithm.
//
// Contains the scalar Kalman predict/update recursion
// (`ScalarKalman`, `FilterParameters`, `StepOutput`).
mod algorithms;

// Layer 4: Evaluation - post-processing over completed runs.
//
// Contains innovation-based diagnostics (mean, RMSE, NIS).
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the sequential run driver with first-failure
// reporting, and result assembly.
mod engine;

// Layer 6: Adapters - execution mode adapters.
//
// Contains execution adapters for different use cases:
// batch (whole sequences), online (step-at-a-time).
mod adapters;

// High-level fluent API for scalar Kalman filtering.
//
// Provides the `Kalman` builder for configuring and running the filter.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use kalman_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        FilterDiagnostics, FilterParameters, KalmanBuilder as Kalman, KalmanError, KalmanResult,
        RunFailure, ScalarKalman, StepOutput, steady_state_covariance, steady_state_gain,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
