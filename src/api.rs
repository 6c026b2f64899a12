//! High-level API for scalar Kalman filtering.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the filter model and choosing an
//! execution adapter (Batch or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (the random-walk
//!   observation model).
//! * **Polymorphic**: Uses marker types to transition to specialized adapter
//!   builders.
//! * **Validated**: Parameters are validated when `.build()` is called on
//!   the adapter builder.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Online modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Batch)` or
//!   `.adapter(Online)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KalmanBuilder`] via `Kalman::new()`.
//! 2. Chain configuration methods (`.process_noise()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.
//! 4. Call `.build()`; construction errors surface here.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchKalmanBuilder;
use crate::adapters::online::OnlineKalmanBuilder;

// Publicly re-exported types
pub use crate::algorithms::recursion::{FilterParameters, ScalarKalman, StepOutput};
pub use crate::engine::output::{KalmanResult, RunFailure};
pub use crate::evaluation::diagnostics::FilterDiagnostics;
pub use crate::math::riccati::{steady_state_covariance, steady_state_gain};
pub use crate::primitives::errors::KalmanError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

// ============================================================================
// Kalman Builder
// ============================================================================

/// Fluent builder for configuring filter parameters and execution modes.
#[derive(Debug, Clone)]
pub struct KalmanBuilder<T: Float + Debug> {
    /// State transition coefficient `A`.
    pub transition: Option<T>,

    /// Observation coefficient `H`.
    pub observation: Option<T>,

    /// Process noise variance `Q` (>= 0).
    pub process_noise: Option<T>,

    /// Measurement noise variance `R` (> 0).
    pub measurement_noise: Option<T>,

    /// Initial state estimate.
    pub initial_estimate: Option<T>,

    /// Initial error covariance (>= 0).
    pub initial_covariance: Option<T>,

    /// Enable innovation diagnostics (Batch only).
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for KalmanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> KalmanBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            transition: None,
            observation: None,
            process_noise: None,
            measurement_noise: None,
            initial_estimate: None,
            initial_covariance: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: KalmanAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the state transition coefficient `A` (default: 1).
    pub fn transition(mut self, transition: T) -> Self {
        if self.transition.is_some() {
            self.duplicate_param = Some("transition");
        }
        self.transition = Some(transition);
        self
    }

    /// Set the observation coefficient `H` (default: 1).
    pub fn observation(mut self, observation: T) -> Self {
        if self.observation.is_some() {
            self.duplicate_param = Some("observation");
        }
        self.observation = Some(observation);
        self
    }

    /// Set the process noise variance `Q` (default: 0).
    pub fn process_noise(mut self, process_noise: T) -> Self {
        if self.process_noise.is_some() {
            self.duplicate_param = Some("process_noise");
        }
        self.process_noise = Some(process_noise);
        self
    }

    /// Set the measurement noise variance `R` (default: 1).
    pub fn measurement_noise(mut self, measurement_noise: T) -> Self {
        if self.measurement_noise.is_some() {
            self.duplicate_param = Some("measurement_noise");
        }
        self.measurement_noise = Some(measurement_noise);
        self
    }

    /// Set the initial state estimate (default: 0).
    pub fn initial_estimate(mut self, estimate: T) -> Self {
        if self.initial_estimate.is_some() {
            self.duplicate_param = Some("initial_estimate");
        }
        self.initial_estimate = Some(estimate);
        self
    }

    /// Set the initial error covariance (default: 1).
    pub fn initial_covariance(mut self, covariance: T) -> Self {
        if self.initial_covariance.is_some() {
            self.duplicate_param = Some("initial_covariance");
        }
        self.initial_covariance = Some(covariance);
        self
    }

    /// Include innovation diagnostics in batch results.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }
}

// ============================================================================
// Adapter Markers
// ============================================================================

/// Trait for converting the generic builder into an adapter-specific one.
pub trait KalmanAdapter<T: Float + Debug> {
    /// The adapter-specific builder produced by the conversion.
    type Output;

    /// Convert the generic builder, carrying configuration over.
    fn convert(builder: KalmanBuilder<T>) -> Self::Output;
}

/// Marker for the batch execution adapter.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

/// Marker for the online execution adapter.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float + Debug> KalmanAdapter<T> for Batch {
    type Output = BatchKalmanBuilder<T>;

    fn convert(builder: KalmanBuilder<T>) -> Self::Output {
        let mut out = BatchKalmanBuilder::default();
        if let Some(transition) = builder.transition {
            out.transition = transition;
        }
        if let Some(observation) = builder.observation {
            out.observation = observation;
        }
        if let Some(process_noise) = builder.process_noise {
            out.process_noise = process_noise;
        }
        if let Some(measurement_noise) = builder.measurement_noise {
            out.measurement_noise = measurement_noise;
        }
        if let Some(estimate) = builder.initial_estimate {
            out.initial_estimate = estimate;
        }
        if let Some(covariance) = builder.initial_covariance {
            out.initial_covariance = covariance;
        }
        if let Some(enabled) = builder.return_diagnostics {
            out.return_diagnostics = enabled;
        }
        out.duplicate_param = builder.duplicate_param;
        out
    }
}

impl<T: Float + Debug> KalmanAdapter<T> for Online {
    type Output = OnlineKalmanBuilder<T>;

    fn convert(builder: KalmanBuilder<T>) -> Self::Output {
        let mut out = OnlineKalmanBuilder::default();
        if let Some(transition) = builder.transition {
            out.transition = transition;
        }
        if let Some(observation) = builder.observation {
            out.observation = observation;
        }
        if let Some(process_noise) = builder.process_noise {
            out.process_noise = process_noise;
        }
        if let Some(measurement_noise) = builder.measurement_noise {
            out.measurement_noise = measurement_noise;
        }
        if let Some(estimate) = builder.initial_estimate {
            out.initial_estimate = estimate;
        }
        if let Some(covariance) = builder.initial_covariance {
            out.initial_covariance = covariance;
        }
        if builder.return_diagnostics == Some(true) {
            out.deferred_error = Some(KalmanError::UnsupportedFeature {
                adapter: "Online",
                feature: "return_diagnostics",
            });
        }
        out.duplicate_param = builder.duplicate_param;
        out
    }
}
