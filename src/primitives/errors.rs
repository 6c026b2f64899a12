//! Error types for Kalman filter configuration and execution.
//!
//! ## Purpose
//!
//! This module defines the error enum shared by the builder, the validator,
//! and the filter core. Every failure in the crate is surfaced through
//! [`KalmanError`]; nothing is swallowed or retried internally.
//!
//! ## Design notes
//!
//! * **Synchronous**: Errors are returned from the call that detected them.
//! * **Non-corrupting**: A failed step leaves the filter state untouched, so
//!   the caller may inspect it and decide whether to reinitialize.
//! * **Payloads**: Offending values are carried as `f64` regardless of the
//!   filter's float type, for uniform display.
//!
//! ## Key concepts
//!
//! * **Parameter errors**: Raised at construction, not recoverable without
//!   rebuilding with corrected parameters.
//! * **Degenerate covariance**: Raised during a step when the innovation
//!   variance is not strictly positive. Under the construction invariants
//!   this is unreachable; it signals external state tampering.
//!
//! ## Non-goals
//!
//! * This module does not implement retry or self-repair policies.
//! * This module does not classify caller-side acquisition failures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced by filter construction, configuration, and stepping.
#[derive(Debug, Clone, PartialEq)]
pub enum KalmanError {
    /// A construction parameter violated its constraint.
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint, e.g. `"must be > 0 and finite"`.
        constraint: &'static str,
    },

    /// The innovation variance `S = H * P_pred * H + R` was not strictly
    /// positive at the start of a step.
    ///
    /// Given valid parameters (`R > 0`) and a non-negative covariance this
    /// cannot happen; it indicates the state or parameters were corrupted
    /// externally. The step that detected it did not modify the filter.
    DegenerateCovariance {
        /// The non-positive innovation variance that was computed.
        innovation_variance: f64,
    },

    /// A non-finite value (NaN or infinity) was found in input data.
    InvalidNumericValue(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter that was configured twice.
        parameter: &'static str,
    },

    /// A feature was requested that the selected adapter does not support.
    UnsupportedFeature {
        /// Name of the adapter.
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },
}

impl fmt::Display for KalmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KalmanError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(f, "Invalid {}: {} ({})", parameter, value, constraint)
            }
            KalmanError::DegenerateCovariance {
                innovation_variance,
            } => {
                write!(
                    f,
                    "Degenerate innovation variance: {} (must be > 0)",
                    innovation_variance
                )
            }
            KalmanError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            KalmanError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
            KalmanError::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{}' does not support feature: {}", adapter, feature)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KalmanError {}
