//! Input validation for filter configuration and measurement data.
//!
//! ## Purpose
//!
//! This module validates what the core recursion deliberately does not:
//! builder usage and the hygiene of incoming measurement data. The numeric
//! parameter constraints themselves live with
//! [`FilterParameters`](crate::algorithms::recursion::FilterParameters),
//! which every construction path funnels through.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Purity**: Validation logic is deterministic and side-effect free.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not correct or filter invalid inputs.
//! * This module does not re-check constraints the constructor enforces.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KalmanError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for builder state and measurement data.
///
/// All methods return `Result<(), KalmanError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a single incoming measurement for finiteness.
    ///
    /// `index` is the measurement's position in its sequence, used for
    /// error reporting only.
    pub fn validate_measurement<T: Float>(value: T, index: usize) -> Result<(), KalmanError> {
        if !value.is_finite() {
            return Err(KalmanError::InvalidNumericValue(format!(
                "measurement[{}]={}",
                index,
                value.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Reject builders on which a parameter was configured more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KalmanError> {
        if let Some(parameter) = duplicate_param {
            return Err(KalmanError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
