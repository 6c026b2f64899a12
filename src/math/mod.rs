//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! filter:
//! - Closed-form steady-state solutions of the scalar Riccati recursion
//!
//! These are reusable mathematical building blocks with no filter-specific
//! state.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Steady-state covariance and gain of the scalar Riccati recursion.
pub mod riccati;
