//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the core estimation algorithm:
//! - The scalar Kalman predict/update recursion and its owned state
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The scalar Kalman filter recursion.
pub mod recursion;
