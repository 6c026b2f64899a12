//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer contains post-processing over completed runs:
//! - Innovation-based diagnostic statistics
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Innovation diagnostics for a completed run.
pub mod diagnostics;
