//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer contains execution-mode adapters over the engine:
//! - Batch: filter a complete measurement sequence in one call
//! - Online: advance the filter one measurement at a time
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Whole-sequence filtering.
pub mod batch;

/// Step-at-a-time filtering.
pub mod online;
