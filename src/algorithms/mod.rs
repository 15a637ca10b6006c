//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the geometric pipeline of continuum removal:
//! - Convex hull construction (monotone chain)
//! - Upper-boundary extraction and anchor normalization
//! - Piecewise-linear resampling onto the spectral grid
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Convex hull construction via monotone chain.
pub mod hull;

/// Upper-boundary extraction and anchor collapse.
pub mod envelope;

/// Resampling anchors onto the spectral grid.
pub mod resample;
