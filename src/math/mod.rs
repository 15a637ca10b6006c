//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure geometric functions used throughout continuum
//! removal:
//! - Orientation predicates for the hull scan
//!
//! These are reusable building blocks with no algorithm-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Orientation predicates (cross product, turn direction).
pub mod orientation;
