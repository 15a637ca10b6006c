//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes and use cases:
//!
//! - **Batch**: Stateless one-shot removal returning an owned result
//! - **Engine**: Per-spectrum staged engine with lazy, cached products
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-shot batch continuum removal.
pub mod batch;

/// Staged per-spectrum engine with lazy caching.
pub mod engine;
