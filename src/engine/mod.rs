//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides the execution engine for continuum removal. It
//! validates input, orchestrates the algorithm pipeline, and defines the
//! output types handed to callers and sinks.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Core execution logic.
pub mod executor;

/// Input validation.
pub mod validator;

/// Output types and the sink seam.
pub mod output;
