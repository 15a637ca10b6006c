//! High-level API for continuum removal.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for continuum
//! removal. It implements a fluent builder pattern for configuring the
//! removal and choosing an execution adapter (Batch or Engine).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated during adapter construction.
//! * **Late generics**: The float type is fixed where data enters (`remove`
//!   or `build`), not on the configuration builder; configuration carries no
//!   numeric state.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch (one-shot) and Engine (staged, cached).
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ContinuumBuilder`] via `ContinuumRemoval::new()`.
//! 2. Chain configuration methods (`.method()`, `.on_degenerate()`).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchContinuumBuilder;
use crate::adapters::engine::EngineContinuumBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchContinuum;
pub use crate::adapters::engine::{ContinuumEngine, Stage};
pub use crate::engine::executor::{DegenerateFallback, RemovalMethod};
pub use crate::engine::output::{ContinuumFrame, ContinuumResult, ContinuumSink};
pub use crate::primitives::errors::ContinuumError;
pub use crate::primitives::point::HullPoint;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Engine};
}

/// Fluent builder for configuring continuum removal and execution modes.
#[derive(Debug, Clone, Default)]
pub struct ContinuumBuilder {
    /// Removal method applied after the continuum is computed.
    pub method: Option<RemovalMethod>,

    /// Policy for collinear (zero-area) point sets.
    pub on_degenerate: Option<DegenerateFallback>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ContinuumBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: ContinuumAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            on_degenerate: None,
            duplicate_param: None,
        }
    }

    /// Set the removal method (subtract or divide).
    pub fn method(mut self, method: RemovalMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the policy for collinear point sets.
    pub fn on_degenerate(mut self, fallback: DegenerateFallback) -> Self {
        if self.on_degenerate.is_some() {
            self.duplicate_param = Some("on_degenerate");
        }
        self.on_degenerate = Some(fallback);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait ContinuumAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`ContinuumBuilder`] into a specialized execution builder.
    fn convert(builder: ContinuumBuilder) -> Self::Output;
}

/// Marker for one-shot batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl ContinuumAdapter for Batch {
    type Output = BatchContinuumBuilder;

    fn convert(builder: ContinuumBuilder) -> Self::Output {
        let mut result = BatchContinuumBuilder::default();

        if let Some(method) = builder.method {
            result.method = method;
        }
        if let Some(fallback) = builder.on_degenerate {
            result.on_degenerate = fallback;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for the staged per-spectrum engine.
#[derive(Debug, Clone, Copy)]
pub struct Engine;

impl ContinuumAdapter for Engine {
    type Output = EngineContinuumBuilder;

    fn convert(builder: ContinuumBuilder) -> Self::Output {
        let mut result = EngineContinuumBuilder::default();

        if let Some(method) = builder.method {
            result.method = method;
        }
        if let Some(fallback) = builder.on_degenerate {
            result.on_degenerate = fallback;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
