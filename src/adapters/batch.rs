//! Batch adapter for one-shot continuum removal.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for continuum removal.
//! It validates a spectrum, runs the full pipeline in a single pass, and
//! returns an owned result. Nothing is cached between calls.
//!
//! ## Design notes
//!
//! * **Stateless**: The processor holds only configuration; each `remove`
//!   call is independent, so one processor can serve many spectra.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types at the call site.
//!
//! ## Key concepts
//!
//! * **One-shot processing**: Validates, executes, and packages the result.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//!
//! ## Invariants
//!
//! * Input arrays must have the same length and at least 3 samples.
//! * The wavelength grid must be finite and strictly increasing.
//! * Output arrays are aligned with the input grid.
//!
//! ## Non-goals
//!
//! * This adapter does not cache derived products (use the engine adapter).
//! * This adapter does not iterate over collections of spectra.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ContinuumConfig, ContinuumExecutor, DegenerateFallback, RemovalMethod};
use crate::engine::output::ContinuumResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::ContinuumError;

// ============================================================================
// Batch Continuum Builder
// ============================================================================

/// Builder for the batch continuum-removal processor.
#[derive(Debug, Clone)]
pub struct BatchContinuumBuilder {
    /// Removal method applied after the continuum is computed.
    pub method: RemovalMethod,

    /// Policy for collinear (zero-area) point sets.
    pub on_degenerate: DegenerateFallback,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for BatchContinuumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchContinuumBuilder {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            method: RemovalMethod::default(),
            on_degenerate: DegenerateFallback::default(),
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the removal method.
    pub fn method(mut self, method: RemovalMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the degenerate-hull policy.
    pub fn on_degenerate(mut self, fallback: DegenerateFallback) -> Self {
        self.on_degenerate = fallback;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchContinuum, ContinuumError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchContinuum { config: self })
    }
}

// ============================================================================
// Batch Continuum Processor
// ============================================================================

/// Batch continuum-removal processor.
#[derive(Debug)]
pub struct BatchContinuum {
    config: BatchContinuumBuilder,
}

impl BatchContinuum {
    /// Remove the continuum from the provided spectrum.
    pub fn remove<T: Float>(
        &self,
        wavelength: &[T],
        reflectance: &[T],
    ) -> Result<ContinuumResult<T>, ContinuumError> {
        Validator::validate_spectrum(wavelength, reflectance)?;

        // Configure batch execution
        let config = ContinuumConfig {
            method: self.config.method,
            on_degenerate: self.config.on_degenerate,
        };

        let output = ContinuumExecutor::run_with_config(wavelength, reflectance, &config)?;

        Ok(ContinuumResult {
            wavelength: wavelength.to_vec(),
            reflectance: reflectance.to_vec(),
            continuum: output.continuum,
            removed: output.removed,
            anchors: output.anchors,
            method: self.config.method,
            degenerate: output.degenerate,
        })
    }
}
