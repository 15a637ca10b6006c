//! Execution engine for continuum-removal operations.
//!
//! ## Purpose
//!
//! This module provides the execution engine that orchestrates the
//! continuum-removal pipeline: hull construction, upper-boundary selection,
//! resampling onto the input grid, and the final removal step. The executor
//! coordinates the lower-level algorithms to produce aligned output arrays.
//!
//! ## Design notes
//!
//! * **Two phases**: The pipeline splits into a continuum phase (hull,
//!   envelope, resampling) and a removal phase (elementwise detrend). The
//!   staged per-spectrum engine runs them lazily; the batch adapter runs
//!   both at once.
//! * **Policy enums**: The removal method and the degenerate-hull policy are
//!   plain enums carried in a config payload.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input is validated before it reaches the executor.
//! * All output arrays have the same length as the input grid.
//! * Anchors returned to the caller are strictly increasing in wavelength.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not cache results (handled by the adapters).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::envelope::{collapse_by_wavelength, upper_boundary};
use crate::algorithms::hull::{is_degenerate, monotone_chain};
use crate::algorithms::resample::resample_to_grid;
use crate::primitives::errors::ContinuumError;
use crate::primitives::point::HullPoint;

// ============================================================================
// Removal Policy
// ============================================================================

/// How the continuum is removed from the reflectance spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalMethod {
    /// Elementwise difference: `reflectance - continuum`. Absorption features
    /// become dips below zero.
    #[default]
    Subtract,

    /// Elementwise ratio: `reflectance / continuum`. The standard
    /// band-depth normalization; features become dips below one. Assumes a
    /// positive continuum; zero continuum samples produce non-finite ratios.
    Divide,
}

impl RemovalMethod {
    /// Apply the removal elementwise.
    pub fn apply<T: Float>(&self, reflectance: &[T], continuum: &[T]) -> Vec<T> {
        match self {
            Self::Subtract => reflectance
                .iter()
                .zip(continuum)
                .map(|(&r, &c)| r - c)
                .collect(),
            Self::Divide => reflectance
                .iter()
                .zip(continuum)
                .map(|(&r, &c)| r / c)
                .collect(),
        }
    }
}

// ============================================================================
// Degenerate-Hull Policy
// ============================================================================

/// What to do when the point set is collinear and the hull has no area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateFallback {
    /// Surface `ContinuumError::DegenerateHull` to the caller.
    #[default]
    Fail,

    /// Treat the spectrum as its own continuum: the continuum equals the
    /// reflectance exactly and the removed spectrum is the removal identity
    /// (all zeros for `Subtract`, all ones for `Divide`).
    UseSpectrum,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for continuum-removal execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContinuumConfig {
    /// Removal method applied after the continuum is computed.
    pub method: RemovalMethod,

    /// Policy for collinear (zero-area) point sets.
    pub on_degenerate: DegenerateFallback,
}

// ============================================================================
// Execution Output
// ============================================================================

/// Output from continuum-removal execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Upper-boundary hull vertices, sorted by ascending wavelength.
    pub anchors: Vec<HullPoint<T>>,

    /// Continuum evaluated at every input wavelength.
    pub continuum: Vec<T>,

    /// Continuum-removed spectrum, aligned with the input grid.
    pub removed: Vec<T>,

    /// Whether the degenerate fallback was taken instead of a real hull.
    pub degenerate: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for continuum-removal operations.
///
/// Provides static entry points; all state lives in the config payload and
/// the adapters. Input must already be validated.
pub struct ContinuumExecutor;

impl ContinuumExecutor {
    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the full pipeline with a `ContinuumConfig` payload.
    pub fn run_with_config<T: Float>(
        wavelength: &[T],
        reflectance: &[T],
        config: &ContinuumConfig,
    ) -> Result<ExecutorOutput<T>, ContinuumError> {
        let (anchors, continuum, degenerate) =
            Self::continuum_pass(wavelength, reflectance, config)?;
        let removed = config.method.apply(reflectance, &continuum);

        Ok(ExecutorOutput {
            anchors,
            continuum,
            removed,
            degenerate,
        })
    }

    // ========================================================================
    // Pipeline Phases
    // ========================================================================

    /// Continuum phase: hull scan, upper-boundary selection, resampling.
    ///
    /// Returns `(anchors, continuum, degenerate)`. The removal phase is
    /// `RemovalMethod::apply` on the returned continuum; the staged engine
    /// defers it until the removed spectrum is first requested.
    pub fn continuum_pass<T: Float>(
        wavelength: &[T],
        reflectance: &[T],
        config: &ContinuumConfig,
    ) -> Result<(Vec<HullPoint<T>>, Vec<T>, bool), ContinuumError> {
        // Assemble the planar point set; the grid is already strictly
        // increasing, so the points arrive sorted for the hull scan
        let points: Vec<HullPoint<T>> = wavelength
            .iter()
            .zip(reflectance)
            .map(|(&w, &r)| HullPoint::new(w, r))
            .collect();

        let hull = monotone_chain(&points);

        // Collinear input collapses to its two extreme points
        if is_degenerate(&hull) {
            return match config.on_degenerate {
                DegenerateFallback::Fail => Err(ContinuumError::DegenerateHull {
                    vertices: hull.len(),
                }),
                DegenerateFallback::UseSpectrum => Ok((hull, reflectance.to_vec(), true)),
            };
        }

        // Upper boundary, guarded against duplicate wavelengths
        let anchors = collapse_by_wavelength(upper_boundary(&hull));

        // Evaluate the continuum on the input grid
        let continuum = resample_to_grid(&anchors, wavelength);

        Ok((anchors, continuum, false))
    }
}
