//! Staged engine adapter for per-spectrum continuum removal.
//!
//! ## Purpose
//!
//! This module provides the per-spectrum engine adapter. The engine owns one
//! spectrum, supplied once at construction, and derives the continuum and the
//! continuum-removed spectrum lazily, caching each product the first time it
//! is requested.
//!
//! ## Design notes
//!
//! * **Explicit lifecycle**: The cache is a three-variant enum whose variants
//!   carry their payloads, so each stage's data exists exactly when the stage
//!   says it does. There are no sentinel `Option` fields to keep in sync.
//! * **Monotonic**: Transitions only advance; recomputation requires
//!   constructing a new engine. There is no mutation API for the spectrum.
//! * **Idempotent**: Repeat calls return the cached arrays untouched.
//! * **Borrowed access**: Accessors take `&mut self` (they may advance the
//!   stage) and return slices into the cache; `result()` clones an owned
//!   snapshot.
//!
//! ## Key concepts
//!
//! * **Stage**: `Uninitialized -> HullComputed -> ContinuumRemoved`, each
//!   transition triggered by the first call that needs it.
//! * **Independence**: Distinct engines share nothing; a batch of spectra can
//!   be processed on separate engines without coordination.
//!
//! ## Invariants
//!
//! * The spectrum is validated before the engine is constructed.
//! * Cached arrays are aligned with the stored wavelength grid.
//! * The stage never moves backward.
//!
//! ## Non-goals
//!
//! * This adapter does not process multiple spectra (one engine per spectrum).
//! * This adapter does not re-validate data after construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::replace;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ContinuumConfig, ContinuumExecutor, DegenerateFallback, RemovalMethod};
use crate::engine::output::{ContinuumFrame, ContinuumResult, ContinuumSink};
use crate::engine::validator::Validator;
use crate::primitives::errors::ContinuumError;
use crate::primitives::point::HullPoint;

// ============================================================================
// Lifecycle Stage
// ============================================================================

/// Lifecycle stage of a continuum engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Spectrum stored; nothing derived yet.
    Uninitialized,

    /// Hull scanned; anchors and continuum cached.
    HullComputed,

    /// Removal applied; all derived products cached.
    ContinuumRemoved,
}

/// Cache payload per stage. The variant is the source of truth for which
/// derived arrays exist.
#[derive(Debug, Clone)]
enum StageCache<T> {
    Uninitialized,
    HullComputed {
        anchors: Vec<HullPoint<T>>,
        continuum: Vec<T>,
        degenerate: bool,
    },
    ContinuumRemoved {
        anchors: Vec<HullPoint<T>>,
        continuum: Vec<T>,
        removed: Vec<T>,
        degenerate: bool,
    },
}

// ============================================================================
// Engine Continuum Builder
// ============================================================================

/// Builder for the staged per-spectrum engine.
#[derive(Debug, Clone)]
pub struct EngineContinuumBuilder {
    /// Removal method applied after the continuum is computed.
    pub method: RemovalMethod,

    /// Policy for collinear (zero-area) point sets.
    pub on_degenerate: DegenerateFallback,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for EngineContinuumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineContinuumBuilder {
    /// Create a new engine builder with default parameters.
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

    /// Validate the spectrum and construct an engine around it.
    ///
    /// The engine takes ownership of both arrays; they cannot change for the
    /// engine's lifetime.
    pub fn build<T: Float>(
        self,
        wavelength: Vec<T>,
        reflectance: Vec<T>,
    ) -> Result<ContinuumEngine<T>, ContinuumError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_spectrum(&wavelength, &reflectance)?;

        Ok(ContinuumEngine {
            wavelength,
            reflectance,
            config: ContinuumConfig {
                method: self.method,
                on_degenerate: self.on_degenerate,
            },
            cache: StageCache::Uninitialized,
        })
    }
}

// ============================================================================
// Continuum Engine
// ============================================================================

/// Staged per-spectrum continuum-removal engine.
#[derive(Debug, Clone)]
pub struct ContinuumEngine<T: Float> {
    wavelength: Vec<T>,
    reflectance: Vec<T>,
    config: ContinuumConfig,
    cache: StageCache<T>,
}

impl<T: Float> ContinuumEngine<T> {
    // ========================================================================
    // Introspection
    // ========================================================================

    /// Current lifecycle stage.
    pub fn stage(&self) -> Stage {
        match self.cache {
            StageCache::Uninitialized => Stage::Uninitialized,
            StageCache::HullComputed { .. } => Stage::HullComputed,
            StageCache::ContinuumRemoved { .. } => Stage::ContinuumRemoved,
        }
    }

    /// Stored wavelength grid.
    pub fn wavelength(&self) -> &[T] {
        &self.wavelength
    }

    /// Stored reflectance values.
    pub fn reflectance(&self) -> &[T] {
        &self.reflectance
    }

    // ========================================================================
    // Derived Products
    // ========================================================================

    /// Continuum evaluated at every stored wavelength.
    ///
    /// Computes the hull on first call; afterwards returns the cached array.
    pub fn continuum(&mut self) -> Result<&[T], ContinuumError> {
        self.ensure_hull()?;
        Ok(self.hull_cache().1)
    }

    /// Upper-boundary hull vertices, sorted by ascending wavelength.
    ///
    /// Computes the hull on first call; afterwards returns the cached list.
    pub fn anchors(&mut self) -> Result<&[HullPoint<T>], ContinuumError> {
        self.ensure_hull()?;
        Ok(self.hull_cache().0)
    }

    /// Whether the degenerate fallback was taken instead of a real hull.
    ///
    /// Computes the hull on first call.
    pub fn is_degenerate(&mut self) -> Result<bool, ContinuumError> {
        self.ensure_hull()?;
        Ok(self.hull_cache().2)
    }

    /// Continuum-removed spectrum.
    ///
    /// Triggers the continuum computation if it has not run yet, then applies
    /// the removal method; afterwards returns the cached array.
    pub fn continuum_removed(&mut self) -> Result<&[T], ContinuumError> {
        self.ensure_removed()?;
        Ok(self.removed_cache())
    }

    /// Owned snapshot of all arrays, advancing the engine to the final stage.
    pub fn result(&mut self) -> Result<ContinuumResult<T>, ContinuumError> {
        self.ensure_removed()?;
        let (anchors, continuum, degenerate) = self.hull_cache();

        Ok(ContinuumResult {
            wavelength: self.wavelength.clone(),
            reflectance: self.reflectance.clone(),
            continuum: continuum.to_vec(),
            removed: self.removed_cache().to_vec(),
            anchors: anchors.to_vec(),
            method: self.config.method,
            degenerate,
        })
    }

    /// Hand the aligned arrays to a sink, advancing to the final stage first.
    pub fn publish<S: ContinuumSink<T>>(&mut self, sink: &mut S) -> Result<(), ContinuumError> {
        self.ensure_removed()?;
        let (anchors, continuum, _) = self.hull_cache();

        sink.accept(ContinuumFrame {
            wavelength: &self.wavelength,
            reflectance: &self.reflectance,
            continuum,
            removed: self.removed_cache(),
            anchors,
        });

        Ok(())
    }

    // ========================================================================
    // Stage Transitions
    // ========================================================================

    /// Advance `Uninitialized -> HullComputed`; no-op afterwards.
    fn ensure_hull(&mut self) -> Result<(), ContinuumError> {
        if matches!(self.cache, StageCache::Uninitialized) {
            let (anchors, continuum, degenerate) = ContinuumExecutor::continuum_pass(
                &self.wavelength,
                &self.reflectance,
                &self.config,
            )?;
            self.cache = StageCache::HullComputed {
                anchors,
                continuum,
                degenerate,
            };
        }
        Ok(())
    }

    /// Advance to `ContinuumRemoved`; no-op once there.
    fn ensure_removed(&mut self) -> Result<(), ContinuumError> {
        self.ensure_hull()?;

        if matches!(self.cache, StageCache::HullComputed { .. }) {
            // Take the hull payload out to move it into the final stage
            let prev = replace(&mut self.cache, StageCache::Uninitialized);
            if let StageCache::HullComputed {
                anchors,
                continuum,
                degenerate,
            } = prev
            {
                let removed = self.config.method.apply(&self.reflectance, &continuum);
                self.cache = StageCache::ContinuumRemoved {
                    anchors,
                    continuum,
                    removed,
                    degenerate,
                };
            }
        }
        Ok(())
    }

    // ========================================================================
    // Cache Accessors
    // ========================================================================

    /// Hull-stage payload. Callers run `ensure_hull` first.
    fn hull_cache(&self) -> (&[HullPoint<T>], &[T], bool) {
        match &self.cache {
            StageCache::HullComputed {
                anchors,
                continuum,
                degenerate,
            } => (anchors, continuum, *degenerate),
            StageCache::ContinuumRemoved {
                anchors,
                continuum,
                degenerate,
                ..
            } => (anchors, continuum, *degenerate),
            StageCache::Uninitialized => unreachable!(),
        }
    }

    /// Removal-stage payload. Callers run `ensure_removed` first.
    fn removed_cache(&self) -> &[T] {
        match &self.cache {
            StageCache::ContinuumRemoved { removed, .. } => removed,
            _ => unreachable!(),
        }
    }
}
