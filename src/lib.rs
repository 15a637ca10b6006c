//! # contrem — Convex-hull continuum removal for reflectance spectra
//!
//! A fast, `no_std`-capable implementation of convex-hull continuum removal,
//! the standard normalization for isolating absorption features in
//! reflectance spectroscopy.
//!
//! ## What is continuum removal?
//!
//! A reflectance spectrum is the product of a smooth baseline (the
//! *continuum*) and localized absorption features that dip below it. The
//! continuum is approximated by the upper convex envelope of the
//! (wavelength, reflectance) point set: the upper boundary of the convex
//! hull, resampled onto the original wavelength grid. Removing it, by
//! subtraction or by ratio, normalizes spectra so absorption-feature depth
//! and shape can be compared across materials and illumination conditions.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use contrem::prelude::*;
//!
//! let wavelength = vec![400.0, 450.0, 500.0, 550.0, 600.0];
//! let reflectance = vec![0.5, 0.3, 0.2, 0.4, 0.6];
//!
//! // Build the processor
//! let model = ContinuumRemoval::new()
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Remove the continuum
//! let result = model.remove(&wavelength, &reflectance)?;
//!
//! println!("{}", result);
//! # Result::<(), ContinuumError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   Anchors:     2
//!   Method:      Subtract
//!
//! Continuum-Removed Data:
//! Wavelength  Reflectance    Continuum      Removed
//! -------------------------------------------------
//!     400.00     0.500000     0.500000     0.000000
//!     450.00     0.300000     0.525000    -0.225000
//!     500.00     0.200000     0.550000    -0.350000
//!     550.00     0.400000     0.575000    -0.175000
//!     600.00     0.600000     0.600000     0.000000
//! ```
//!
//! ### Staged Engine
//!
//! The engine adapter owns one spectrum and derives products lazily, caching
//! each the first time it is requested:
//!
//! ```rust
//! use contrem::prelude::*;
//!
//! let wavelength = vec![400.0, 450.0, 500.0, 550.0, 600.0];
//! let reflectance = vec![0.5, 0.3, 0.2, 0.4, 0.6];
//!
//! let mut engine = ContinuumRemoval::new()
//!     .method(Subtract)
//!     .adapter(Engine)
//!     .build(wavelength, reflectance)?;
//!
//! assert_eq!(engine.stage(), Stage::Uninitialized);
//!
//! // First access runs the hull scan and caches the continuum
//! let continuum = engine.continuum()?.to_vec();
//! assert_eq!(engine.stage(), Stage::HullComputed);
//! assert_eq!(continuum.len(), 5);
//!
//! // First access to the removed spectrum applies the removal method
//! let removed = engine.continuum_removed()?.to_vec();
//! assert_eq!(engine.stage(), Stage::ContinuumRemoved);
//! assert_eq!(removed.len(), 5);
//! # Result::<(), ContinuumError>::Ok(())
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use contrem::prelude::*;
//!
//! let wavelength = vec![400.0, 450.0, 500.0, 550.0, 600.0];
//! let reflectance = vec![0.5, 0.3, 0.2, 0.4, 0.6];
//!
//! let model = ContinuumRemoval::new()
//!     .method(Divide)             // Ratio normalization (band depth)
//!     .on_degenerate(UseSpectrum) // Flat spectra pass through unchanged
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.remove(&wavelength, &reflectance)?;
//! assert_eq!(result.anchor_count(), 2);
//! # Result::<(), ContinuumError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `remove` method returns a `Result<ContinuumResult<T>, ContinuumError>`.
//!
//! - **`Ok(ContinuumResult<T>)`**: Aligned continuum and removed arrays,
//!   plus the hull anchors for overlay plotting.
//! - **`Err(ContinuumError)`**: Indicates a failure (e.g., mismatched input
//!   lengths, insufficient data, collinear point set).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use contrem::prelude::*;
//! # let wavelength = vec![400.0, 450.0, 500.0, 550.0, 600.0];
//! # let reflectance = vec![0.5, 0.3, 0.2, 0.4, 0.6];
//!
//! let model = ContinuumRemoval::new().adapter(Batch).build()?;
//!
//! let result = model.remove(&wavelength, &reflectance)?;
//! // or to be more explicit:
//! // let result: ContinuumResult<f64> = model.remove(&wavelength, &reflectance)?;
//! # Result::<(), ContinuumError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use contrem::prelude::*;
//! # let wavelength = vec![400.0, 450.0, 500.0, 550.0, 600.0];
//! # let reflectance = vec![0.5, 0.3, 0.2, 0.4, 0.6];
//!
//! let model = ContinuumRemoval::new().adapter(Batch).build()?;
//!
//! match model.remove(&wavelength, &reflectance) {
//!     Ok(result) => {
//!         // result is ContinuumResult<f64>
//!         println!("Removed: {:?}", result.removed);
//!     }
//!     Err(e) => {
//!         // e is ContinuumError
//!         eprintln!("Continuum removal failed: {}", e);
//!     }
//! }
//! # Result::<(), ContinuumError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded devices and
//! resource-constrained systems. Disable default features to remove the
//! standard library dependency:
//!
//! ```toml
//! [dependencies]
//! contrem = { version = "0.2", default-features = false }
//! ```
//!
//! **Minimal example for embedded systems:**
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use contrem::prelude::*;
//!
//! // In an embedded context (e.g., on-board spectrometer processing)
//! fn normalize_band(wavelength: &[f32], reflectance: &[f32]) -> Result<(), ContinuumError> {
//!     let model = ContinuumRemoval::new().adapter(Batch).build()?;
//!
//!     let result = model.remove(wavelength, reflectance)?;
//!
//!     // Use aligned arrays (result.continuum, result.removed)
//!     // ...
//!     # let _ = result;
//!
//!     Ok(())
//! }
//! # let wavelength = [400.0_f32, 450.0, 500.0, 550.0, 600.0];
//! # let reflectance = [0.5_f32, 0.3, 0.2, 0.4, 0.6];
//! # normalize_band(&wavelength, &reflectance).unwrap();
//! # }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - The hull scan is O(n) on the sorted spectral grid; no scratch buffers
//!   beyond the output arrays are allocated
//! - Prefer the batch adapter when the cached intermediate products are not
//!   needed
//!
//! ## References
//!
//! - Clark, R. N., & Roush, T. L. (1984). "Reflectance spectroscopy:
//!   Quantitative analysis techniques for remote sensing applications"
//! - Andrew, A. M. (1979). "Another efficient algorithm for convex hulls in
//!   two dimensions"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure geometric functions.
mod math;

// Layer 3: Algorithms - hull, envelope, and resampling.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for continuum removal.
mod api;

// Standard continuum-removal prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Engine},
        ContinuumBuilder as ContinuumRemoval,
        ContinuumEngine, ContinuumError, ContinuumFrame, ContinuumResult, ContinuumSink,
        DegenerateFallback::{Fail, UseSpectrum},
        HullPoint,
        RemovalMethod::{Divide, Subtract},
        Stage,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
