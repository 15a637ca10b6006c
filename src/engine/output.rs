//! Output types and result structures for continuum-removal operations.
//!
//! ## Purpose
//!
//! This module defines the `ContinuumResult` struct which carries all
//! outputs of a continuum-removal run, the borrowed `ContinuumFrame` view,
//! and the `ContinuumSink` collaborator trait that plotting and reporting
//! tools implement.
//!
//! ## Design notes
//!
//! * **Alignment**: All arrays share the input grid's length and ordering.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Hand-off by reference**: Sinks receive shared borrows through
//!   `ContinuumFrame` and cannot mutate the arrays.
//!
//! ## Key concepts
//!
//! * **Anchors**: The upper-boundary vertices, exposed for hull overlays.
//! * **Sink**: An external consumer of the computed arrays. The library
//!   ships only the trait; concrete sinks (plotting, CSV) live with the
//!   caller.
//!
//! ## Invariants
//!
//! * `wavelength`, `reflectance`, `continuum`, and `removed` have equal
//!   lengths.
//! * Anchor wavelengths are strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not implement any concrete sink.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::RemovalMethod;
use crate::primitives::point::HullPoint;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete continuum-removal output for one spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuumResult<T> {
    /// Input wavelength grid.
    pub wavelength: Vec<T>,

    /// Input reflectance values.
    pub reflectance: Vec<T>,

    /// Continuum evaluated at every input wavelength.
    pub continuum: Vec<T>,

    /// Continuum-removed spectrum.
    pub removed: Vec<T>,

    /// Upper-boundary hull vertices, sorted by ascending wavelength.
    pub anchors: Vec<HullPoint<T>>,

    /// Removal method that produced `removed`.
    pub method: RemovalMethod,

    /// Whether the degenerate fallback was taken (collinear input).
    pub degenerate: bool,
}

impl<T: Float> ContinuumResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of spectral samples.
    pub fn len(&self) -> usize {
        self.wavelength.len()
    }

    /// Whether the result holds no samples.
    pub fn is_empty(&self) -> bool {
        self.wavelength.is_empty()
    }

    /// Number of continuum anchors.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Whether the spectrum was used as its own continuum.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Index of the deepest absorption sample (minimum removed value).
    pub fn deepest_feature(&self) -> Option<usize> {
        self.removed
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(i, _)| i)
    }

    /// Borrowed, aligned view of the arrays for hand-off to a sink.
    pub fn frame(&self) -> ContinuumFrame<'_, T> {
        ContinuumFrame {
            wavelength: &self.wavelength,
            reflectance: &self.reflectance,
            continuum: &self.continuum,
            removed: &self.removed,
            anchors: &self.anchors,
        }
    }

    /// Hand the aligned arrays to a sink.
    pub fn publish<S: ContinuumSink<T>>(&self, sink: &mut S) {
        sink.accept(self.frame());
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ContinuumResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Anchors:     {}", self.anchor_count())?;
        writeln!(f, "  Method:      {:?}", self.method)?;

        if self.degenerate {
            writeln!(f, "  Degenerate:  spectrum used as its own continuum")?;
        }
        writeln!(f)?;

        writeln!(f, "Continuum-Removed Data:")?;

        // Header
        writeln!(
            f,
            "{:>10} {:>12} {:>12} {:>12}",
            "Wavelength", "Reflectance", "Continuum", "Removed"
        )?;
        writeln!(f, "{:-<width$}", "", width = 49)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>10.2} {:>12.6} {:>12.6} {:>12.6}",
                self.wavelength[idx], self.reflectance[idx], self.continuum[idx], self.removed[idx]
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Collaborator Seam
// ============================================================================

/// Borrowed view of one continuum-removal result, aligned to the input grid.
///
/// Every slice has the input length except `anchors`, which lists the hull
/// vertices the continuum was interpolated from.
#[derive(Debug, Clone, Copy)]
pub struct ContinuumFrame<'a, T> {
    /// Input wavelength grid.
    pub wavelength: &'a [T],

    /// Input reflectance values.
    pub reflectance: &'a [T],

    /// Continuum evaluated at every input wavelength.
    pub continuum: &'a [T],

    /// Continuum-removed spectrum.
    pub removed: &'a [T],

    /// Upper-boundary hull vertices, for overlay rendering.
    pub anchors: &'a [HullPoint<T>],
}

/// External consumer of computed continuum arrays.
///
/// Plotting and reporting collaborators implement this trait; the engine
/// never renders anything itself. The frame's shared borrows keep sinks
/// from mutating the result arrays.
pub trait ContinuumSink<T> {
    /// Receive one result frame.
    fn accept(&mut self, frame: ContinuumFrame<'_, T>);
}
