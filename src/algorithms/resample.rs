//! Piecewise-linear resampling of anchors onto the spectral grid.
//!
//! ## Purpose
//!
//! This module evaluates the continuum at every wavelength of the original
//! grid by linear interpolation between consecutive anchors. The result is a
//! continuum array aligned sample-for-sample with the input spectrum.
//!
//! ## Design notes
//!
//! * **Clamping**: Grid wavelengths at or outside the anchor range take the
//!   nearest anchor's reflectance. The anchors span the grid by construction,
//!   so clamping only ever fires at the exact endpoints; the continuum is
//!   never extrapolated.
//! * **Two-pointer sweep**: Grid and anchors are both sorted ascending, so a
//!   single forward pass over each suffices: O(n + k) for n grid samples and
//!   k anchors.
//! * **Anchor exactness**: A grid wavelength equal to an anchor wavelength
//!   evaluates to that anchor's reflectance (interpolation weight lands on 0
//!   or 1, not between).
//!
//! ## Key concepts
//!
//! * **Segment**: The span between two consecutive anchors; the continuum is
//!   a straight line over each segment.
//! * **Alignment**: `output[i]` is the continuum value at `grid[i]`.
//!
//! ## Invariants
//!
//! * Anchor wavelengths are strictly increasing; at least one anchor exists.
//! * The grid is sorted ascending.
//! * Output length equals grid length.
//!
//! ## Non-goals
//!
//! * This module does not build anchors or subtract the continuum.
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::HullPoint;

// ============================================================================
// Grid Resampling
// ============================================================================

/// Evaluate the piecewise-linear curve through `anchors` at every grid
/// wavelength.
///
/// # Special cases
///
/// * **Single anchor**: Every output sample takes its reflectance.
/// * **Out-of-range grid values**: Clamped to the nearest anchor.
pub fn resample_to_grid<T: Float>(anchors: &[HullPoint<T>], grid: &[T]) -> Vec<T> {
    let mut continuum = Vec::with_capacity(grid.len());
    let last = anchors.len() - 1;

    // Current segment start; advances monotonically with the grid sweep
    let mut seg = 0;

    for &w in grid {
        // Clamp at or before the first anchor
        if w <= anchors[0].wavelength {
            continuum.push(anchors[0].reflectance);
            continue;
        }

        // Clamp at or after the last anchor
        if w >= anchors[last].wavelength {
            continuum.push(anchors[last].reflectance);
            continue;
        }

        // Advance to the segment containing w
        while anchors[seg + 1].wavelength < w {
            seg += 1;
        }

        let a = anchors[seg];
        let b = anchors[seg + 1];

        // Linear interpolation: y = y0 + alpha * (y1 - y0)
        let alpha = (w - a.wavelength) / (b.wavelength - a.wavelength);
        continuum.push(a.reflectance + alpha * (b.reflectance - a.reflectance));
    }

    continuum
}
