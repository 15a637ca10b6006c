//! Upper-boundary extraction from a convex hull.
//!
//! ## Purpose
//!
//! This module selects the upper boundary of a convex hull and normalizes it
//! into the anchor sequence the continuum is interpolated from. Only the
//! vertices above the spectrum matter for continuum removal; the lower chain
//! is discarded here.
//!
//! ## Design notes
//!
//! * **Chain walk**: The hull arrives in counterclockwise order starting at
//!   the leftmost vertex, so the upper boundary is the stretch from the
//!   rightmost vertex back around to the start. Walking it in reverse yields
//!   anchors already sorted by wavelength.
//! * **Duplicate guard**: Anchors sharing a wavelength are collapsed to the
//!   one with maximum reflectance. The monotone chain cannot produce such
//!   duplicates from a strict grid, but the interpolation contract requires
//!   strictly increasing anchor wavelengths, so the guard stays.
//!
//! ## Key concepts
//!
//! * **Anchor**: An upper-boundary vertex; the continuum passes through every
//!   anchor exactly.
//! * **Envelope property**: Between anchors the continuum lies on a hull
//!   edge, hence on or above every spectrum sample.
//!
//! ## Invariants
//!
//! * The first anchor is the leftmost hull vertex and the last is the
//!   rightmost, so the anchors span the full wavelength range.
//! * Returned anchors have strictly increasing wavelengths.
//!
//! ## Non-goals
//!
//! * This module does not interpolate anchors onto the spectral grid.
//! * This module does not detect hull degeneracy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::HullPoint;

// ============================================================================
// Upper-Boundary Selection
// ============================================================================

/// Extract the upper boundary of a counterclockwise hull, sorted by
/// ascending wavelength.
///
/// The hull starts at the leftmost vertex and traces the lower chain first,
/// so the upper chain occupies the tail of the vertex list: from the
/// rightmost vertex to the end, wrapping back to the start vertex. Reversing
/// that stretch gives the boundary left-to-right.
pub fn upper_boundary<T: Float>(hull: &[HullPoint<T>]) -> Vec<HullPoint<T>> {
    if hull.len() < 3 {
        return hull.to_vec();
    }

    // Locate the rightmost vertex, where the upper chain begins
    let mut hi = 0;
    for (i, p) in hull.iter().enumerate() {
        if p.wavelength > hull[hi].wavelength {
            hi = i;
        }
    }

    // Leftmost vertex first, then the upper chain walked right-to-left
    let mut boundary = Vec::with_capacity(hull.len() - hi + 1);
    boundary.push(hull[0]);
    for i in (hi..hull.len()).rev() {
        boundary.push(hull[i]);
    }
    boundary
}

// ============================================================================
// Duplicate-Wavelength Collapse
// ============================================================================

/// Collapse anchors sharing a wavelength, keeping the maximum reflectance.
///
/// Input must already be sorted by wavelength. The continuum is an upper
/// envelope, so when two candidate anchors coincide horizontally only the
/// higher one can lie on it.
pub fn collapse_by_wavelength<T: Float>(anchors: Vec<HullPoint<T>>) -> Vec<HullPoint<T>> {
    let mut collapsed: Vec<HullPoint<T>> = Vec::with_capacity(anchors.len());

    for p in anchors {
        match collapsed.last_mut() {
            Some(last) if last.wavelength == p.wavelength => {
                if p.reflectance > last.reflectance {
                    last.reflectance = p.reflectance;
                }
            }
            _ => collapsed.push(p),
        }
    }

    collapsed
}
