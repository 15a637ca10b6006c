//! Convex hull construction for spectral point sets.
//!
//! ## Purpose
//!
//! This module builds the convex hull of a (wavelength, reflectance) point
//! set using Andrew's monotone chain scan. The hull is the geometric core of
//! continuum removal: its upper boundary is the continuum.
//!
//! ## Design notes
//!
//! * **Presorted input**: The scan requires points sorted by ascending
//!   wavelength. The spectral grid is validated as strictly increasing
//!   upstream, so no sorting pass is needed here.
//! * **Strict convexity**: Collinear points are pruned during the scan, so
//!   every returned vertex is a corner of the hull.
//! * **Complexity**: O(n) on sorted input; each point is pushed and popped at
//!   most once per chain.
//!
//! ## Key concepts
//!
//! * **Monotone chain**: Builds the lower chain left-to-right and the upper
//!   chain right-to-left, then concatenates them.
//! * **Counterclockwise order**: The returned vertices start at the leftmost
//!   point and trace the hull counterclockwise (lower boundary first).
//!
//! ## Invariants
//!
//! * Input points are sorted by strictly increasing wavelength.
//! * A non-degenerate hull has at least 3 vertices; a collinear point set
//!   collapses to its 2 extreme points.
//! * Consecutive hull vertices always make a counterclockwise turn.
//!
//! ## Non-goals
//!
//! * This module does not select the upper boundary or interpolate it.
//! * This module does not validate its input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::orientation::cross;
use crate::primitives::point::HullPoint;

// ============================================================================
// Monotone Chain Scan
// ============================================================================

/// Compute the convex hull of points sorted by ascending wavelength.
///
/// Returns the hull vertices in counterclockwise order, starting at the
/// leftmost point. Collinear points are dropped, so a fully collinear input
/// yields only the two extreme points.
///
/// # Algorithm
///
/// 1. Sweep left-to-right, popping vertices that no longer make a
///    counterclockwise turn, to build the lower chain.
/// 2. Sweep right-to-left the same way to build the upper chain.
/// 3. Drop the duplicated chain endpoints and concatenate.
pub fn monotone_chain<T: Float>(points: &[HullPoint<T>]) -> Vec<HullPoint<T>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    // Lower chain: left to right, keeping counterclockwise turns only
    let mut lower: Vec<HullPoint<T>> = Vec::with_capacity(n);
    for &p in points {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= T::zero()
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Upper chain: right to left, same turn condition
    let mut upper: Vec<HullPoint<T>> = Vec::with_capacity(n);
    for &p in points.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= T::zero()
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends where the other begins; drop the duplicates
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

// ============================================================================
// Degeneracy Check
// ============================================================================

/// Whether a hull is degenerate (fewer than 3 vertices).
///
/// A collinear point set collapses to its 2 extreme points during the scan,
/// leaving no enclosed area and no distinct upper boundary.
#[inline]
pub fn is_degenerate<T>(hull: &[HullPoint<T>]) -> bool {
    hull.len() < 3
}
