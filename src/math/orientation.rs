//! Orientation predicates for planar hull construction.
//!
//! ## Purpose
//!
//! This module provides the cross-product test that decides whether three
//! points make a left turn, a right turn, or lie on a common line. The hull
//! scan is driven entirely by this predicate.
//!
//! ## Design notes
//!
//! * **Sign convention**: A positive cross product means the sweep from
//!   `o -> a` to `o -> b` turns counterclockwise (a left turn).
//! * **Floating-point**: The predicate is evaluated in the working float type
//!   with no exact-arithmetic fallback. Spectral grids are well-conditioned,
//!   so adaptive precision is not needed here.
//!
//! ## Key concepts
//!
//! * **Cross product**: The z-component of `(a - o) x (b - o)`; its magnitude
//!   is twice the signed area of the triangle `o a b`.
//! * **Turn direction**: The discretized sign of the cross product.
//!
//! ## Invariants
//!
//! * `cross(o, a, b) == -cross(o, b, a)` up to floating-point rounding.
//! * Exactly collinear points yield a cross product of zero.
//!
//! ## Non-goals
//!
//! * This module does not implement the hull scan itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::HullPoint;

// ============================================================================
// Turn Direction
// ============================================================================

/// Direction of the turn made by three consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counterclockwise (left) turn; positive cross product.
    CounterClockwise,

    /// Clockwise (right) turn; negative cross product.
    Clockwise,

    /// No turn; the three points are collinear.
    Collinear,
}

// ============================================================================
// Orientation Functions
// ============================================================================

/// Z-component of the cross product `(a - o) x (b - o)`.
///
/// Positive when `o -> a -> b` turns counterclockwise, negative when it turns
/// clockwise, and zero when the three points are collinear.
#[inline]
pub fn cross<T: Float>(o: HullPoint<T>, a: HullPoint<T>, b: HullPoint<T>) -> T {
    (a.wavelength - o.wavelength) * (b.reflectance - o.reflectance)
        - (a.reflectance - o.reflectance) * (b.wavelength - o.wavelength)
}

/// Classify the turn made by `o -> a -> b`.
#[inline]
pub fn turn<T: Float>(o: HullPoint<T>, a: HullPoint<T>, b: HullPoint<T>) -> Turn {
    let c = cross(o, a, b);
    if c > T::zero() {
        Turn::CounterClockwise
    } else if c < T::zero() {
        Turn::Clockwise
    } else {
        Turn::Collinear
    }
}
