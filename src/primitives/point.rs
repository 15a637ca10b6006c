//! Spectral point representation for hull geometry.
//!
//! ## Purpose
//!
//! This module defines the (wavelength, reflectance) point type shared by the
//! hull construction, envelope extraction, and resampling stages.
//!
//! ## Design notes
//!
//! * **Plain data**: `HullPoint` is `Copy` and field-public; it carries no behavior
//!   beyond construction and tuple conversion.
//! * **Axis naming**: Fields are named for the spectral domain (`wavelength`,
//!   `reflectance`) rather than generic `x`/`y`, so call sites stay unambiguous.
//!
//! ## Key concepts
//!
//! 1. **Hull vertex**: A point retained by the convex hull scan.
//! 2. **Continuum anchor**: A hull vertex on the upper boundary; the continuum
//!    is interpolated between consecutive anchors.
//!
//! ## Invariants
//!
//! * Points are only constructed from finite coordinates; validation happens
//!   upstream before geometry runs.
//!
//! ## Non-goals
//!
//! * This module does not perform any geometric computation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// A single (wavelength, reflectance) sample treated as a planar point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullPoint<T> {
    /// Wavelength coordinate (the horizontal axis).
    pub wavelength: T,

    /// Reflectance coordinate (the vertical axis).
    pub reflectance: T,
}

// ============================================================================
// Constructors and Conversions
// ============================================================================

impl<T: Float> HullPoint<T> {
    /// Create a point from its two coordinates.
    #[inline]
    pub fn new(wavelength: T, reflectance: T) -> Self {
        Self {
            wavelength,
            reflectance,
        }
    }
}

impl<T: Float> From<(T, T)> for HullPoint<T> {
    #[inline]
    fn from((wavelength, reflectance): (T, T)) -> Self {
        Self {
            wavelength,
            reflectance,
        }
    }
}

impl<T: Float> From<HullPoint<T>> for (T, T) {
    #[inline]
    fn from(p: HullPoint<T>) -> (T, T) {
        (p.wavelength, p.reflectance)
    }
}
