//! Error types for continuum-removal operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while extracting
//! a continuum, covering input validation, hull degeneracy, and builder
//! misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Insufficient data**: Fewer than three distinct points leaves the planar hull undefined.
//! 2. **Degenerate geometry**: An all-collinear point set yields a zero-area hull.
//! 3. **Caller misuse**: Empty arrays, mismatched lengths, non-finite values, and
//!    non-monotonic wavelength grids are invalid input, rejected up front.
//! 4. **Builder misuse**: A parameter configured more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for continuum-removal operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ContinuumError {
    /// Input arrays are empty.
    EmptyInput,

    /// Wavelength and reflectance arrays must have the same number of samples.
    MismatchedInputs {
        /// Number of wavelength samples.
        wavelength_len: usize,
        /// Number of reflectance samples.
        reflectance_len: usize,
    },

    /// Fewer distinct points than the planar hull requires.
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Wavelength samples must be strictly increasing.
    NonMonotonicWavelength {
        /// Index of the first sample that does not exceed its predecessor.
        index: usize,
    },

    /// The point set is collinear; the hull has zero area and no usable
    /// upper boundary.
    DegenerateHull {
        /// Number of distinct hull vertices found.
        vertices: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ContinuumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs {
                wavelength_len,
                reflectance_len,
            } => {
                write!(
                    f,
                    "Length mismatch: wavelength has {wavelength_len} samples, reflectance has {reflectance_len}"
                )
            }
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} points, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NonMonotonicWavelength { index } => {
                write!(
                    f,
                    "Wavelength must be strictly increasing: violation at index {index}"
                )
            }
            Self::DegenerateHull { vertices } => {
                write!(
                    f,
                    "Degenerate hull: all points collinear ({vertices} distinct vertices, need 3)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ContinuumError {}
