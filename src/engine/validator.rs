//! Input validation for continuum-removal configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation for spectral input data and builder
//! configuration. It checks requirements such as array lengths, finite
//! values, and strict wavelength ordering before any geometry runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Hull requirements**: At least 3 points are needed for a planar hull.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Strict monotonicity**: The wavelength grid must be strictly
//!   increasing; this is what makes every point distinct and keeps the
//!   interpolation axis well defined.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the hull computation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ContinuumError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for continuum-removal configuration and input data.
///
/// Provides static methods for validating spectral input and builder state.
/// All methods return `Result<(), ContinuumError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a spectrum for continuum removal.
    pub fn validate_spectrum<T: Float>(
        wavelength: &[T],
        reflectance: &[T],
    ) -> Result<(), ContinuumError> {
        // Check 1: Non-empty arrays
        if wavelength.is_empty() || reflectance.is_empty() {
            return Err(ContinuumError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = wavelength.len();
        if n != reflectance.len() {
            return Err(ContinuumError::MismatchedInputs {
                wavelength_len: n,
                reflectance_len: reflectance.len(),
            });
        }

        // Check 3: Enough points for a planar hull
        if n < 3 {
            return Err(ContinuumError::InsufficientData { got: n, min: 3 });
        }

        // Check 4: All values finite
        for i in 0..n {
            if !wavelength[i].is_finite() {
                return Err(ContinuumError::InvalidNumericValue(format!(
                    "wavelength[{}]={}",
                    i,
                    wavelength[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !reflectance[i].is_finite() {
                return Err(ContinuumError::InvalidNumericValue(format!(
                    "reflectance[{}]={}",
                    i,
                    reflectance[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 5: Strictly increasing wavelength grid
        // (runs after the finite check so NaN cannot slip through comparison)
        for i in 1..n {
            if wavelength[i] <= wavelength[i - 1] {
                return Err(ContinuumError::NonMonotonicWavelength { index: i });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ContinuumError> {
        if let Some(param) = duplicate_param {
            return Err(ContinuumError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
