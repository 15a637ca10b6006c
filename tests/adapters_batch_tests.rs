#![cfg(feature = "dev")]
//! Tests for one-shot batch continuum removal.
//!
//! These tests drive the batch adapter through the public builder: spectrum
//! in, complete result out. They cover the numerical behavior of both
//! removal methods, the degenerate-hull policies, and validation surfacing.
//!
//! ## Test Organization
//!
//! 1. **Basic Removal** - Known spectra through the default configuration
//! 2. **Removal Methods** - Subtract and divide variants
//! 3. **Degenerate Policies** - Flat and linear spectra under both policies
//! 4. **Validation** - Input errors surface through the adapter
//! 5. **Reuse** - One processor across spectra and float widths

use approx::assert_relative_eq;

use contrem::internals::adapters::batch::BatchContinuumBuilder;
use contrem::prelude::*;

const WL: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const DIP: [f64; 5] = [1.0, 0.9, 0.7, 0.85, 1.0];

// ============================================================================
// Basic Removal Tests
// ============================================================================

/// Test removal on a spectrum with one absorption dip.
///
/// The flat continuum between equal shoulders makes every value exact.
#[test]
fn test_batch_single_dip() {
    let result = ContinuumRemoval::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&WL, &DIP)
        .unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(result.anchor_count(), 2);
    assert_eq!(result.continuum, vec![1.0; 5]);
    assert!(!result.is_degenerate());

    let expected = [0.0, -0.1, -0.3, -0.15, 0.0];
    for (got, want) in result.removed.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
    assert_eq!(result.deepest_feature(), Some(2));
}

/// Test that the result echoes the input arrays.
///
/// Verifies that wavelength and reflectance ride along for plotting.
#[test]
fn test_batch_result_echoes_input() {
    let result = ContinuumRemoval::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&WL, &DIP)
        .unwrap();

    assert_eq!(result.wavelength, WL.to_vec());
    assert_eq!(result.reflectance, DIP.to_vec());
}

/// Test that anchors are exposed sorted by wavelength.
///
/// Verifies the overlay contract on a spectrum with three anchors.
#[test]
fn test_batch_anchors_sorted() {
    let wavelength = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let reflectance = [1.0f64, 0.8, 0.9, 1.1, 0.85, 0.95, 1.05];

    let result = ContinuumRemoval::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&wavelength, &reflectance)
        .unwrap();

    let anchor_wl: Vec<f64> = result.anchors.iter().map(|p| p.wavelength).collect();
    assert_eq!(anchor_wl, vec![1.0, 4.0, 7.0]);
    for pair in result.anchors.windows(2) {
        assert!(pair[0].wavelength < pair[1].wavelength);
    }
}

/// Test removal on a nanometer-scale absorption band.
///
/// A broad dip under a rising continuum: the continuum is the straight
/// line between the shoulders and the removed spectrum is zero exactly at
/// both ends.
#[test]
fn test_batch_sloped_shoulder_dip() {
    let wavelength = [400.0f64, 450.0, 500.0, 550.0, 600.0];
    let reflectance = [0.5f64, 0.3, 0.2, 0.4, 0.6];

    let result = ContinuumRemoval::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&wavelength, &reflectance)
        .unwrap();

    assert_eq!(result.anchor_count(), 2);

    let continuum = [0.5, 0.525, 0.55, 0.575, 0.6];
    let removed = [0.0, -0.225, -0.35, -0.175, 0.0];
    for i in 0..5 {
        assert_relative_eq!(result.continuum[i], continuum[i], epsilon = 1e-12);
        assert_relative_eq!(result.removed[i], removed[i], epsilon = 1e-12);
    }

    // The continuum clamps to the anchors at the range ends
    assert_eq!(result.removed[0], 0.0);
    assert_eq!(result.removed[4], 0.0);
}

// ============================================================================
// Removal Method Tests
// ============================================================================

/// Test ratio removal through the builder.
///
/// With a unit continuum the removed spectrum equals the input.
#[test]
fn test_batch_divide() {
    let result = ContinuumRemoval::new()
        .method(Divide)
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&WL, &DIP)
        .unwrap();

    assert_eq!(result.removed, DIP.to_vec());
}

/// Test that the configured method is recorded on the result.
///
/// Verifies the provenance field used by display and downstream tools.
#[test]
fn test_batch_method_recorded() {
    let processor = ContinuumRemoval::new()
        .method(Divide)
        .adapter(Batch)
        .build()
        .unwrap();
    let result = processor.remove(&WL, &DIP).unwrap();

    assert_eq!(result.method, Divide);
}

/// Test band-depth normalization on a sloped continuum.
///
/// Verifies that division rescales against the local continuum level.
#[test]
fn test_batch_divide_sloped_continuum() {
    // Shoulders at different heights tilt the continuum
    let wavelength = [1.0f64, 2.0, 3.0];
    let reflectance = [1.0f64, 0.5, 2.0];

    let result = ContinuumRemoval::new()
        .method(Divide)
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&wavelength, &reflectance)
        .unwrap();

    // Continuum is the chord from (1, 1) to (3, 2)
    assert_eq!(result.continuum, vec![1.0, 1.5, 2.0]);
    assert_relative_eq!(result.removed[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.removed[1], 0.5 / 1.5, epsilon = 1e-12);
    assert_relative_eq!(result.removed[2], 1.0, epsilon = 1e-12);
}

// ============================================================================
// Degenerate Policy Tests
// ============================================================================

/// Test a flat spectrum under the default policy.
///
/// Verifies that the degenerate hull surfaces as an error.
#[test]
fn test_batch_flat_spectrum_fails() {
    let flat = [0.5f64; 5];

    let err = ContinuumRemoval::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&WL, &flat)
        .unwrap_err();

    assert_eq!(err, ContinuumError::DegenerateHull { vertices: 2 });
}

/// Test the spectrum-as-continuum fallback.
///
/// Verifies the identity outputs and the degenerate flag.
#[test]
fn test_batch_degenerate_fallback() {
    let flat = [0.5f64; 5];

    let result = ContinuumRemoval::new()
        .on_degenerate(UseSpectrum)
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&WL, &flat)
        .unwrap();

    assert!(result.is_degenerate());
    assert_eq!(result.continuum, flat.to_vec());
    assert_eq!(result.removed, vec![0.0; 5]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that input validation runs before any geometry.
///
/// Verifies each error class surfaces through the adapter.
#[test]
fn test_batch_validation_errors() {
    let processor = ContinuumRemoval::new().adapter(Batch).build().unwrap();

    let empty: [f64; 0] = [];
    assert_eq!(
        processor.remove(&empty, &empty).unwrap_err(),
        ContinuumError::EmptyInput
    );

    assert_eq!(
        processor.remove(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err(),
        ContinuumError::MismatchedInputs {
            wavelength_len: 3,
            reflectance_len: 2,
        }
    );

    assert_eq!(
        processor.remove(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err(),
        ContinuumError::InsufficientData { got: 2, min: 3 }
    );

    assert_eq!(
        processor
            .remove(&[1.0, 3.0, 2.0], &[1.0, 2.0, 3.0])
            .unwrap_err(),
        ContinuumError::NonMonotonicWavelength { index: 2 }
    );
}

/// Test duplicate parameter detection.
///
/// Verifies that setting the same parameter twice fails at build time.
#[test]
fn test_batch_duplicate_parameter() {
    let err = ContinuumRemoval::new()
        .method(Subtract)
        .method(Divide)
        .adapter(Batch)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ContinuumError::DuplicateParameter {
            parameter: "method"
        }
    );
}

/// Test the standalone batch builder.
///
/// Verifies that the adapter-level builder works without the API wrapper.
#[test]
fn test_batch_builder_direct() {
    let result = BatchContinuumBuilder::default()
        .method(Divide)
        .build()
        .unwrap()
        .remove(&WL, &DIP)
        .unwrap();

    assert_eq!(result.method, Divide);
}

// ============================================================================
// Reuse Tests
// ============================================================================

/// Test one processor across several spectra.
///
/// Verifies that removal borrows the processor and stays deterministic.
#[test]
fn test_batch_processor_reusable() {
    let processor = ContinuumRemoval::new().adapter(Batch).build().unwrap();

    let first = processor.remove(&WL, &DIP).unwrap();
    let second = processor.remove(&WL, &DIP).unwrap();

    assert_eq!(first, second);
}

/// Test the f32 path end to end.
///
/// Verifies that the whole pipeline is generic over float width.
#[test]
fn test_batch_f32() {
    let wavelength = [1.0f32, 2.0, 3.0, 4.0, 5.0];
    let reflectance = [1.0f32, 0.9, 0.7, 0.85, 1.0];

    let result = ContinuumRemoval::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&wavelength, &reflectance)
        .unwrap();

    assert_eq!(result.anchor_count(), 2);
    assert_relative_eq!(result.removed[2], -0.3f32, epsilon = 1e-6);
}
