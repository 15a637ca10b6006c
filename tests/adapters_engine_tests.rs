#![cfg(feature = "dev")]
//! Tests for the staged per-spectrum continuum engine.
//!
//! These tests verify the explicit lifecycle: a spectrum is loaded once,
//! the hull and continuum are derived lazily on first request, and every
//! later request is served from the cache.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Validation at build time
//! 2. **Stage Transitions** - Uninitialized, hull, and removed stages
//! 3. **Caching** - Derived products are computed once
//! 4. **Parity** - The staged path matches the batch path
//! 5. **Degenerate Spectra** - Policy behavior and error repeatability

use approx::assert_relative_eq;

use contrem::prelude::*;

const WL: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const DIP: [f64; 5] = [1.0, 0.9, 0.7, 0.85, 1.0];

fn dip_engine() -> ContinuumEngine<f64> {
    ContinuumRemoval::new()
        .adapter(Engine)
        .build(WL.to_vec(), DIP.to_vec())
        .unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that the engine stores the spectrum on construction.
///
/// Verifies the input accessors and the initial stage.
#[test]
fn test_engine_construction() {
    let engine = dip_engine();

    assert_eq!(engine.stage(), Stage::Uninitialized);
    assert_eq!(engine.wavelength(), &WL);
    assert_eq!(engine.reflectance(), &DIP);
}

/// Test that invalid spectra are rejected at build time.
///
/// Verifies that validation runs before the engine exists.
#[test]
fn test_engine_build_validates() {
    let err = ContinuumRemoval::new()
        .adapter(Engine)
        .build(Vec::<f64>::new(), Vec::new())
        .unwrap_err();
    assert_eq!(err, ContinuumError::EmptyInput);

    let err = ContinuumRemoval::new()
        .adapter(Engine)
        .build(vec![1.0, 2.0], vec![0.5, 0.6])
        .unwrap_err();
    assert_eq!(err, ContinuumError::InsufficientData { got: 2, min: 3 });
}

/// Test duplicate parameter detection at build time.
///
/// Verifies the same guard the batch adapter applies.
#[test]
fn test_engine_duplicate_parameter() {
    let err = ContinuumRemoval::new()
        .on_degenerate(Fail)
        .on_degenerate(UseSpectrum)
        .adapter(Engine)
        .build(WL.to_vec(), DIP.to_vec())
        .unwrap_err();

    assert_eq!(
        err,
        ContinuumError::DuplicateParameter {
            parameter: "on_degenerate"
        }
    );
}

// ============================================================================
// Stage Transition Tests
// ============================================================================

/// Test the hull stage transition.
///
/// Verifies that any hull-level request advances exactly one stage.
#[test]
fn test_stage_advances_on_continuum() {
    let mut engine = dip_engine();

    let continuum = engine.continuum().unwrap().to_vec();
    assert_eq!(continuum, vec![1.0; 5]);
    assert_eq!(engine.stage(), Stage::HullComputed);
}

/// Test that hull-level queries stay in the hull stage.
///
/// Anchors and the degeneracy flag must not trigger the removal step.
#[test]
fn test_hull_queries_do_not_advance() {
    let mut engine = dip_engine();

    let anchors = engine.anchors().unwrap().to_vec();
    assert_eq!(anchors.len(), 2);
    assert_eq!(anchors[0].wavelength, 1.0);
    assert_eq!(anchors[1].wavelength, 5.0);

    assert!(!engine.is_degenerate().unwrap());
    assert_eq!(engine.stage(), Stage::HullComputed);
}

/// Test the removal stage transition.
///
/// Verifies that the removed spectrum is derived from the cached continuum.
#[test]
fn test_stage_advances_on_removal() {
    let mut engine = dip_engine();

    let removed = engine.continuum_removed().unwrap().to_vec();
    assert_eq!(engine.stage(), Stage::ContinuumRemoved);

    let expected = [0.0, -0.1, -0.3, -0.15, 0.0];
    for (got, want) in removed.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
}

/// Test skipping straight to the removed spectrum.
///
/// Verifies that the hull stage is passed through implicitly.
#[test]
fn test_removal_from_uninitialized() {
    let mut engine = dip_engine();

    assert_eq!(engine.stage(), Stage::Uninitialized);
    engine.continuum_removed().unwrap();
    assert_eq!(engine.stage(), Stage::ContinuumRemoved);
}

/// Test hull queries after the final stage.
///
/// Verifies that earlier products stay available once removal has run.
#[test]
fn test_hull_products_survive_removal() {
    let mut engine = dip_engine();

    engine.continuum_removed().unwrap();
    assert_eq!(engine.continuum().unwrap(), vec![1.0; 5].as_slice());
    assert_eq!(engine.anchors().unwrap().len(), 2);
    assert_eq!(engine.stage(), Stage::ContinuumRemoved);
}

// ============================================================================
// Caching Tests
// ============================================================================

/// Test that repeated requests return identical arrays.
///
/// Verifies cache stability across calls.
#[test]
fn test_repeated_requests_identical() {
    let mut engine = dip_engine();

    let first = engine.continuum().unwrap().to_vec();
    let second = engine.continuum().unwrap().to_vec();
    assert_eq!(first, second);

    let removed_first = engine.continuum_removed().unwrap().to_vec();
    let removed_second = engine.continuum_removed().unwrap().to_vec();
    assert_eq!(removed_first, removed_second);
}

// ============================================================================
// Parity Tests
// ============================================================================

/// Test that the staged engine matches the batch adapter.
///
/// Verifies that both execution paths produce the same result.
#[test]
fn test_engine_matches_batch() {
    let mut engine = dip_engine();
    let staged = engine.result().unwrap();

    let batch = ContinuumRemoval::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .remove(&WL, &DIP)
        .unwrap();

    assert_eq!(staged, batch);
    assert_eq!(engine.stage(), Stage::ContinuumRemoved);
}

/// Test publishing from the engine.
///
/// Verifies the sink hand-off carries the cached arrays and advances the
/// lifecycle.
#[test]
fn test_engine_publish() {
    struct CountingSink {
        calls: usize,
        samples: usize,
        anchors: usize,
    }

    impl ContinuumSink<f64> for CountingSink {
        fn accept(&mut self, frame: ContinuumFrame<'_, f64>) {
            self.calls += 1;
            self.samples = frame.removed.len();
            self.anchors = frame.anchors.len();
        }
    }

    let mut engine = dip_engine();
    let mut sink = CountingSink {
        calls: 0,
        samples: 0,
        anchors: 0,
    };

    engine.publish(&mut sink).unwrap();

    assert_eq!(sink.calls, 1);
    assert_eq!(sink.samples, 5);
    assert_eq!(sink.anchors, 2);
    assert_eq!(engine.stage(), Stage::ContinuumRemoved);
}

// ============================================================================
// Degenerate Spectrum Tests
// ============================================================================

/// Test a flat spectrum under the default policy.
///
/// The spectrum itself is valid, so the error must wait for the hull stage.
#[test]
fn test_engine_flat_spectrum_fails_lazily() {
    let flat = vec![0.5f64; 5];
    let mut engine = ContinuumRemoval::new()
        .adapter(Engine)
        .build(WL.to_vec(), flat)
        .unwrap();

    assert_eq!(engine.stage(), Stage::Uninitialized);
    assert_eq!(
        engine.continuum().unwrap_err(),
        ContinuumError::DegenerateHull { vertices: 2 }
    );

    // The failed transition leaves the engine where it was, and the error
    // is reproducible
    assert_eq!(engine.stage(), Stage::Uninitialized);
    assert!(engine.continuum_removed().is_err());
}

/// Test the spectrum-as-continuum fallback in the engine.
///
/// Verifies the degeneracy flag and identity outputs.
#[test]
fn test_engine_degenerate_fallback() {
    let flat = vec![0.5f64; 5];
    let mut engine = ContinuumRemoval::new()
        .on_degenerate(UseSpectrum)
        .adapter(Engine)
        .build(WL.to_vec(), flat.clone())
        .unwrap();

    assert!(engine.is_degenerate().unwrap());
    assert_eq!(engine.continuum().unwrap(), flat.as_slice());
    assert_eq!(engine.continuum_removed().unwrap(), vec![0.0; 5].as_slice());
}
