#![cfg(feature = "dev")]
//! Tests for the continuum-removal result type and collaborator seam.
//!
//! These tests verify the `ContinuumResult` query methods, the borrowed
//! `ContinuumFrame` view, sink hand-off, and the human-readable display
//! format.
//!
//! ## Test Organization
//!
//! 1. **Query Methods** - Lengths, anchor counts, and feature lookup
//! 2. **Frames and Sinks** - Borrowed hand-off to collaborators
//! 3. **Display** - Summary lines, table, and row elision

use contrem::internals::engine::executor::RemovalMethod;
use contrem::internals::engine::output::{ContinuumFrame, ContinuumResult, ContinuumSink};
use contrem::internals::primitives::point::HullPoint;

fn dip_result() -> ContinuumResult<f64> {
    ContinuumResult {
        wavelength: vec![1.0, 2.0, 3.0, 4.0, 5.0],
        reflectance: vec![1.0, 0.9, 0.7, 0.85, 1.0],
        continuum: vec![1.0; 5],
        removed: vec![0.0, -0.1, -0.3, -0.15, 0.0],
        anchors: vec![HullPoint::new(1.0, 1.0), HullPoint::new(5.0, 1.0)],
        method: RemovalMethod::Subtract,
        degenerate: false,
    }
}

// ============================================================================
// Query Method Tests
// ============================================================================

/// Test the basic size queries.
///
/// Verifies sample and anchor counts.
#[test]
fn test_result_sizes() {
    let result = dip_result();

    assert_eq!(result.len(), 5);
    assert!(!result.is_empty());
    assert_eq!(result.anchor_count(), 2);
    assert!(!result.is_degenerate());
}

/// Test the deepest-feature lookup.
///
/// Verifies that the index of the minimum removed value is returned.
#[test]
fn test_deepest_feature() {
    let result = dip_result();

    assert_eq!(result.deepest_feature(), Some(2));
}

/// Test the deepest-feature lookup on a tie.
///
/// Verifies that the first of equally deep samples wins.
#[test]
fn test_deepest_feature_tie() {
    let mut result = dip_result();
    result.removed = vec![-0.5, -0.5, 0.0, 0.0, 0.0];

    assert_eq!(result.deepest_feature(), Some(0));
}

/// Test the deepest-feature lookup on an empty result.
///
/// Verifies that emptiness maps to `None`.
#[test]
fn test_deepest_feature_empty() {
    let result = ContinuumResult::<f64> {
        wavelength: vec![],
        reflectance: vec![],
        continuum: vec![],
        removed: vec![],
        anchors: vec![],
        method: RemovalMethod::Subtract,
        degenerate: false,
    };

    assert!(result.is_empty());
    assert_eq!(result.deepest_feature(), None);
}

// ============================================================================
// Frame and Sink Tests
// ============================================================================

/// Test the borrowed frame view.
///
/// Verifies that every slice aliases the result's own arrays.
#[test]
fn test_frame_borrows_arrays() {
    let result = dip_result();
    let frame = result.frame();

    assert_eq!(frame.wavelength, result.wavelength.as_slice());
    assert_eq!(frame.reflectance, result.reflectance.as_slice());
    assert_eq!(frame.continuum, result.continuum.as_slice());
    assert_eq!(frame.removed, result.removed.as_slice());
    assert_eq!(frame.anchors.len(), 2);
}

/// Sink that records what it was handed.
struct RecordingSink {
    calls: usize,
    removed: Vec<f64>,
    anchor_count: usize,
}

impl ContinuumSink<f64> for RecordingSink {
    fn accept(&mut self, frame: ContinuumFrame<'_, f64>) {
        self.calls += 1;
        self.removed = frame.removed.to_vec();
        self.anchor_count = frame.anchors.len();
    }
}

/// Test publishing a result to a sink.
///
/// Verifies a single hand-off carrying the aligned arrays.
#[test]
fn test_publish_to_sink() {
    let result = dip_result();
    let mut sink = RecordingSink {
        calls: 0,
        removed: Vec::new(),
        anchor_count: 0,
    };

    result.publish(&mut sink);

    assert_eq!(sink.calls, 1);
    assert_eq!(sink.removed, result.removed);
    assert_eq!(sink.anchor_count, 2);
}

/// Test that a frame can be copied for multiple consumers.
///
/// Verifies the `Copy` hand-off pattern used by overlay renderers.
#[test]
fn test_frame_is_copy() {
    let result = dip_result();
    let frame = result.frame();
    let again = frame;

    assert_eq!(frame.removed, again.removed);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary section of the display output.
///
/// Verifies the headline counts and the configured method.
#[test]
fn test_display_summary() {
    let text = dip_result().to_string();

    assert!(text.contains("Summary:"));
    assert!(text.contains("Data points: 5"));
    assert!(text.contains("Anchors:"));
    assert!(text.contains("Subtract"));
    assert!(text.contains("Continuum-Removed Data:"));
    assert!(text.contains("Wavelength"));
    assert!(!text.contains("Degenerate:"));
}

/// Test the degenerate note.
///
/// Verifies that the fallback is called out in the summary.
#[test]
fn test_display_degenerate_note() {
    let mut result = dip_result();
    result.degenerate = true;

    assert!(result.to_string().contains("Degenerate:"));
}

/// Test that all rows print for small spectra.
///
/// Verifies that twenty or fewer samples are shown without elision.
#[test]
fn test_display_small_shows_all_rows() {
    let text = dip_result().to_string();

    assert!(!text.contains("..."));
    // One row per sample
    for w in ["1.00", "2.00", "3.00", "4.00", "5.00"] {
        assert!(text.contains(w), "Missing row for wavelength {}", w);
    }
}

/// Test row elision for long spectra.
///
/// Verifies that only the head and tail print past twenty samples.
#[test]
fn test_display_long_elides_rows() {
    let n = 25;
    let result = ContinuumResult::<f64> {
        wavelength: (0..n).map(|i| i as f64).collect(),
        reflectance: vec![1.0; n],
        continuum: vec![1.0; n],
        removed: vec![0.0; n],
        anchors: vec![HullPoint::new(0.0, 1.0), HullPoint::new(24.0, 1.0)],
        method: RemovalMethod::Subtract,
        degenerate: false,
    };
    let text = result.to_string();

    assert!(text.contains("..."));
    assert!(text.contains("0.00"));
    assert!(text.contains("24.00"));
    // A middle row must be elided
    assert!(!text.contains("12.00"));
}
