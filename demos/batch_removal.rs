//! Comprehensive Batch Continuum-Removal Examples
//!
//! This example demonstrates various continuum-removal scenarios:
//! - Basic removal with minimal configuration
//! - Band-depth normalization with ratio removal
//! - Degenerate (featureless) spectra and the fallback policy
//! - Exporting results through a custom sink
//! - Throughput on a large synthetic spectrum
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use contrem::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), ContinuumError> {
    println!("{}", "=".repeat(80));
    println!("Continuum Removal - Batch Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_removal()?;
    example_2_band_depth()?;
    example_3_degenerate_fallback()?;
    example_4_csv_sink()?;
    example_5_benchmark()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Removal
/// Demonstrates the simplest usage with default configuration
fn example_1_basic_removal() -> Result<(), ContinuumError> {
    println!("Example 1: Basic Removal");
    println!("{}", "-".repeat(80));

    // One absorption dip between two shoulders of equal reflectance
    let wavelength = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let reflectance = vec![1.0, 0.9, 0.7, 0.85, 1.0];

    let processor = ContinuumRemoval::new().adapter(Batch).build()?;

    let result = processor.remove(&wavelength, &reflectance)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Data points: 5
      Anchors:     2
      Method:      Subtract

    Continuum-Removed Data:
    Wavelength  Reflectance    Continuum      Removed
    -------------------------------------------------
          1.00     1.000000     1.000000     0.000000
          2.00     0.900000     1.000000    -0.100000
          3.00     0.700000     1.000000    -0.300000
          4.00     0.850000     1.000000    -0.150000
          5.00     1.000000     1.000000     0.000000
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Band-Depth Normalization
/// Ratio removal rescales each sample against the local continuum level
fn example_2_band_depth() -> Result<(), ContinuumError> {
    println!("Example 2: Band-Depth Normalization");
    println!("{}", "-".repeat(80));

    let wavelength = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let reflectance = vec![1.0, 0.9, 0.7, 0.85, 1.0];

    let processor = ContinuumRemoval::new().method(Divide).adapter(Batch).build()?;

    let result = processor.remove(&wavelength, &reflectance)?;

    // With ratio removal the band depth at each sample is 1 - removed
    if let Some(i) = result.deepest_feature() {
        println!(
            "Deepest absorption at {:.2} (band depth {:.3})",
            result.wavelength[i],
            1.0 - result.removed[i]
        );
    }

    print!("Normalized spectrum: [");
    for (i, &v) in result.removed.iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{:.3}", v);
    }
    println!("]");

    /* Expected Output:
    Deepest absorption at 3.00 (band depth 0.300)
    Normalized spectrum: [1.000, 0.900, 0.700, 0.850, 1.000]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Degenerate Spectra
/// A featureless spectrum has no hull area; the fallback keeps it usable
fn example_3_degenerate_fallback() -> Result<(), ContinuumError> {
    println!("Example 3: Degenerate Spectra");
    println!("{}", "-".repeat(80));

    let wavelength = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let flat = vec![0.8; 6];

    // The default policy refuses to invent a continuum
    let strict = ContinuumRemoval::new().adapter(Batch).build()?;
    match strict.remove(&wavelength, &flat) {
        Err(e) => println!("Default policy: {}", e),
        Ok(_) => unreachable!("Flat spectra cannot produce a hull"),
    }

    // The fallback treats the spectrum as its own continuum
    let lenient = ContinuumRemoval::new()
        .on_degenerate(UseSpectrum)
        .adapter(Batch)
        .build()?;
    let result = lenient.remove(&wavelength, &flat)?;

    println!(
        "Fallback policy: degenerate={}, removed={:?}",
        result.is_degenerate(),
        result.removed
    );

    /* Expected Output:
    Default policy: Degenerate hull: all points collinear (2 distinct vertices, need 3)
    Fallback policy: degenerate=true, removed=[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Custom Sink
/// Hand the aligned arrays to an export collaborator without copying
fn example_4_csv_sink() -> Result<(), ContinuumError> {
    println!("Example 4: Custom Sink (CSV export)");
    println!("{}", "-".repeat(80));

    /// Sink that renders each frame as CSV rows.
    struct CsvSink {
        lines: Vec<String>,
    }

    impl ContinuumSink<f64> for CsvSink {
        fn accept(&mut self, frame: ContinuumFrame<'_, f64>) {
            self.lines
                .push("wavelength,reflectance,continuum,removed".to_string());
            for i in 0..frame.wavelength.len() {
                self.lines.push(format!(
                    "{},{},{},{}",
                    frame.wavelength[i], frame.reflectance[i], frame.continuum[i], frame.removed[i]
                ));
            }
        }
    }

    let wavelength = vec![1.0, 2.0, 3.0];
    let reflectance = vec![1.0, 0.5, 2.0];

    let result = ContinuumRemoval::new()
        .adapter(Batch)
        .build()?
        .remove(&wavelength, &reflectance)?;

    let mut sink = CsvSink { lines: Vec::new() };
    result.publish(&mut sink);

    for line in &sink.lines {
        println!("{}", line);
    }

    /* Expected Output:
    wavelength,reflectance,continuum,removed
    1,1,1,0
    2,0.5,1.5,-1
    3,2,2,0
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Benchmark
/// Measure execution time on a large synthetic spectrum
fn example_5_benchmark() -> Result<(), ContinuumError> {
    println!("Example 5: Benchmark");
    println!("{}", "-".repeat(80));

    // Sloped baseline with two Gaussian absorption features
    let n = 10_000;
    let wavelength: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let reflectance: Vec<f64> = wavelength
        .iter()
        .map(|&w| {
            1.0 + 0.00002 * w
                - 0.3 * (-((w - 2_500.0) / 400.0).powi(2)).exp()
                - 0.2 * (-((w - 7_000.0) / 600.0).powi(2)).exp()
        })
        .collect();

    let start = Instant::now();
    let processor = ContinuumRemoval::new().method(Divide).adapter(Batch).build()?;
    let result = processor.remove(&wavelength, &reflectance)?;
    let duration = start.elapsed();

    println!("Processed {} samples in {:?}", n, duration);
    println!("Continuum anchors: {}", result.anchor_count());
    if let Some(i) = result.deepest_feature() {
        println!("Deepest absorption near sample {}", i);
    }

    println!();
    Ok(())
}
