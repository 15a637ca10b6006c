//! Staged Engine Lifecycle Examples
//!
//! This example walks the per-spectrum engine through its lifecycle:
//! - Stage transitions driven by the first access to each product
//! - Hull inspection without committing to a removal
//! - Lazy failure on degenerate spectra
//! - Publishing the final frame to a sink
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use contrem::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), ContinuumError> {
    println!("{}", "=".repeat(80));
    println!("Continuum Removal - Engine Lifecycle Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_stage_transitions()?;
    example_2_hull_inspection()?;
    example_3_lazy_failure()?;
    example_4_publish()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Stage Transitions
/// Each product is derived on first access and cached afterwards
fn example_1_stage_transitions() -> Result<(), ContinuumError> {
    println!("Example 1: Stage Transitions");
    println!("{}", "-".repeat(80));

    // Two absorption features separated by a shoulder at 4.0
    let wavelength = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let reflectance = vec![1.0, 0.8, 0.9, 1.1, 0.85, 0.95, 1.05];

    let mut engine = ContinuumRemoval::new()
        .adapter(Engine)
        .build(wavelength, reflectance)?;

    println!("After build:          {:?}", engine.stage());

    let continuum = engine.continuum()?.to_vec();
    println!("After continuum():    {:?}", engine.stage());

    let removed = engine.continuum_removed()?.to_vec();
    println!("After removal:        {:?}", engine.stage());

    print_values("Continuum", &continuum);
    print_values("Removed", &removed);

    /* Expected Output:
    After build:          Uninitialized
    After continuum():    HullComputed
    After removal:        ContinuumRemoved
    Continuum: [1.0000, 1.0333, 1.0667, 1.1000, 1.0833, 1.0667, 1.0500]
    Removed:   [0.0000, -0.2333, -0.1667, 0.0000, -0.2333, -0.1167, 0.0000]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Hull Inspection
/// Anchors and the degeneracy flag are available without running the removal
fn example_2_hull_inspection() -> Result<(), ContinuumError> {
    println!("Example 2: Hull Inspection");
    println!("{}", "-".repeat(80));

    let wavelength = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let reflectance = vec![1.0, 0.8, 0.9, 1.1, 0.85, 0.95, 1.05];

    let mut engine = ContinuumRemoval::new()
        .adapter(Engine)
        .build(wavelength, reflectance)?;

    print!("Anchors:");
    for anchor in engine.anchors()? {
        print!(" ({:.2}, {:.3})", anchor.wavelength, anchor.reflectance);
    }
    println!();

    println!("Degenerate: {}", engine.is_degenerate()?);
    println!("Stage:      {:?}", engine.stage());

    /* Expected Output:
    Anchors: (1.00, 1.000) (4.00, 1.100) (7.00, 1.050)
    Degenerate: false
    Stage:      HullComputed
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Lazy Failure
/// Validation runs at build; hull degeneracy surfaces on first access
fn example_3_lazy_failure() -> Result<(), ContinuumError> {
    println!("Example 3: Lazy Failure");
    println!("{}", "-".repeat(80));

    // A flat spectrum passes validation but has no hull area
    let wavelength = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let flat = vec![0.8; 5];

    let mut engine = ContinuumRemoval::new().adapter(Engine).build(wavelength, flat)?;
    println!("Build succeeded:   {:?}", engine.stage());

    match engine.continuum() {
        Err(e) => println!("First access:      {}", e),
        Ok(_) => unreachable!("Flat spectra cannot produce a hull"),
    }

    // The failed transition leaves the engine where it was
    println!("Stage after error: {:?}", engine.stage());

    /* Expected Output:
    Build succeeded:   Uninitialized
    First access:      Degenerate hull: all points collinear (2 distinct vertices, need 3)
    Stage after error: Uninitialized
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Publishing
/// A sink borrows all aligned arrays at once; publish drives the engine to
/// the final stage on its own
fn example_4_publish() -> Result<(), ContinuumError> {
    println!("Example 4: Publishing");
    println!("{}", "-".repeat(80));

    /// Sink that records the shape of the frame it was handed.
    struct OverlaySink {
        samples: usize,
        anchors: usize,
    }

    impl ContinuumSink<f64> for OverlaySink {
        fn accept(&mut self, frame: ContinuumFrame<'_, f64>) {
            self.samples = frame.wavelength.len();
            self.anchors = frame.anchors.len();
        }
    }

    let wavelength = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let reflectance = vec![1.0, 0.9, 0.7, 0.85, 1.0];

    let mut engine = ContinuumRemoval::new()
        .adapter(Engine)
        .build(wavelength, reflectance)?;

    let mut sink = OverlaySink {
        samples: 0,
        anchors: 0,
    };
    engine.publish(&mut sink)?;

    println!("Sink received {} samples and {} anchors", sink.samples, sink.anchors);
    println!("Stage after publish: {:?}", engine.stage());

    let result = engine.result()?;
    if let Some(i) = result.deepest_feature() {
        println!("Deepest absorption at {:.2}", result.wavelength[i]);
    }

    /* Expected Output:
    Sink received 5 samples and 2 anchors
    Stage after publish: ContinuumRemoved
    Deepest absorption at 3.00
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Print a labelled, fixed-precision value list.
fn print_values(label: &str, values: &[f64]) {
    print!("{:<11}[", format!("{}:", label));
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{:.4}", v);
    }
    println!("]");
}
