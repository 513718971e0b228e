//! # Sightline Self-Test
//!
//! Prints a fixed trace of vector and camera results next to the values they
//! are expected to have. The trace is for reading; the assertions live in the
//! unit tests.
//!
//! Set `RUST_LOG=trace` to also see each visibility decision.
//!
//! ## License
//! Licensed under the MIT License.

use log::info;
use std::error::Error;

use sightline::config::PI;
use sightline::{CameraConfig, Vector2D};

fn vector_trace() {
    println!("----- Vector2D -----");
    println!();

    let origin = Vector2D::zero();
    let right = Vector2D::new(1.0, 0.0);
    let up = Vector2D::up();
    let left = Vector2D::new(-1.0, 0.0);

    println!("(1,0) . (1,0) = {}. Expected 1", right.dot_product(&right));
    println!("(1,0) . (0,1) = {}. Expected 0", right.dot_product(&up));
    println!("(1,0) . (-1,0) = {}. Expected -1", right.dot_product(&left));
    println!();

    let a = Vector2D::new(5.0, 5.0);
    let b = Vector2D::new(42.0, -12.0);
    println!("{} . {} = {}. Expected 50", a, a, a.dot_product(&a));
    println!("{} . {} = {}. Expected 150", a, b, a.dot_product(&b));
    println!();

    println!("|{}| = {}. Expected 0", origin, origin.magnitude());
    println!("|{}| = {}. Expected 1", right, right.magnitude());
    println!("|{}| = {}. Expected ~7.071", a, a.magnitude());
    println!("|{}| = {}. Expected ~43.681", b, b.magnitude());
    println!();

    println!("norm{} = {}. Expected (1, 0)", right, right.normalized());
    println!("norm{} = {}. Expected (~0.7071, ~0.7071)", a, a.normalized());
    println!("norm{} = {}. Expected (~0.962, ~-0.275)", b, b.normalized());
    println!("norm{} = {}. Expected (0, 0)", origin, origin.normalized());
    println!();

    let nudged = Vector2D::new(1.01, 0.0);
    println!("{} - {} = {}. Expected (-37, 17)", a, b, a - b);
    println!("{} + {} = {}. Expected (47, -7)", a, b, a + b);
    println!("{} == {} is {}. Expected true", right, right, right.equals(&right));
    println!("{} == {} is {}. Expected false", right, nudged, right.equals(&nudged));
    println!();
}

fn camera_trace() {
    println!("----- Camera2D -----");
    println!();

    // Origin, facing up, 90 degree cone, 100 unit range.
    let camera = CameraConfig::new()
        .with_position(Vector2D::zero())
        .with_orientation(Vector2D::up())
        .with_field_of_view(PI / 2.0)
        .with_view_distance(100.0)
        .build();

    let cases = [
        ("300 units away, beyond view distance", Vector2D::new(0.0, 300.0), false),
        ("50 units ahead", Vector2D::new(0.0, 50.0), true),
        ("in range but behind", Vector2D::new(0.0, -50.0), false),
        ("in range but to the right", Vector2D::new(50.0, 0.0), false),
        ("in range but to the left", Vector2D::new(-50.0, 0.0), false),
        ("on the right edge of vision", Vector2D::new(50.0, 50.0), false),
        ("just inside the right edge", Vector2D::new(50.0, 50.1), true),
        ("on the left edge of vision", Vector2D::new(-50.0, 50.0), false),
        ("just inside the left edge", Vector2D::new(-50.0, 50.1), true),
        ("at the camera position", Vector2D::zero(), false),
    ];

    for (label, target, expected) in cases {
        println!(
            "{} {}: {}. Expected {}",
            label,
            target,
            camera.can_see_target(&target),
            expected
        );
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("Sightline self-test starting...");

    vector_trace();
    camera_trace();

    info!("Sightline self-test finished.");
    Ok(())
}
