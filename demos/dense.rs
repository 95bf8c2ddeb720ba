//! # Dense Field
//!
//! A fixed 5000-particle field with a wider, stronger pointer repulsion
//! and a warmer gradient. Uses `with_config`, so resizing the window never
//! rebuilds the field.
//!
//! Run with: `cargo run --example dense`

use driftfield::prelude::*;

fn main() {
    let config = FieldConfig {
        count: 5_000,
        base_size: 2.0,
        repulsion_radius: 300.0,
        repulsion_strength: 0.04,
        color_a: Vec3::new(1.0, 0.4, 0.1),
        color_b: Vec3::new(0.9, 0.1, 0.5),
        ..FieldConfig::default()
    };

    if let Err(e) = Viewer::new()
        .with_title("driftfield - dense")
        .with_config(config)
        .run()
    {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
