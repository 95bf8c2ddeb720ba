//! # Ambient Background
//!
//! The default drifting field: density follows the window width, particles
//! flee the pointer, and the whole field slowly rotates and pulses.
//!
//! ## Controls
//!
//! - **Move the mouse**: push nearby particles away
//! - **Space**: pause/resume
//! - **Escape**: quit
//!
//! Run with: `cargo run --example ambient`

use driftfield::prelude::*;

fn main() {
    if let Err(e) = Viewer::new().with_title("driftfield - ambient").run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
