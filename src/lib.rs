//! # driftfield
//!
//! An ambient drifting particle background: a fixed-size field of glowing
//! points that drift at constant velocities, flee the pointer, wrap around
//! a cubic domain, and pulse in opacity. The simulation runs on the CPU
//! and renders as additively-blended GPU points.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     Viewer::new()
//!         .with_title("ambient background")
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns flat parallel buffers (positions, colors, sizes)
//! and steps them once per frame: constant-velocity drift, a linearly
//! decaying repulsion around the pointer, and hard toroidal wraparound at
//! the domain edge. It is render-agnostic; anything that can draw flat
//! numeric buffers can consume it.
//!
//! ### Density breakpoints
//!
//! The particle population follows the viewport width
//! ([`FieldConfig::for_viewport_width`]): 500 particles below 640 px, 1000
//! below 1024 px, 2000 otherwise. Resizing across a breakpoint discards
//! and reseeds the whole field.
//!
//! ### The viewer
//!
//! [`Viewer`] wires the field to a winit window and a wgpu point renderer:
//! pointer samples in, flat buffers out, one tick per frame. Motion is
//! deliberately per-tick rather than per-second, so the effect speeds up
//! on high-refresh displays exactly like the tuning intended.
//!
//! ## Feature Overview
//!
//! | Concern | Where |
//! |---------|-------|
//! | Particle buffers + tick | [`ParticleField`] |
//! | Tuning + breakpoints | [`FieldConfig`] |
//! | Opacity pulse | [`pulse_opacity`] |
//! | Frame clock | [`time::Time`] |
//! | Pointer NDC tracking | [`input::Pointer`] |
//! | Window + renderer | [`Viewer`] |

pub mod config;
pub mod error;
pub mod field;
mod gpu;
pub mod input;
pub mod time;
mod viewer;

pub use config::{FieldConfig, NEON_BLUE, PURPLE};
pub use error::{ConfigError, GpuError, ViewerError};
pub use field::{pulse_opacity, ParticleField};
pub use glam::{Vec2, Vec3};
pub use viewer::Viewer;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::error::{ConfigError, ViewerError};
    pub use crate::field::{pulse_opacity, ParticleField};
    pub use crate::input::Pointer;
    pub use crate::time::Time;
    pub use crate::viewer::Viewer;
    pub use crate::{Vec2, Vec3};
}
