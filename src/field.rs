//! The particle field core.
//!
//! A [`ParticleField`] owns a fixed-size set of particles stored as flat
//! parallel buffers (`3*count` position floats, `3*count` color floats,
//! `count` size floats) and steps them once per animation tick:
//!
//! 1. the pointer eases toward the latest raw sample (EMA, factor per tick),
//! 2. every particle drifts by its constant velocity,
//! 3. particles inside the repulsion radius are pushed away from the
//!    pointer's world-projected location,
//! 4. positions wrap toroidally at the domain edge,
//! 5. the global opacity is recomputed from elapsed wall-clock time.
//!
//! The field knows nothing about rendering: a collaborator reads the flat
//! buffers plus the opacity and rotation scalars and draws them however it
//! likes ([`crate::Viewer`] feeds them to a wgpu point renderer).
//!
//! The Euler step and pointer smoothing are deliberately not scaled by
//! elapsed real time, so motion speed follows the tick rate. That matches
//! the visual tuning of the constants; this is an ambient effect, not a
//! physical integrator.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::error::ConfigError;

/// Pointer NDC coordinates are projected into world space by this factor
/// before measuring distance to particles.
const POINTER_WORLD_SCALE: f32 = 500.0;

/// Global pulsing opacity: `0.6 + sin(t) * 0.2`, bounded in `[0.4, 0.8]`
/// with a 2π-second period. `elapsed_secs` must come from a clock that is
/// NOT reset when the field is rebuilt, so the pulse phase stays continuous
/// across density-class changes.
pub fn pulse_opacity(elapsed_secs: f32) -> f32 {
    0.6 + elapsed_secs.sin() * 0.2
}

/// A fixed-size field of drifting particles with pointer repulsion and
/// toroidal wraparound.
///
/// Particles have no identity beyond their buffer slot. Rebuilding the
/// field (count change on resize) reallocates and reseeds everything; there
/// is no partial mutation.
pub struct ParticleField {
    config: FieldConfig,
    count: usize,
    positions: Vec<f32>,
    colors: Vec<f32>,
    sizes: Vec<f32>,
    velocities: Vec<f32>,
    /// Smoothed pointer, NDC. Moves toward `pointer_target` each tick.
    pointer: Vec2,
    /// Latest raw pointer sample, NDC. Last write wins between ticks.
    pointer_target: Vec2,
    /// Whole-field rotation angles (x, y), radians. Consumed by the
    /// renderer's model transform.
    rotation: Vec2,
    opacity: f32,
}

impl ParticleField {
    /// Allocate and seed a field. Every particle gets independent draws:
    /// position uniform in the spawn domain, velocity uniform in
    /// `[-drift_speed, drift_speed]` per component, a color mixed between
    /// the two gradient endpoints, and a size in `[1, 1 + base_size]`.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let count = config.count as usize;
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);
        let mut sizes = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count * 3);

        let xy = config.domain_half_extent;
        let z = config.spawn_half_depth;
        let v = config.drift_speed;

        for _ in 0..count {
            positions.push(rng.gen_range(-xy..xy));
            positions.push(rng.gen_range(-xy..xy));
            positions.push(rng.gen_range(-z..z));

            let mix: f32 = rng.gen();
            let color = config.color_a + (config.color_b - config.color_a) * mix;
            colors.push(color.x);
            colors.push(color.y);
            colors.push(color.z);

            sizes.push(1.0 + rng.gen::<f32>() * config.base_size);

            // drift_speed 0 is a still field; gen_range rejects an empty range.
            for _ in 0..3 {
                velocities.push(if v > 0.0 { rng.gen_range(-v..v) } else { 0.0 });
            }
        }

        Ok(Self {
            config,
            count,
            positions,
            colors,
            sizes,
            velocities,
            pointer: Vec2::ZERO,
            pointer_target: Vec2::ZERO,
            rotation: Vec2::ZERO,
            opacity: pulse_opacity(0.0),
        })
    }

    /// Store the latest raw pointer sample in normalized device
    /// coordinates (`[-1, 1]` each axis, y up).
    ///
    /// The smoothed pointer only moves during [`advance`](Self::advance);
    /// samples arriving between ticks overwrite each other. Non-finite
    /// samples are discarded and the last valid sample is kept.
    pub fn set_pointer_sample(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer_target = Vec2::new(x, y);
        }
    }

    /// Step the field once. `elapsed_secs` is wall-clock time since the
    /// driver's epoch and only feeds the opacity pulse.
    pub fn advance(&mut self, elapsed_secs: f32) {
        self.pointer += (self.pointer_target - self.pointer) * self.config.pointer_smoothing;
        self.rotation += self.config.rotation_rate;

        let pointer_world = self.pointer * POINTER_WORLD_SCALE;
        let radius = self.config.repulsion_radius;
        let strength = self.config.repulsion_strength;
        let limit = self.config.domain_half_extent;

        for i in 0..self.count {
            let base = i * 3;

            self.positions[base] += self.velocities[base];
            self.positions[base + 1] += self.velocities[base + 1];
            self.positions[base + 2] += self.velocities[base + 2];

            // Pointer repulsion acts in the xy plane only. Force decays
            // linearly from 1 at the pointer to 0 at the radius; a particle
            // sitting exactly on the pointer sees force 1 but zero
            // displacement (dx = dy = 0), so there is no singularity.
            let dx = self.positions[base] - pointer_world.x;
            let dy = self.positions[base + 1] - pointer_world.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < radius {
                let force = (radius - dist) / radius;
                self.positions[base] += dx * force * strength;
                self.positions[base + 1] += dy * force * strength;
            }

            // Hard toroidal wrap: teleport to the opposite edge, dropping
            // any overshoot past the boundary.
            for offset in 0..3 {
                let p = &mut self.positions[base + offset];
                if *p > limit {
                    *p = -limit;
                } else if *p < -limit {
                    *p = limit;
                }
            }
        }

        self.opacity = pulse_opacity(elapsed_secs);
    }

    /// Recompute the density class for a new viewport width. If the class
    /// changed, the field is fully discarded and reseeded (fresh draws, no
    /// identity preservation) and `true` is returned so the renderer can
    /// reallocate its buffers. Same-class resizes leave the field alone.
    pub fn resize(&mut self, viewport_width: u32) -> Result<bool, ConfigError> {
        let class = FieldConfig::for_viewport_width(viewport_width);
        if class.count == self.config.count {
            return Ok(false);
        }

        let config = FieldConfig {
            count: class.count,
            base_size: class.base_size,
            ..self.config.clone()
        };
        *self = ParticleField::new(config)?;
        Ok(true)
    }

    /// Number of particles.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count as u32
    }

    /// Flat position buffer, `3 * count` floats, updated every tick.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat RGB color buffer, `3 * count` floats, fixed at creation.
    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Flat size buffer, `count` floats, fixed at creation.
    #[inline]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Global opacity for the current tick.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whole-field rotation angles (x, y) in radians.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// The configuration this field was built from.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
