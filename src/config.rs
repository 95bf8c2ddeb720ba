//! Field configuration and viewport density breakpoints.
//!
//! A [`FieldConfig`] fully describes a particle field: population, spawn
//! domain, drift speed, pointer repulsion tuning, and gradient colors.
//! [`FieldConfig::for_viewport_width`] picks the population and point size
//! from the viewport width so narrow windows get a lighter field.

use glam::{Vec2, Vec3};

use crate::error::ConfigError;

/// Gradient endpoint: neon blue (#00F0FF).
pub const NEON_BLUE: Vec3 = Vec3::new(0.0, 240.0 / 255.0, 1.0);

/// Gradient endpoint: deep purple (#7B2CBF).
pub const PURPLE: Vec3 = Vec3::new(123.0 / 255.0, 44.0 / 255.0, 191.0 / 255.0);

/// Configuration for a [`ParticleField`](crate::ParticleField).
///
/// All distances are in world units. The defaults reproduce the desktop
/// density class; use [`FieldConfig::for_viewport_width`] for the
/// breakpoint table, or build one by hand for custom fields:
///
/// ```ignore
/// let config = FieldConfig {
///     count: 5_000,
///     repulsion_strength: 0.05,
///     ..FieldConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of particles.
    pub count: u32,
    /// Point size spread. Per-particle size is drawn from `[1, 1 + base_size]`.
    pub base_size: f32,
    /// Half-extent of the wraparound cube. Exceeding an edge teleports the
    /// coordinate to the opposite edge.
    pub domain_half_extent: f32,
    /// Half-extent of the initial z spread. Particles spawn in a slab
    /// shallower than the full wrap domain.
    pub spawn_half_depth: f32,
    /// Distance below which the pointer pushes particles away.
    pub repulsion_radius: f32,
    /// Displacement multiplier for the pointer repulsion.
    pub repulsion_strength: f32,
    /// Per-tick EMA factor applied to the raw pointer sample.
    pub pointer_smoothing: f32,
    /// Maximum drift speed per component, world units per tick.
    pub drift_speed: f32,
    /// Whole-field rotation per tick (x, y), radians. Applied by the
    /// renderer's model transform, never to particle positions.
    pub rotation_rate: Vec2,
    /// First gradient endpoint color.
    pub color_a: Vec3,
    /// Second gradient endpoint color.
    pub color_b: Vec3,
    /// Fixed RNG seed for deterministic seeding. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 2_000,
            base_size: 3.0,
            domain_half_extent: 1_000.0,
            spawn_half_depth: 500.0,
            repulsion_radius: 200.0,
            repulsion_strength: 0.02,
            pointer_smoothing: 0.05,
            drift_speed: 0.25,
            rotation_rate: Vec2::new(0.0005, 0.001),
            color_a: NEON_BLUE,
            color_b: PURPLE,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Pick count and base size from the viewport width in device pixels.
    ///
    /// | Width | Particles | Base size |
    /// |-------|-----------|-----------|
    /// | < 640 | 500 | 2.0 |
    /// | < 1024 | 1000 | 2.5 |
    /// | else | 2000 | 3.0 |
    pub fn for_viewport_width(width: u32) -> Self {
        let (count, base_size) = if width < 640 {
            (500, 2.0)
        } else if width < 1024 {
            (1_000, 2.5)
        } else {
            (2_000, 3.0)
        };

        Self {
            count,
            base_size,
            ..Self::default()
        }
    }

    /// Check that the configuration describes a well-formed field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidParticleCount(self.count));
        }

        let numeric = [
            ("base_size", self.base_size),
            ("domain_half_extent", self.domain_half_extent),
            ("spawn_half_depth", self.spawn_half_depth),
            ("repulsion_radius", self.repulsion_radius),
            ("repulsion_strength", self.repulsion_strength),
            ("pointer_smoothing", self.pointer_smoothing),
            ("drift_speed", self.drift_speed),
            ("rotation_rate.x", self.rotation_rate.x),
            ("rotation_rate.y", self.rotation_rate.y),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter(name));
            }
        }

        if !self.color_a.is_finite() {
            return Err(ConfigError::NonFiniteParameter("color_a"));
        }
        if !self.color_b.is_finite() {
            return Err(ConfigError::NonFiniteParameter("color_b"));
        }

        // Spawn ranges and the repulsion denominator must be positive;
        // spread parameters may be zero but not negative; the EMA factor
        // leaves [0, 1] only by diverging.
        if self.domain_half_extent <= 0.0 {
            return Err(ConfigError::OutOfRangeParameter("domain_half_extent"));
        }
        if self.spawn_half_depth <= 0.0 {
            return Err(ConfigError::OutOfRangeParameter("spawn_half_depth"));
        }
        if self.repulsion_radius <= 0.0 {
            return Err(ConfigError::OutOfRangeParameter("repulsion_radius"));
        }
        if self.base_size < 0.0 {
            return Err(ConfigError::OutOfRangeParameter("base_size"));
        }
        if self.drift_speed < 0.0 {
            return Err(ConfigError::OutOfRangeParameter("drift_speed"));
        }
        if !(0.0..=1.0).contains(&self.pointer_smoothing) {
            return Err(ConfigError::OutOfRangeParameter("pointer_smoothing"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_table() {
        assert_eq!(FieldConfig::for_viewport_width(320).count, 500);
        assert_eq!(FieldConfig::for_viewport_width(639).count, 500);
        assert_eq!(FieldConfig::for_viewport_width(640).count, 1_000);
        assert_eq!(FieldConfig::for_viewport_width(1_023).count, 1_000);
        assert_eq!(FieldConfig::for_viewport_width(1_024).count, 2_000);
        assert_eq!(FieldConfig::for_viewport_width(3_840).count, 2_000);
    }

    #[test]
    fn test_breakpoint_base_sizes() {
        assert_eq!(FieldConfig::for_viewport_width(500).base_size, 2.0);
        assert_eq!(FieldConfig::for_viewport_width(800).base_size, 2.5);
        assert_eq!(FieldConfig::for_viewport_width(1_920).base_size, 3.0);
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = FieldConfig {
            count: 0,
            ..FieldConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidParticleCount(0)));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let config = FieldConfig {
            repulsion_radius: f32::NAN,
            ..FieldConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteParameter("repulsion_radius"))
        );

        let config = FieldConfig {
            drift_speed: f32::INFINITY,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_parameter_rejected() {
        let config = FieldConfig {
            domain_half_extent: -1.0,
            ..FieldConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRangeParameter("domain_half_extent"))
        );

        let config = FieldConfig {
            pointer_smoothing: 1.5,
            ..FieldConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRangeParameter("pointer_smoothing"))
        );
    }

    #[test]
    fn test_zero_spread_is_allowed() {
        let config = FieldConfig {
            base_size: 0.0,
            drift_speed: 0.0,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }
}
