//! Integration tests for the particle field core: buffer shape, wraparound
//! containment, determinism, opacity pulse, and resize semantics.

use std::f32::consts::TAU;

use driftfield::{pulse_opacity, ConfigError, FieldConfig, ParticleField};

fn seeded(count: u32, seed: u64) -> ParticleField {
    let config = FieldConfig {
        count,
        seed: Some(seed),
        ..FieldConfig::default()
    };
    ParticleField::new(config).unwrap()
}

#[test]
fn buffers_are_sized_to_count() {
    let field = seeded(500, 1);
    assert_eq!(field.count(), 500);
    assert_eq!(field.positions().len(), 1_500);
    assert_eq!(field.colors().len(), 1_500);
    assert_eq!(field.sizes().len(), 500);
}

#[test]
fn initial_positions_lie_inside_the_spawn_domain() {
    let field = seeded(2_000, 2);
    for chunk in field.positions().chunks_exact(3) {
        assert!(chunk[0].abs() <= 1_000.0);
        assert!(chunk[1].abs() <= 1_000.0);
        assert!(chunk[2].abs() <= 500.0);
    }
}

#[test]
fn colors_stay_between_the_gradient_endpoints() {
    let field = seeded(1_000, 3);
    for c in field.colors() {
        assert!((0.0..=1.0).contains(c));
    }
    // Red channel is the tightest: lerp of 0.0 and 123/255.
    for chunk in field.colors().chunks_exact(3) {
        assert!(chunk[0] <= 123.0 / 255.0 + 1e-6);
    }
}

#[test]
fn sizes_span_one_to_one_plus_base() {
    let field = seeded(2_000, 4);
    let base = field.config().base_size;
    for s in field.sizes() {
        assert!(*s >= 1.0 && *s <= 1.0 + base);
    }
}

#[test]
fn wraparound_is_never_violated() {
    let mut field = seeded(500, 5);
    for tick in 0..2_000 {
        field.advance(tick as f32 / 60.0);
    }
    for p in field.positions() {
        assert!(p.abs() <= 1_000.0, "component escaped the domain: {}", p);
    }
}

#[test]
fn wraparound_holds_under_pointer_motion() {
    let mut field = seeded(500, 6);
    for tick in 0..1_000 {
        let t = tick as f32 / 60.0;
        field.set_pointer_sample(t.sin(), t.cos());
        field.advance(t);
    }
    for p in field.positions() {
        assert!(p.abs() <= 1_000.0);
    }
}

#[test]
fn same_seed_gives_identical_fields() {
    let a = seeded(300, 99);
    let b = seeded(300, 99);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());
    assert_eq!(a.sizes(), b.sizes());
}

#[test]
fn same_seed_gives_identical_trajectories() {
    let mut a = seeded(300, 99);
    let mut b = seeded(300, 99);
    for tick in 0..200 {
        let t = tick as f32 / 60.0;
        a.set_pointer_sample(0.4, -0.3);
        b.set_pointer_sample(0.4, -0.3);
        a.advance(t);
        b.advance(t);
    }
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn different_seeds_give_different_fields() {
    let a = seeded(300, 1);
    let b = seeded(300, 2);
    assert_ne!(a.positions(), b.positions());
}

#[test]
fn non_finite_pointer_samples_are_discarded() {
    let mut a = seeded(200, 11);
    let mut b = seeded(200, 11);

    a.set_pointer_sample(0.5, 0.5);
    b.set_pointer_sample(0.5, 0.5);
    b.set_pointer_sample(f32::NAN, 0.0);
    b.set_pointer_sample(0.0, f32::INFINITY);

    for tick in 0..50 {
        let t = tick as f32 / 60.0;
        a.advance(t);
        b.advance(t);
    }
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn opacity_pulse_is_bounded_and_periodic() {
    assert_eq!(pulse_opacity(0.0), 0.6);
    for i in 0..1_000 {
        let t = i as f32 * 0.037;
        let o = pulse_opacity(t);
        assert!((0.4..=0.8).contains(&o));
        assert!((pulse_opacity(t + TAU) - o).abs() < 1e-3);
    }
    assert!((pulse_opacity(TAU / 4.0) - 0.8).abs() < 1e-6);
}

#[test]
fn advance_updates_field_opacity() {
    let mut field = seeded(10, 8);
    field.advance(TAU / 4.0);
    assert!((field.opacity() - 0.8).abs() < 1e-6);
}

#[test]
fn resize_across_breakpoint_rebuilds_the_field() {
    let mut field = ParticleField::new(FieldConfig {
        seed: Some(21),
        ..FieldConfig::for_viewport_width(639)
    })
    .unwrap();
    assert_eq!(field.count(), 500);

    let rebuilt = field.resize(641).unwrap();
    assert!(rebuilt);
    assert_eq!(field.count(), 1_000);
    assert_eq!(field.positions().len(), 3_000);
    assert_eq!(field.sizes().len(), 1_000);
    for chunk in field.positions().chunks_exact(3) {
        assert!(chunk[2].abs() <= 500.0);
    }
}

#[test]
fn resize_within_class_keeps_the_field() {
    let mut field = ParticleField::new(FieldConfig {
        seed: Some(22),
        ..FieldConfig::for_viewport_width(700)
    })
    .unwrap();
    let before = field.positions().to_vec();

    let rebuilt = field.resize(900).unwrap();
    assert!(!rebuilt);
    assert_eq!(field.positions(), &before[..]);
}

#[test]
fn zero_count_is_rejected() {
    let config = FieldConfig {
        count: 0,
        ..FieldConfig::default()
    };
    match ParticleField::new(config) {
        Err(ConfigError::InvalidParticleCount(0)) => {}
        other => panic!("expected InvalidParticleCount, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn non_finite_config_is_rejected() {
    let config = FieldConfig {
        pointer_smoothing: f32::NAN,
        ..FieldConfig::default()
    };
    assert!(ParticleField::new(config).is_err());
}
