//! Benchmarks the per-frame tick across the three density classes.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use driftfield::{FieldConfig, ParticleField};

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [500u32, 1_000, 2_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let config = FieldConfig {
                count,
                seed: Some(7),
                ..FieldConfig::default()
            };
            let mut field = ParticleField::new(config).unwrap();
            field.set_pointer_sample(0.3, -0.2);

            let mut tick = 0u64;
            b.iter(|| {
                tick += 1;
                field.advance(black_box(tick as f32 / 60.0));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
