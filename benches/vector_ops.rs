//! Micro-benchmarks for the hot vector operations used in transform chains.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numerus::prelude::*;

fn bench_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("products");

    let a = Vector3::new(1.0_f32, 2.0, 3.0);
    let b = Vector3::new(-4.0_f32, 0.5, 2.0);

    group.bench_function("vector3_dot", |bench| {
        bench.iter(|| black_box(a).dot(&black_box(b)))
    });
    group.bench_function("vector3_cross", |bench| {
        bench.iter(|| black_box(a).cross(&black_box(b)))
    });
    group.bench_function("vector4_dot", |bench| {
        let p = Vector4::new(1.0_f32, 2.0, 3.0, 1.0);
        bench.iter(|| black_box(p).dot(&black_box(p)))
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    // Zero-length input takes the guarded branch.
    let inputs = [
        ("unit", Vector3::new(0.0_f32, 0.0, 1.0)),
        ("general", Vector3::new(3.0_f32, -7.0, 11.0)),
        ("zero", Vector3::new(0.0_f32, 0.0, 0.0)),
    ];

    for (name, v) in inputs {
        group.bench_with_input(BenchmarkId::new("normalized", name), &v, |bench, v| {
            bench.iter(|| black_box(*v).normalized())
        });
    }

    group.finish();
}

fn bench_lerp_chain(c: &mut Criterion) {
    let from = Vector2::new(0.0_f32, 0.0);
    let to = Vector2::new(100.0_f32, -50.0);

    c.bench_function("vector2_lerp_64_steps", |bench| {
        bench.iter(|| {
            let mut acc = Vector2::<f32>::zero();
            for step in 0..64 {
                acc += Vector2::lerp(from, to, step as f32 / 63.0);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_products, bench_normalize, bench_lerp_chain);
criterion_main!(benches);
