//! Criterion benchmarks for deriv_core chain-rule propagation.
//!
//! Measures how expression evaluation scales with the number of independent
//! variables (the derivative vector length).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deriv_core::math::combine::combine;
use deriv_core::{gradient, DualNumber};

/// Generate an evaluation point of dimension `n`.
fn generate_point(n: usize) -> Vec<f64> {
    (0..n).map(|i| 0.1 + i as f64 / n as f64).collect()
}

/// Benchmark the zero-padding combinator on mismatched lengths.
fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");

    for size in [4, 64, 1024] {
        let a = generate_point(size);
        let b = generate_point(size / 2);
        group.bench_with_input(BenchmarkId::new("add", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| {
                combine(
                    |x, y| x + y,
                    black_box(a.as_slice()),
                    black_box(b.as_slice()),
                )
            });
        });
    }

    group.finish();
}

/// Benchmark a sum of transcendental terms over all variables.
fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");

    for size in [3, 16, 128] {
        let point = generate_point(size);
        group.bench_with_input(
            BenchmarkId::new("sum_sin_exp", size),
            &point,
            |bench, point| {
                bench.iter(|| {
                    gradient(
                        |v| {
                            v.iter().fold(DualNumber::constant(0.0), |acc, x| {
                                acc + x.sin() * x.exp()
                            })
                        },
                        black_box(point.as_slice()),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the 3-variable norm, the typical instrument-response shape.
fn bench_norm3(c: &mut Criterion) {
    c.bench_function("norm3", |bench| {
        bench.iter(|| {
            let x = DualNumber::variable(black_box(7.0_f64), 0);
            let y = DualNumber::variable(black_box(42.0_f64), 1);
            let z = DualNumber::variable(black_box(std::f64::consts::PI), 2);
            (x.powi(2) + y.powi(2) + z.powi(2)).sqrt()
        });
    });
}

criterion_group!(benches, bench_combine, bench_gradient, bench_norm3);
criterion_main!(benches);
