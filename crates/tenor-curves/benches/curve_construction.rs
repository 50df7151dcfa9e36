//! Benchmarks for curve construction.
//!
//! Run with: cargo bench -p tenor-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tenor_curves::prelude::*;

fn ladder(n: usize) -> Vec<BondInstrument> {
    let mut bonds = vec![BondInstrument::zero_coupon(98.0, 100.0, 0.5)];
    for k in 2..=n {
        let maturity = k as f64 * 0.5;
        let coupon = 0.04 + 0.001 * k as f64;
        bonds.push(BondInstrument::new(100.0, 100.0, coupon, 2, maturity));
    }
    bonds
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");
    for n in [10, 60] {
        let bonds = ladder(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &bonds, |b, bonds| {
            b.iter(|| ZeroCurveBootstrapper::new().bootstrap(black_box(bonds)));
        });
    }
    group.finish();
}

fn bench_splice(c: &mut Criterion) {
    let base_tenors = [0.25, 0.5, 1.0, 2.0];
    let base_rates = [0.030, 0.032, 0.035, 0.038];
    let swap_tenors = [3.0, 5.0, 7.0, 10.0, 30.0];
    let swap_rates = [0.040, 0.045, 0.048, 0.050, 0.055];
    let splicer = CurveSplicer::new();

    c.bench_function("splice_with_swaps", |b| {
        b.iter(|| {
            splicer.splice_with_swaps(
                black_box(&base_tenors),
                black_box(&base_rates),
                black_box(&swap_tenors),
                black_box(&swap_rates),
            )
        });
    });
}

criterion_group!(benches, bench_bootstrap, bench_splice);
criterion_main!(benches);
