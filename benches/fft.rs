// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polymul::fft;
use rand::Rng;

const SIZES: [usize; 3] = [64, 256, 1_024];

fn fft_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_mul");

    for &size in SIZES.iter() {
        let a = rand_coefficients(size);
        let b = rand_coefficients(size);

        group.bench_function(BenchmarkId::new("same_degree", size), |bench| {
            bench.iter(|| fft::mul(&a, &b).unwrap());
        });
    }

    group.finish();
}

fn fft_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_evaluate");

    for &size in SIZES.iter() {
        let p = rand_coefficients(size);

        group.bench_function(BenchmarkId::new("forward", size), |bench| {
            bench.iter(|| fft::evaluate(&p));
        });
    }

    group.finish();
}

fn rand_coefficients(n: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(-100..100)).collect()
}

criterion_group!(fft_group, fft_mul, fft_evaluate);
criterion_main!(fft_group);
