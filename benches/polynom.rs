// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polymul::polynom;
use rand::Rng;

const SIZES: [usize; 3] = [64, 256, 1_024];

fn naive_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_mul");

    for &size in SIZES.iter() {
        let a = rand_coefficients(size);
        let b = rand_coefficients(size);

        group.bench_function(BenchmarkId::new("same_degree", size), |bench| {
            bench.iter(|| polynom::mul(&a, &b));
        });
    }

    group.finish();
}

fn rand_coefficients(n: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(-100..100)).collect()
}

criterion_group!(polynom_group, naive_mul);
criterion_main!(polynom_group);
