// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use num_complex::Complex64;


// MATH FUNCTIONS
// ================================================================================================

/// Generates a vector with values [1, b, b^2, b^3, b^4, ..., b^(n-1)].
pub fn get_power_series(b: Complex64, n: usize) -> Vec<Complex64> {
    let mut result = Vec::with_capacity(n);
    let mut power = Complex64::new(1.0, 0.0);
    for _ in 0..n {
        result.push(power);
        power *= b;
    }
    result
}

/// Returns a copy of `values` with all leading (highest-power) zero
/// coefficients removed; an all-zero input produces an empty vector.
pub fn remove_leading_zeros(values: &[i64]) -> Vec<i64> {
    for i in (0..values.len()).rev() {
        if values[i] != 0 {
            return values[..(i + 1)].to_vec();
        }
    }

    [].to_vec()
}
