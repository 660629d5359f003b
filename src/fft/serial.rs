// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::utils::get_power_series;

// CONSTANTS
// ================================================================================================

/// Direction of the transform. The inverse transform negates the exponent of
/// the root of unity; this sign is the only structural difference between the
/// two per recursion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn angle_sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Inverse => -1.0,
        }
    }
}

// CORE FFT ALGORITHM
// ================================================================================================

/// Recursive radix-2 transform: evaluates `values` at all n-th roots of
/// unity (or their inverses), where n is the length of `values`.
///
/// The sequence is split into even- and odd-indexed halves by position, each
/// half is transformed recursively, the odd half's points are twisted by
/// ascending powers of the primitive root of unity for the current length,
/// and the halves are recombined as `even[k] ± twisted_odd[k]`.
pub(super) fn fft(values: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = values.len();
    debug_assert!(n.is_power_of_two(), "transform length must be a power of two");

    // keep recursing until the length-2 butterfly; a length-1 transform is
    // the identity
    match n {
        1 => values.to_vec(),
        2 => vec![values[0] + values[1], values[0] - values[1]],
        _ => {
            let even: Vec<Complex64> = values.iter().copied().step_by(2).collect();
            let odd: Vec<Complex64> = values.iter().copied().skip(1).step_by(2).collect();

            let even = fft(&even, direction);
            let odd = fft(&odd, direction);

            let root = get_root_of_unity(n, direction);
            let twiddles = get_power_series(root, n / 2);
            let twisted: Vec<Complex64> =
                odd.iter().zip(twiddles.iter()).map(|(&o, &t)| o * t).collect();

            let mut result = Vec::with_capacity(n);
            result.extend(even.iter().zip(twisted.iter()).map(|(&e, &t)| e + t));
            result.extend(even.iter().zip(twisted.iter()).map(|(&e, &t)| e - t));
            result
        },
    }
}

/// Returns the primitive n-th root of unity `e^{2πi/n}` for the forward
/// transform, or `e^{-2πi/n}` for the inverse transform.
pub(super) fn get_root_of_unity(n: usize, direction: Direction) -> Complex64 {
    Complex64::from_polar(1.0, direction.angle_sign() * 2.0 * PI / n as f64)
}
