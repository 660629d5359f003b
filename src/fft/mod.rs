// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! FFT-based polynomial multiplication.
//!
//! Functions in this module multiply polynomials in O(`n` log `n`) by
//! evaluating both operands at complex roots of unity, multiplying the
//! evaluations pointwise, and interpolating the product back into
//! coefficient form. As compared to the direct convolution available in the
//! `polynom` module, this is much more efficient for large operands, at the
//! cost of carrying the computation through floating-point complex
//! arithmetic: the final interpolation validates that every coefficient
//! rounds back to an exact integer within fixed tolerances.

use num_complex::Complex64;

use crate::errors::PolynomialError;

mod serial;
use serial::Direction;


// CONSTANTS
// ================================================================================================

/// Largest imaginary component an interpolated coefficient may retain.
const MAX_IMAGINARY_ERROR: f64 = 0.001;

/// Largest distance from an integer an interpolated coefficient's real part
/// may have.
const MAX_REAL_ROUNDING_ERROR: f64 = 0.01;

// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at all n-th roots of unity, where n is the
/// length of `p` padded with zeros to the next power of two.
///
/// The evaluations are returned in the order produced by the radix-2
/// recursive transform; [interpolate()] inverts exactly this order.
pub fn evaluate(p: &[i64]) -> Vec<Complex64> {
    let values = to_complex_padded(p, p.len().next_power_of_two());
    serial::fft(&values, Direction::Forward)
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Interpolates evaluations at the n-th roots of unity back into an integer
/// coefficient sequence of length n.
///
/// Runs the inverse transform (negated root-of-unity exponent), scales every
/// value by 1/n, and rounds the results to integers.
///
/// # Errors
/// Returns an error if any scaled value retains an imaginary component with
/// magnitude above 0.001, or a real part further than 0.01 from the nearest
/// integer. Such a failure is deterministic for the given input; retrying
/// cannot succeed.
///
/// # Panics
/// Panics if the length of `points` is not a power of two.
pub fn interpolate(points: &[Complex64]) -> Result<Vec<i64>, PolynomialError> {
    assert!(points.len().is_power_of_two(), "number of points must be a power of 2");

    let inv_length = 1.0 / points.len() as f64;
    serial::fft(points, Direction::Inverse)
        .into_iter()
        .map(|value| round_to_int(value * inv_length))
        .collect()
}

// POLYNOMIAL MULTIPLICATION
// ================================================================================================

/// Multiplies polynomial `a` by polynomial `b` using the FFT algorithm; the
/// result has length `a.len() + b.len() - 1`, matching [polynom::mul()].
///
/// Both operands are padded to the same power-of-two length covering the
/// full convolution, so the pointwise products correspond exactly to the
/// convolution without wraparound.
///
/// # Errors
/// Returns an error if the inverse transform exceeds its numeric precision
/// tolerances; see [interpolate()].
///
/// [polynom::mul()]: crate::polynom::mul
pub fn mul(a: &[i64], b: &[i64]) -> Result<Vec<i64>, PolynomialError> {
    let result_len = a.len() + b.len() - 1;
    let domain_size = result_len.next_power_of_two();

    let a_points = serial::fft(&to_complex_padded(a, domain_size), Direction::Forward);
    let b_points = serial::fft(&to_complex_padded(b, domain_size), Direction::Forward);

    let products: Vec<Complex64> =
        a_points.iter().zip(b_points.iter()).map(|(&x, &y)| x * y).collect();

    let mut result = interpolate(&products)?;
    result.truncate(result_len);
    Ok(result)
}

// HELPER FUNCTIONS
// ================================================================================================

fn to_complex_padded(p: &[i64], domain_size: usize) -> Vec<Complex64> {
    let mut values: Vec<Complex64> =
        p.iter().map(|&coeff| Complex64::new(coeff as f64, 0.0)).collect();
    values.resize(domain_size, Complex64::new(0.0, 0.0));
    values
}

fn round_to_int(value: Complex64) -> Result<i64, PolynomialError> {
    if value.im.abs() > MAX_IMAGINARY_ERROR {
        return Err(PolynomialError::ResidualImaginary(value.im));
    }

    let rounded = value.re.round();
    if (value.re - rounded).abs() > MAX_REAL_ROUNDING_ERROR {
        return Err(PolynomialError::NonIntegerCoefficient(value.re));
    }

    Ok(rounded as i64)
}
