// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::{fmt, str::FromStr};

use crate::{errors::PolynomialError, fft, utils::remove_leading_zeros};


// MULTIPLICATION ALGORITHM
// ================================================================================================

/// Algorithm used to carry out polynomial multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MulAlgorithm {
    /// Direct convolution of coefficient sequences; O(n·m).
    #[default]
    Naive,
    /// FFT-based evaluation-interpolation pipeline; O(n log n).
    FastFourier,
}

impl FromStr for MulAlgorithm {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Self::Naive),
            "fast_fourier" => Ok(Self::FastFourier),
            _ => Err(PolynomialError::UnknownAlgorithm(s.to_string())),
        }
    }
}

// POLYNOMIAL
// ================================================================================================

/// A univariate polynomial with integer coefficients stored in ascending
/// power order: `coefficients[i]` is the coefficient of `x^i`.
///
/// The coefficient sequence is normalized at construction: trailing
/// (highest-power) zeros are stripped, except that the zero polynomial is
/// represented by the single-element sequence `[0]`. Instances are immutable;
/// multiplication produces a brand-new polynomial.
#[derive(Debug, Clone, Eq)]
pub struct Polynomial {
    coefficients: Vec<i64>,
    algorithm: MulAlgorithm,
}

impl Polynomial {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new polynomial with the specified coefficients, multiplied
    /// via the naive algorithm.
    ///
    /// # Errors
    /// Returns an error if `coefficients` is empty.
    pub fn new(coefficients: Vec<i64>) -> Result<Self, PolynomialError> {
        Self::with_algorithm(coefficients, MulAlgorithm::default())
    }

    /// Returns a new polynomial with the specified coefficients and
    /// multiplication algorithm.
    ///
    /// Trailing zero coefficients are stripped; an all-zero sequence of
    /// length one or greater normalizes to the zero polynomial `[0]`.
    ///
    /// # Errors
    /// Returns an error if `coefficients` is empty.
    pub fn with_algorithm(
        coefficients: Vec<i64>,
        algorithm: MulAlgorithm,
    ) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }

        let mut coefficients = remove_leading_zeros(&coefficients);
        if coefficients.is_empty() {
            coefficients.push(0);
        }

        Ok(Polynomial { coefficients, algorithm })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the normalized coefficient sequence of this polynomial.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the highest power with a representational slot in the
    /// coefficient sequence.
    pub fn max_power(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients == [0]
    }

    /// Returns the multiplication algorithm configured for this polynomial.
    pub fn algorithm(&self) -> MulAlgorithm {
        self.algorithm
    }

    // POLYNOMIAL OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Multiplies this polynomial by `other` and returns the normalized
    /// product. Dispatches to the algorithm configured for `self`; the
    /// product inherits that algorithm. Neither operand is mutated.
    ///
    /// # Errors
    /// Returns an error if the FFT round trip exceeds its numeric precision
    /// tolerances; the naive path cannot fail.
    pub fn mul(&self, other: &Self) -> Result<Self, PolynomialError> {
        let product = match self.algorithm {
            MulAlgorithm::Naive => mul(&self.coefficients, &other.coefficients),
            MulAlgorithm::FastFourier => fft::mul(&self.coefficients, &other.coefficients)?,
        };
        Self::with_algorithm(product, self.algorithm)
    }

    /// Evaluates this polynomial at coordinate `x`.
    pub fn eval(&self, x: f64) -> f64 {
        eval(&self.coefficients, x)
    }
}

impl PartialEq for Polynomial {
    // the configured multiplication algorithm does not participate in
    // polynomial equality
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl fmt::Display for Polynomial {
    /// Renders this polynomial in conventional form, highest power first:
    /// `2x^2 + x - 3`. Zero coefficients are omitted, a coefficient
    /// magnitude of 1 at power >= 1 omits the numeral, and the leading term
    /// carries no sign token (a negative leading coefficient glues a literal
    /// minus to the digits). The zero polynomial renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut leading = true;
        for power in (0..=self.max_power()).rev() {
            let coefficient = self.coefficients[power];
            if coefficient == 0 {
                continue;
            }

            if leading {
                if coefficient < 0 {
                    write!(f, "-")?;
                }
                leading = false;
            } else if coefficient > 0 {
                write!(f, " + ")?;
            } else {
                write!(f, " - ")?;
            }

            let magnitude = coefficient.unsigned_abs();
            if power == 0 {
                write!(f, "{magnitude}")?;
            } else {
                if magnitude != 1 {
                    write!(f, "{magnitude}")?;
                }
                if power == 1 {
                    write!(f, "x")?;
                } else {
                    write!(f, "x^{power}")?;
                }
            }
        }

        Ok(())
    }
}

// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at coordinate `x`.
pub fn eval(p: &[i64], x: f64) -> f64 {
    // Horner evaluation
    p.iter().rev().fold(0.0, |acc, &coeff| acc * x + coeff as f64)
}

// POLYNOMIAL MATH OPERATIONS
// ================================================================================================

/// Multiplies polynomial `a` by polynomial `b` via direct convolution of
/// their coefficient sequences; the result has length
/// `a.len() + b.len() - 1`.
pub fn mul(a: &[i64], b: &[i64]) -> Vec<i64> {
    let result_len = a.len() + b.len() - 1;
    let mut result = vec![0; result_len];
    for i in 0..a.len() {
        for j in 0..b.len() {
            result[i + j] += a[i] * b[j];
        }
    }
    result
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns degree of the polynomial `poly`
pub fn degree_of(poly: &[i64]) -> usize {
    for i in (0..poly.len()).rev() {
        if poly[i] != 0 {
            return i;
        }
    }
    0
}
