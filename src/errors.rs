// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Defines errors which can occur when constructing or multiplying
/// polynomials.
#[derive(Error, Debug, PartialEq)]
pub enum PolynomialError {
    /// The supplied coefficient sequence was empty.
    #[error("coefficient sequence is empty")]
    EmptyCoefficients,

    /// The requested multiplication algorithm tag is not recognized.
    #[error("unknown multiplication algorithm: {0}")]
    UnknownAlgorithm(String),

    /// An interpolated coefficient retained a non-negligible imaginary
    /// component after the inverse transform.
    #[error("interpolated coefficient has non-negligible imaginary component {0}")]
    ResidualImaginary(f64),

    /// An interpolated coefficient's real part is too far from an integer
    /// to round safely.
    #[error("interpolated coefficient {0} is not within rounding tolerance of an integer")]
    NonIntegerCoefficient(f64),
}
