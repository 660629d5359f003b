// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate implements univariate polynomials with integer coefficients and
//! two interchangeable multiplication algorithms: a direct O(n·m) convolution
//! and an O(n log n) FFT-based pipeline which evaluates both operands at
//! complex roots of unity, multiplies pointwise, and interpolates the product
//! back into coefficient form.

pub mod fft;
pub mod polynom;
pub mod utils;

mod errors;
pub use errors::PolynomialError;

pub use polynom::{MulAlgorithm, Polynomial};
