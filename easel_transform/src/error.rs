// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced when building or inverting transforms.

use core::fmt;

/// Error returned when inverting a transform whose linear block has no inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingularTransform {
    /// Determinant of the 2×2 linear block (zero or not finite).
    pub determinant: f64,
}

impl fmt::Display for SingularTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform is not invertible (determinant {})",
            self.determinant
        )
    }
}

impl core::error::Error for SingularTransform {}

/// Error returned when a homogeneous 3×3 matrix does not describe an affine map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonAffineMatrix {
    /// The offending bottom row; an affine matrix has `[0, 0, 1]`.
    pub bottom_row: [f64; 3],
}

impl fmt::Display for NonAffineMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, w] = self.bottom_row;
        write!(
            f,
            "matrix is not affine: bottom row is [{x}, {y}, {w}], expected [0, 0, 1]"
        )
    }
}

impl core::error::Error for NonAffineMatrix {}
