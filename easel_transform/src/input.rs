// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

use crate::{AsyTransform, NonAffineMatrix, Transform};

/// A transform as handed to the kernel by one of its collaborators.
///
/// Dialogs produce raw matrices, the toolkit layer produces [`kurbo::Affine`],
/// and script items carry [`AsyTransform`] tuples. All of them are resolved
/// once, at the boundary, into a [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformInput {
    /// A row-major homogeneous 3×3 matrix. The bottom row must be `[0, 0, 1]`.
    Matrix([[f64; 3]; 3]),
    /// A flat coefficient array `[a, b, c, d, e, f]`.
    Coeffs([f64; 6]),
    /// The toolkit's native representation.
    Native(Affine),
    /// The drawing language's `(x, y, xx, xy, yx, yy)` tuple.
    Asy(AsyTransform),
}

impl TransformInput {
    /// Resolves the input into a [`Transform`].
    ///
    /// # Errors
    ///
    /// Returns [`NonAffineMatrix`] for a [`TransformInput::Matrix`] whose
    /// bottom row is not exactly `[0, 0, 1]`. Every other variant always
    /// resolves.
    pub fn resolve(self) -> Result<Transform, NonAffineMatrix> {
        match self {
            Self::Matrix(m) => {
                if m[2] != [0.0, 0.0, 1.0] {
                    return Err(NonAffineMatrix { bottom_row: m[2] });
                }
                Ok(Transform::from_coeffs([
                    m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2],
                ]))
            }
            Self::Coeffs(c) => Ok(Transform::from_coeffs(c)),
            Self::Native(affine) => Ok(Transform::from(affine)),
            Self::Asy(asy) => Ok(Transform::from(asy)),
        }
    }
}

impl From<Transform> for TransformInput {
    fn from(t: Transform) -> Self {
        Self::Coeffs(t.coeffs())
    }
}

impl From<Affine> for TransformInput {
    fn from(affine: Affine) -> Self {
        Self::Native(affine)
    }
}

impl From<AsyTransform> for TransformInput {
    fn from(asy: AsyTransform) -> Self {
        Self::Asy(asy)
    }
}

/// Writes `t` as a row-major homogeneous 3×3 matrix.
#[must_use]
pub fn to_matrix(t: Transform) -> [[f64; 3]; 3] {
    let [a, b, c, d, e, f] = t.coeffs();
    [[a, c, e], [b, d, f], [0.0, 0.0, 1.0]]
}
