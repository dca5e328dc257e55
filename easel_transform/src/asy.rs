// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Transform;

/// A transform in the drawing language's own tuple order.
///
/// Asymptote writes a transform as `(x, y, xx, xy, yx, yy)`, mapping a point
/// `(px, py)` to `(x + xx*px + xy*py, y + yx*px + yy*py)`. Script items store
/// their transforms this way; conversions to and from [`Transform`] are total.
///
/// The [`Display`](fmt::Display) impl writes the literal tuple, e.g.
/// `(1, 2, 1, 0, 0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsyTransform {
    /// Translation along x.
    pub x: f64,
    /// Translation along y.
    pub y: f64,
    /// Contribution of input x to output x.
    pub xx: f64,
    /// Contribution of input y to output x.
    pub xy: f64,
    /// Contribution of input x to output y.
    pub yx: f64,
    /// Contribution of input y to output y.
    pub yy: f64,
}

impl AsyTransform {
    /// The identity tuple `(0, 0, 1, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);

    /// Creates a tuple in Asymptote's argument order.
    #[must_use]
    pub const fn new(x: f64, y: f64, xx: f64, xy: f64, yx: f64, yy: f64) -> Self {
        Self {
            x,
            y,
            xx,
            xy,
            yx,
            yy,
        }
    }
}

impl Default for AsyTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AsyTransform> for Transform {
    fn from(t: AsyTransform) -> Self {
        Self::from_coeffs([t.xx, t.yx, t.xy, t.yy, t.x, t.y])
    }
}

impl From<Transform> for AsyTransform {
    fn from(t: Transform) -> Self {
        let [a, b, c, d, e, f] = t.coeffs();
        Self::new(e, f, a, c, b, d)
    }
}

impl fmt::Display for AsyTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {}, {})",
            self.x, self.y, self.xx, self.xy, self.yx, self.yy
        )
    }
}
