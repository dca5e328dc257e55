// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::SingularTransform;

/// An immutable 2D affine map.
///
/// The six coefficients `[a, b, c, d, e, f]` describe the homogeneous matrix
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// which is exactly the layout of [`kurbo::Affine`]. `Transform` never mutates
/// in place: every operation returns a new value.
///
/// Composition is associative but not commutative. [`Transform::compose`]
/// takes its arguments in mathematical order (`outer ∘ inner`), while
/// [`Transform::then`] reads left to right (`self` first, then `next`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(Affine);

impl Transform {
    /// The identity map.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Creates a transform from its six coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn from_coeffs(coeffs: [f64; 6]) -> Self {
        Self(Affine::new(coeffs))
    }

    /// Returns the six coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub fn coeffs(self) -> [f64; 6] {
        self.0.as_coeffs()
    }

    /// Returns the equivalent [`kurbo::Affine`].
    #[must_use]
    pub const fn to_affine(self) -> Affine {
        self.0
    }

    /// A pure translation by `offset`.
    #[must_use]
    pub fn translate(offset: Vec2) -> Self {
        Self(Affine::translate(offset))
    }

    /// A rotation by `theta` radians (counter-clockwise in a y-up space) about `pivot`.
    ///
    /// Defined as `translate(pivot) ∘ rotate(theta) ∘ translate(-pivot)`.
    #[must_use]
    pub fn rotate_about(theta: f64, pivot: Point) -> Self {
        let pivot = pivot.to_vec2();
        Self(Affine::translate(pivot) * Affine::rotate(theta) * Affine::translate(-pivot))
    }

    /// A (possibly non-uniform) scale about `pivot`.
    ///
    /// Defined as `translate(pivot) ∘ scale(sx, sy) ∘ translate(-pivot)`.
    #[must_use]
    pub fn scale_about(sx: f64, sy: f64, pivot: Point) -> Self {
        let pivot = pivot.to_vec2();
        Self(
            Affine::translate(pivot)
                * Affine::scale_non_uniform(sx, sy)
                * Affine::translate(-pivot),
        )
    }

    /// Returns `outer ∘ inner`: the map that applies `inner` first, then `outer`.
    #[must_use]
    pub fn compose(outer: Self, inner: Self) -> Self {
        Self(outer.0 * inner.0)
    }

    /// Returns the map that applies `self` first, then `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::compose(next, self)
    }

    /// Determinant of the 2×2 linear block.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.0.determinant()
    }

    /// Returns `true` if the linear block can be inverted.
    #[must_use]
    pub fn is_invertible(self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    /// Returns the inverse map.
    ///
    /// # Errors
    ///
    /// Returns [`SingularTransform`] when the determinant of the linear block
    /// is zero (or not finite), in which case no inverse exists.
    pub fn try_inverse(self) -> Result<Self, SingularTransform> {
        if !self.is_invertible() {
            return Err(SingularTransform {
                determinant: self.determinant(),
            });
        }
        Ok(Self(self.0.inverse()))
    }

    /// Maps a point.
    #[must_use]
    pub fn apply(self, pt: Point) -> Point {
        self.0 * pt
    }

    /// The translation part `(e, f)`.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        self.0.translation()
    }

    /// Conservative axis-aligned bounds of `rect` after mapping.
    #[must_use]
    pub fn transform_rect_bbox(self, rect: Rect) -> Rect {
        self.0.transform_rect_bbox(rect)
    }

    /// Coefficient-wise comparison within `epsilon`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        self.coeffs()
            .iter()
            .zip(other.coeffs().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Returns `true` if this is exactly the identity.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for Transform {
    fn from(affine: Affine) -> Self {
        Self(affine)
    }
}

impl From<Transform> for Affine {
    fn from(transform: Transform) -> Self {
        transform.0
    }
}

impl From<[f64; 6]> for Transform {
    fn from(coeffs: [f64; 6]) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl From<Transform> for [f64; 6] {
    fn from(transform: Transform) -> Self {
        transform.coeffs()
    }
}

/// `a * b` is `a ∘ b`, matching Kurbo's convention.
impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::compose(self, rhs)
    }
}

impl Mul<Point> for Transform {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        self.apply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn translate_moves_points() {
        let t = Transform::translate(Vec2::new(3.0, -2.0));
        assert_point_eq(t.apply(Point::new(1.0, 1.0)), Point::new(4.0, -1.0));
    }

    #[test]
    fn rotate_about_keeps_pivot_fixed() {
        let pivot = Point::new(5.0, 5.0);
        let t = Transform::rotate_about(FRAC_PI_2, pivot);
        assert_point_eq(t.apply(pivot), pivot);
        assert_point_eq(t.apply(Point::new(6.0, 5.0)), Point::new(5.0, 6.0));
    }

    #[test]
    fn scale_about_keeps_pivot_fixed() {
        let pivot = Point::new(10.0, 0.0);
        let t = Transform::scale_about(2.0, 3.0, pivot);
        assert_point_eq(t.apply(pivot), pivot);
        assert_point_eq(t.apply(Point::new(11.0, 1.0)), Point::new(12.0, 3.0));
    }

    #[test]
    fn compose_and_then_agree() {
        let a = Transform::rotate_about(0.3, Point::ZERO);
        let b = Transform::translate(Vec2::new(1.0, 2.0));
        assert_eq!(Transform::compose(b, a), a.then(b));
        assert_eq!(a * b, Transform::compose(a, b));
    }

    #[test]
    fn composition_is_not_commutative() {
        let r = Transform::rotate_about(FRAC_PI_2, Point::ZERO);
        let t = Transform::translate(Vec2::new(10.0, 0.0));
        assert!(!Transform::compose(r, t).approx_eq(Transform::compose(t, r), EPS));
    }

    #[test]
    fn inverse_round_trips_to_identity() {
        let t = Transform::rotate_about(0.7, Point::new(3.0, 4.0))
            .then(Transform::scale_about(2.0, 0.5, Point::new(-1.0, 2.0)))
            .then(Transform::translate(Vec2::new(7.0, -3.0)));
        let inv = t.try_inverse().unwrap();
        assert!(Transform::compose(t, inv).approx_eq(Transform::IDENTITY, EPS));
        assert!(Transform::compose(inv, t).approx_eq(Transform::IDENTITY, EPS));
    }

    #[test]
    fn zero_scale_is_singular() {
        let t = Transform::scale_about(0.0, 1.0, Point::new(2.0, 2.0));
        assert!(!t.is_invertible());
        let err = t.try_inverse().unwrap_err();
        assert_eq!(err.determinant, 0.0);
    }

    #[test]
    fn coefficient_layout_matches_kurbo() {
        let t = Transform::from_coeffs([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(t.to_affine(), Affine::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        assert_eq!(<[f64; 6]>::from(t), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(t.translation(), Vec2::new(5.0, 6.0));
    }
}
