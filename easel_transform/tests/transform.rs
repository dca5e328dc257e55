// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `easel_transform` crate.
//!
//! These check the algebraic contract the undo stack relies on: invertible
//! transforms compose with their inverse to the identity, and composition
//! order is observable.

use core::f64::consts::PI;

use easel_transform::{AsyTransform, Transform, TransformInput};
use kurbo::{Point, Vec2};

const EPS: f64 = 1e-9;

fn sample_transforms() -> Vec<Transform> {
    let pivots = [Point::ZERO, Point::new(12.5, -3.0), Point::new(-100.0, 40.0)];
    let mut out = Vec::new();
    for (i, pivot) in pivots.iter().enumerate() {
        let i = i as f64;
        out.push(Transform::translate(Vec2::new(3.0 * i - 7.0, 11.0 - i)));
        out.push(Transform::rotate_about(PI / (i + 3.0), *pivot));
        out.push(Transform::scale_about(0.5 + i, 2.0 - 0.25 * i, *pivot));
        out.push(
            Transform::rotate_about(-0.4 * (i + 1.0), *pivot)
                .then(Transform::scale_about(1.5, -0.75, Point::new(i, i)))
                .then(Transform::translate(Vec2::new(i, -i))),
        );
    }
    out
}

#[test]
fn compose_with_inverse_is_identity() {
    for t in sample_transforms() {
        let inv = t.try_inverse().expect("sample transforms are invertible");
        assert!(
            Transform::compose(t, inv).approx_eq(Transform::IDENTITY, EPS),
            "t ∘ t⁻¹ != identity for {t:?}"
        );
        assert!(
            Transform::compose(inv, t).approx_eq(Transform::IDENTITY, EPS),
            "t⁻¹ ∘ t != identity for {t:?}"
        );
    }
}

#[test]
fn composition_is_associative() {
    let ts = sample_transforms();
    for w in ts.windows(3) {
        let (a, b, c) = (w[0], w[1], w[2]);
        let left = Transform::compose(Transform::compose(a, b), c);
        let right = Transform::compose(a, Transform::compose(b, c));
        assert!(left.approx_eq(right, 1e-6), "{left:?} vs {right:?}");
    }
}

#[test]
fn rotate_then_translate_differs_from_translate_then_rotate() {
    let rotate = Transform::rotate_about(PI / 2.0, Point::ZERO);
    let translate = Transform::translate(Vec2::new(5.0, 0.0));

    let p = Point::new(1.0, 0.0);
    let a = rotate.then(translate).apply(p);
    let b = translate.then(rotate).apply(p);

    assert!((a - Point::new(5.0, 1.0)).hypot() < EPS);
    assert!((b - Point::new(0.0, 6.0)).hypot() < EPS);
}

#[test]
fn singular_inputs_resolve_but_do_not_invert() {
    let flat = TransformInput::Asy(AsyTransform::new(1.0, 1.0, 1.0, 2.0, 2.0, 4.0))
        .resolve()
        .unwrap();
    assert!(!flat.is_invertible());
    assert!(flat.try_inverse().is_err());
}
