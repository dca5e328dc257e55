// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Transform: immutable 2D affine transforms for the editing kernel.
//!
//! [`Transform`] is a small `Copy` value over [`kurbo::Affine`] that adds what
//! an undo-capable editor needs on top of Kurbo:
//! - Named constructors for the three direct-manipulation gestures
//!   (translate, rotate about a pivot, scale about a pivot).
//! - Explicitly ordered composition ([`Transform::compose`] / [`Transform::then`]),
//!   so callers can tell "apply B then A" from "apply A then B".
//! - Checked inversion: [`Transform::try_inverse`] fails with
//!   [`SingularTransform`] instead of producing non-finite coefficients.
//!
//! It also provides the boundary types used to bring transforms in from
//! collaborators:
//! - [`AsyTransform`]: the drawing language's `(x, y, xx, xy, yx, yy)` tuple.
//! - [`TransformInput`]: a sum type over raw matrices, flat coefficient arrays,
//!   toolkit-native [`kurbo::Affine`] values, and [`AsyTransform`] tuples,
//!   resolved once into a [`Transform`].
//! - [`CoordinateSpace`]: whether a committed transform composes before (local)
//!   or after (global) an object's existing transform.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use easel_transform::Transform;
//!
//! let rotate = Transform::rotate_about(core::f64::consts::FRAC_PI_2, Point::ZERO);
//! let shift = Transform::translate(Vec2::new(10.0, 0.0));
//!
//! // Rotate first, then shift.
//! let t = rotate.then(shift);
//! let p = t.apply(Point::new(1.0, 0.0));
//! assert!((p.x - 10.0).abs() < 1e-9 && (p.y - 1.0).abs() < 1e-9);
//!
//! // Every invertible transform round-trips.
//! let back = Transform::compose(t, t.try_inverse().unwrap());
//! assert!(back.approx_eq(Transform::IDENTITY, 1e-9));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod asy;
mod error;
mod input;
mod space;
mod transform;

pub use asy::AsyTransform;
pub use error::{NonAffineMatrix, SingularTransform};
pub use input::{TransformInput, to_matrix};
pub use space::CoordinateSpace;
pub use transform::Transform;
