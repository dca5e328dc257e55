// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Canvas: the drawable-object store of the editing kernel.
//!
//! A [`Canvas`] owns every [`DrawableObject`] the user can see and pick. Each
//! object pairs an application item (a script, label, or shape implementing
//! [`Collide`]) with kernel-managed state: its committed
//! [`Transform`](easel_transform::Transform), a draw order, and [`ObjectFlags`].
//!
//! - [`Canvas::insert`] issues an [`ObjectKey`]; keys are never reused.
//! - [`Canvas::remove`] / [`Canvas::restore`] move an object off and back on
//!   under the same key, which is what undo of creation/deletion needs.
//! - [`Canvas::apply_transform`] is the single commit path for transforms. It
//!   composes in local (`old ∘ new`) or global (`new ∘ old`) order and returns
//!   [`Damage`] so the caller can repaint synchronously.
//! - [`Canvas::hit_test`] finds the topmost pickable object under a point.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_canvas::{Canvas, DrawableObject};
//! use easel_transform::{CoordinateSpace, Transform};
//! use kurbo::{Point, Rect, Vec2};
//!
//! let mut canvas = Canvas::new();
//! let key = canvas.insert(DrawableObject::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), Some(key));
//!
//! let shift = Transform::translate(Vec2::new(100.0, 0.0));
//! let damage = canvas.apply_transform(key, shift, CoordinateSpace::Global).unwrap();
//! assert_eq!(damage.dirty_rects.len(), 2);
//! assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), None);
//! assert_eq!(canvas.hit_test(Point::new(105.0, 5.0)), Some(key));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod damage;
mod error;
mod hit;
mod object;
mod types;

pub use canvas::Canvas;
pub use damage::Damage;
pub use error::CanvasError;
pub use hit::{Collide, StrokedLine};
pub use object::DrawableObject;
pub use types::{ObjectFlags, ObjectKey};
