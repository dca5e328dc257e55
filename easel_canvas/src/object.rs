// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_transform::Transform;
use kurbo::{Point, Rect};

use crate::{Collide, ObjectFlags};

/// A user-visible item placed on the canvas.
///
/// Wraps the embedding application's item (a script, label, or shape) with the
/// state the editing kernel manages:
/// - The committed [`Transform`] from item space to canvas space.
/// - A draw order. Higher is drawn on top and wins overlapping hit tests.
/// - [`ObjectFlags`] for visibility and picking.
///
/// The committed transform can only be changed through
/// [`Canvas::apply_transform`](crate::Canvas::apply_transform) once the object
/// is on a canvas.
#[derive(Clone, Debug)]
pub struct DrawableObject<T> {
    /// The application item, including its local geometry.
    pub item: T,
    pub(crate) transform: Transform,
    pub(crate) draw_order: i32,
    pub(crate) flags: ObjectFlags,
}

impl<T> DrawableObject<T> {
    /// Wraps `item` with an identity transform, draw order `0`, and default flags.
    #[must_use]
    pub fn new(item: T) -> Self {
        Self {
            item,
            transform: Transform::IDENTITY,
            draw_order: 0,
            flags: ObjectFlags::default(),
        }
    }

    /// Sets the initial transform, typically the one loaded from the script.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the initial draw order.
    #[must_use]
    pub fn with_draw_order(mut self, draw_order: i32) -> Self {
        self.draw_order = draw_order;
        self
    }

    /// Sets the initial flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ObjectFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The committed transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The draw order.
    #[must_use]
    pub fn draw_order(&self) -> i32 {
        self.draw_order
    }

    /// The current flags.
    #[must_use]
    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }
}

impl<T: Collide> DrawableObject<T> {
    /// Bounds in item space.
    #[must_use]
    pub fn local_bounds(&self) -> Rect {
        self.item.local_bounds()
    }

    /// Conservative canvas-space bounds under the committed transform.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.item.local_bounds())
    }

    /// Returns `true` if the canvas-space point `pt` lies on this object.
    ///
    /// The point is mapped into item space through the inverse of the
    /// committed transform. An object whose transform is singular has
    /// collapsed to zero area and never collides.
    #[must_use]
    pub fn collide(&self, pt: Point) -> bool {
        match self.transform.try_inverse() {
            Ok(inv) => self.item.collide_local(inv.apply(pt)),
            Err(_) => false,
        }
    }
}
