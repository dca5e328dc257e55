// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change records and how they apply to a canvas.

use core::mem;

use easel_canvas::{Canvas, CanvasError, Collide, DrawableObject, ObjectKey};
use easel_history::Command;
use easel_transform::{CoordinateSpace, SingularTransform, Transform};

/// A committed transform, with its inverse computed up front.
///
/// Construction fails for singular transforms, so every recorded
/// transformation can be undone.
///
/// The first apply also remembers the object's committed transform just
/// before and just after it. Undo and redo write those values back, so any
/// number of undo/redo cycles reproduces them exactly. The inverse is only
/// composed when reverting a record that was never applied through
/// [`Command::apply`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformationChange {
    key: ObjectKey,
    transform: Transform,
    inverse: Transform,
    space: CoordinateSpace,
    /// Committed transforms `(before, after)` from the first apply.
    committed: Option<(Transform, Transform)>,
}

impl TransformationChange {
    /// Records `transform` on `key`, composed in `space`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularTransform`] if `transform` has no inverse.
    pub fn new(
        key: ObjectKey,
        transform: Transform,
        space: CoordinateSpace,
    ) -> Result<Self, SingularTransform> {
        let inverse = transform.try_inverse()?;
        Ok(Self {
            key,
            transform,
            inverse,
            space,
            committed: None,
        })
    }

    /// The transformed object.
    #[must_use]
    pub fn key(&self) -> ObjectKey {
        self.key
    }

    /// The transform composed on apply.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The transform composed on revert.
    #[must_use]
    pub fn inverse(&self) -> Transform {
        self.inverse
    }

    /// Composition order for both directions.
    #[must_use]
    pub fn space(&self) -> CoordinateSpace {
        self.space
    }

    /// The object's committed transform before and after this change, once
    /// it has been applied.
    #[must_use]
    pub fn committed(&self) -> Option<(Transform, Transform)> {
        self.committed
    }

    fn apply<T: Collide>(&mut self, canvas: &mut Canvas<T>) -> Result<(), CanvasError> {
        if let Some((_, after)) = self.committed {
            return canvas.set_transform(self.key, after).map(drop);
        }
        let before = canvas
            .get(self.key)
            .ok_or(CanvasError::ObjectNotFound(self.key))?
            .transform();
        canvas.apply_transform(self.key, self.transform, self.space)?;
        let after = canvas
            .get(self.key)
            .ok_or(CanvasError::ObjectNotFound(self.key))?
            .transform();
        self.committed = Some((before, after));
        Ok(())
    }

    fn revert<T: Collide>(&mut self, canvas: &mut Canvas<T>) -> Result<(), CanvasError> {
        match self.committed {
            Some((before, _)) => canvas.set_transform(self.key, before).map(drop),
            None => canvas
                .apply_transform(self.key, self.inverse, self.space)
                .map(drop),
        }
    }
}

/// One undoable edit of a [`Canvas`].
///
/// Records that add or remove an object hold it while it is off the canvas:
/// `object` is `Some` exactly when the record's last action took it off.
#[derive(Clone, Debug)]
pub enum Change<T> {
    /// A transform committed onto an object.
    Transformation(TransformationChange),
    /// An object placed on the canvas.
    Creation {
        /// Key of the created object.
        key: ObjectKey,
        /// The object while creation is undone.
        object: Option<DrawableObject<T>>,
    },
    /// An object taken off the canvas.
    Deletion {
        /// Key of the deleted object.
        key: ObjectKey,
        /// The object while deletion is in effect.
        object: Option<DrawableObject<T>>,
    },
    /// A draw-order change.
    Reorder {
        /// Key of the reordered object.
        key: ObjectKey,
        /// Draw order before the change.
        from: i32,
        /// Draw order after the change.
        to: i32,
    },
    /// An item replaced in place, e.g. after its label or script was edited.
    ///
    /// Applying and reverting both swap `item` with the object's item, so the
    /// record always holds the version that is not on the canvas.
    Edit {
        /// Key of the edited object.
        key: ObjectKey,
        /// The item currently off the canvas.
        item: T,
    },
}

impl<T> Change<T> {
    /// The object this record refers to.
    #[must_use]
    pub fn key(&self) -> ObjectKey {
        match self {
            Self::Transformation(change) => change.key,
            Self::Creation { key, .. }
            | Self::Deletion { key, .. }
            | Self::Reorder { key, .. }
            | Self::Edit { key, .. } => *key,
        }
    }
}

impl<T: Collide> Command<Canvas<T>> for Change<T> {
    type Error = CanvasError;

    fn apply(&mut self, canvas: &mut Canvas<T>) -> Result<(), CanvasError> {
        match self {
            Self::Transformation(change) => change.apply(canvas),
            Self::Creation { key, object } => put_back(canvas, *key, object),
            Self::Deletion { key, object } => take_off(canvas, *key, object),
            Self::Reorder { key, to, .. } => canvas.set_draw_order(*key, *to).map(drop),
            Self::Edit { key, item } => swap_item(canvas, *key, item),
        }
    }

    fn revert(&mut self, canvas: &mut Canvas<T>) -> Result<(), CanvasError> {
        match self {
            Self::Transformation(change) => change.revert(canvas),
            Self::Creation { key, object } => take_off(canvas, *key, object),
            Self::Deletion { key, object } => put_back(canvas, *key, object),
            Self::Reorder { key, from, .. } => canvas.set_draw_order(*key, *from).map(drop),
            Self::Edit { key, item } => swap_item(canvas, *key, item),
        }
    }
}

fn take_off<T>(
    canvas: &mut Canvas<T>,
    key: ObjectKey,
    held: &mut Option<DrawableObject<T>>,
) -> Result<(), CanvasError> {
    if held.is_some() {
        return Err(CanvasError::ObjectNotFound(key));
    }
    *held = Some(canvas.remove(key)?);
    Ok(())
}

fn put_back<T>(
    canvas: &mut Canvas<T>,
    key: ObjectKey,
    held: &mut Option<DrawableObject<T>>,
) -> Result<(), CanvasError> {
    if !canvas.is_vacant(key) {
        return Err(if canvas.contains(key) {
            CanvasError::KeyInUse(key)
        } else {
            CanvasError::ObjectNotFound(key)
        });
    }
    let object = held.take().ok_or(CanvasError::KeyInUse(key))?;
    canvas.restore(key, object)
}

fn swap_item<T>(canvas: &mut Canvas<T>, key: ObjectKey, held: &mut T) -> Result<(), CanvasError> {
    let current = canvas
        .item_mut(key)
        .ok_or(CanvasError::ObjectNotFound(key))?;
    mem::swap(current, held);
    Ok(())
}
