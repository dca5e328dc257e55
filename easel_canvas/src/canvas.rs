// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use easel_transform::{CoordinateSpace, Transform};
use kurbo::Point;

use crate::{CanvasError, Collide, Damage, DrawableObject, ObjectFlags, ObjectKey};

/// Keyed store of [`DrawableObject`]s.
///
/// The store is append-only: every insert issues a new [`ObjectKey`], and a
/// removed object leaves a vacant slot that only [`Canvas::restore`] can fill.
#[derive(Clone, Debug)]
pub struct Canvas<T> {
    slots: Vec<Option<DrawableObject<T>>>,
    live: usize,
}

impl<T> Default for Canvas<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Canvas<T> {
    /// Creates an empty canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }

    /// Number of objects currently on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no objects are on the canvas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns `true` if `key` currently refers to an object.
    #[must_use]
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if `key` was issued by this canvas but its object is
    /// currently removed, i.e. [`Canvas::restore`] would accept it.
    #[must_use]
    pub fn is_vacant(&self, key: ObjectKey) -> bool {
        matches!(self.slots.get(key.idx()), Some(None))
    }

    /// Looks up an object.
    #[must_use]
    pub fn get(&self, key: ObjectKey) -> Option<&DrawableObject<T>> {
        self.slots.get(key.idx()).and_then(Option::as_ref)
    }

    /// Looks up an object's item for mutation.
    ///
    /// Only the item is exposed; the committed transform stays behind
    /// [`Canvas::apply_transform`].
    pub fn item_mut(&mut self, key: ObjectKey) -> Option<&mut T> {
        self.slot_mut(key).ok().map(|obj| &mut obj.item)
    }

    /// Iterates over live objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &DrawableObject<T>)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.as_ref().map(|obj| (key_for(idx), obj))
        })
    }

    /// Places `object` on the canvas under a fresh key.
    pub fn insert(&mut self, object: DrawableObject<T>) -> ObjectKey {
        let key = key_for(self.slots.len());
        self.slots.push(Some(object));
        self.live += 1;
        log::trace!("inserted {key}");
        key
    }

    /// Takes an object off the canvas, leaving its key vacant.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ObjectNotFound`] if `key` holds no object.
    pub fn remove(&mut self, key: ObjectKey) -> Result<DrawableObject<T>, CanvasError> {
        let object = self
            .slots
            .get_mut(key.idx())
            .and_then(Option::take)
            .ok_or(CanvasError::ObjectNotFound(key))?;
        self.live -= 1;
        log::trace!("removed {key}");
        Ok(object)
    }

    /// Puts a previously removed object back under its original key.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ObjectNotFound`] if `key` was never issued by this
    /// canvas, and [`CanvasError::KeyInUse`] if it still holds an object.
    pub fn restore(&mut self, key: ObjectKey, object: DrawableObject<T>) -> Result<(), CanvasError> {
        let slot = self
            .slots
            .get_mut(key.idx())
            .ok_or(CanvasError::ObjectNotFound(key))?;
        if slot.is_some() {
            return Err(CanvasError::KeyInUse(key));
        }
        *slot = Some(object);
        self.live += 1;
        log::trace!("restored {key}");
        Ok(())
    }

    /// Changes an object's draw order, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ObjectNotFound`] if `key` holds no object.
    pub fn set_draw_order(&mut self, key: ObjectKey, draw_order: i32) -> Result<i32, CanvasError> {
        let obj = self.slot_mut(key)?;
        Ok(core::mem::replace(&mut obj.draw_order, draw_order))
    }

    /// Changes an object's flags, returning the previous ones.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ObjectNotFound`] if `key` holds no object.
    pub fn set_flags(&mut self, key: ObjectKey, flags: ObjectFlags) -> Result<ObjectFlags, CanvasError> {
        let obj = self.slot_mut(key)?;
        Ok(core::mem::replace(&mut obj.flags, flags))
    }

    /// Highest draw order among live objects, if any.
    #[must_use]
    pub fn max_draw_order(&self) -> Option<i32> {
        self.iter().map(|(_, obj)| obj.draw_order).max()
    }

    /// Lowest draw order among live objects, if any.
    #[must_use]
    pub fn min_draw_order(&self) -> Option<i32> {
        self.iter().map(|(_, obj)| obj.draw_order).min()
    }

    /// Visible objects in paint order: ascending draw order, ties by insertion.
    #[must_use]
    pub fn draw_list(&self) -> Vec<ObjectKey> {
        let mut keys: Vec<(i32, ObjectKey)> = self
            .iter()
            .filter(|(_, obj)| obj.flags.contains(ObjectFlags::VISIBLE))
            .map(|(key, obj)| (obj.draw_order, key))
            .collect();
        keys.sort_unstable();
        keys.into_iter().map(|(_, key)| key).collect()
    }

    fn slot_mut(&mut self, key: ObjectKey) -> Result<&mut DrawableObject<T>, CanvasError> {
        self.slots
            .get_mut(key.idx())
            .and_then(Option::as_mut)
            .ok_or(CanvasError::ObjectNotFound(key))
    }
}

impl<T: Collide> Canvas<T> {
    /// Commits `transform` onto an object's existing transform.
    ///
    /// - [`CoordinateSpace::Global`]: the new committed transform is `transform ∘ old`.
    /// - [`CoordinateSpace::Local`]: the new committed transform is `old ∘ transform`.
    ///
    /// Returns the damage (old and new world bounds) so the caller can
    /// repaint immediately.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ObjectNotFound`] if `key` holds no object.
    pub fn apply_transform(
        &mut self,
        key: ObjectKey,
        transform: Transform,
        space: CoordinateSpace,
    ) -> Result<Damage, CanvasError> {
        let obj = self.slot_mut(key)?;
        let before = obj.world_bounds();
        obj.transform = space.compose(obj.transform, transform);
        let after = obj.world_bounds();
        log::trace!("{key}: committed {space:?} transform, now {:?}", obj.transform);

        let mut damage = Damage::from_rect(before);
        damage.dirty_rects.push(after);
        Ok(damage)
    }

    /// Replaces an object's committed transform outright.
    ///
    /// Used to restore a transform recorded earlier, bit for bit. Returns the
    /// damage like [`Canvas::apply_transform`].
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ObjectNotFound`] if `key` holds no object.
    pub fn set_transform(&mut self, key: ObjectKey, transform: Transform) -> Result<Damage, CanvasError> {
        let obj = self.slot_mut(key)?;
        let before = obj.world_bounds();
        obj.transform = transform;
        let after = obj.world_bounds();
        log::trace!("{key}: transform set to {transform:?}");

        let mut damage = Damage::from_rect(before);
        damage.dirty_rects.push(after);
        Ok(damage)
    }

    /// Returns the topmost pickable object under the canvas-space point `pt`.
    ///
    /// Among colliding objects the highest draw order wins; ties go to the most
    /// recently inserted object.
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<ObjectKey> {
        self.iter()
            .filter(|(_, obj)| obj.flags.contains(ObjectFlags::PICKABLE) && obj.collide(pt))
            .max_by_key(|(key, obj)| (obj.draw_order, *key))
            .map(|(key, _)| key)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "slot counts beyond u32::MAX are not supported"
)]
fn key_for(idx: usize) -> ObjectKey {
    ObjectKey(idx as u32)
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};

    use super::*;

    fn square(x: f64, y: f64) -> DrawableObject<Rect> {
        DrawableObject::new(Rect::new(x, y, x + 10.0, y + 10.0))
    }

    #[test]
    fn keys_are_never_reused() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(square(0.0, 0.0));
        canvas.remove(a).unwrap();
        let b = canvas.insert(square(0.0, 0.0));
        assert_ne!(a, b);
        assert!(!canvas.contains(a));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn restore_fills_only_vacant_issued_keys() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(square(0.0, 0.0));
        assert!(!canvas.is_vacant(a));
        let obj = canvas.remove(a).unwrap();
        assert!(canvas.is_vacant(a));
        assert!(!canvas.is_vacant(ObjectKey(42)));
        assert_eq!(canvas.remove(a).unwrap_err(), CanvasError::ObjectNotFound(a));

        canvas.restore(a, obj.clone()).unwrap();
        assert!(canvas.contains(a));
        assert_eq!(canvas.restore(a, obj.clone()), Err(CanvasError::KeyInUse(a)));

        let never = ObjectKey(42);
        assert_eq!(canvas.restore(never, obj), Err(CanvasError::ObjectNotFound(never)));
    }

    #[test]
    fn apply_transform_reports_old_and_new_bounds() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(square(0.0, 0.0));
        let damage = canvas
            .apply_transform(a, Transform::translate(Vec2::new(5.0, 0.0)), CoordinateSpace::Global)
            .unwrap();
        assert_eq!(
            damage.dirty_rects,
            [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(5.0, 0.0, 15.0, 10.0)]
        );
    }

    #[test]
    fn set_transform_replaces_without_composing() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(square(0.0, 0.0).with_transform(Transform::translate(Vec2::new(1.0, 1.0))));
        let target = Transform::scale_about(2.0, 2.0, Point::ZERO);
        let damage = canvas.set_transform(a, target).unwrap();
        assert_eq!(canvas.get(a).unwrap().transform(), target);
        assert_eq!(
            damage.dirty_rects,
            [Rect::new(1.0, 1.0, 11.0, 11.0), Rect::new(0.0, 0.0, 20.0, 20.0)]
        );
        assert_eq!(
            canvas.set_transform(ObjectKey(7), target).unwrap_err(),
            CanvasError::ObjectNotFound(ObjectKey(7))
        );
    }

    #[test]
    fn apply_transform_on_missing_key_fails() {
        let mut canvas: Canvas<Rect> = Canvas::new();
        let err = canvas
            .apply_transform(ObjectKey(0), Transform::IDENTITY, CoordinateSpace::Local)
            .unwrap_err();
        assert_eq!(err, CanvasError::ObjectNotFound(ObjectKey(0)));
    }

    #[test]
    fn hit_test_prefers_highest_draw_order_then_newest() {
        let mut canvas = Canvas::new();
        let low = canvas.insert(square(0.0, 0.0).with_draw_order(5));
        let older = canvas.insert(square(0.0, 0.0).with_draw_order(1));
        let newer = canvas.insert(square(0.0, 0.0).with_draw_order(1));

        assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), Some(low));
        canvas.set_draw_order(low, 0).unwrap();
        assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), Some(newer));
        canvas.remove(newer).unwrap();
        assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), Some(older));
        assert_eq!(canvas.hit_test(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn unpickable_objects_are_skipped() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(square(0.0, 0.0));
        canvas.set_flags(a, ObjectFlags::VISIBLE).unwrap();
        assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), None);
        assert_eq!(canvas.draw_list(), [a]);
    }

    #[test]
    fn draw_list_sorts_by_order_then_insertion() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(square(0.0, 0.0).with_draw_order(2));
        let b = canvas.insert(square(0.0, 0.0).with_draw_order(-1));
        let c = canvas.insert(square(0.0, 0.0).with_draw_order(2));
        let hidden = canvas.insert(square(0.0, 0.0).with_flags(ObjectFlags::PICKABLE));
        assert_eq!(canvas.draw_list(), [b, a, c]);
        assert!(canvas.get(hidden).is_some());
        assert_eq!(canvas.max_draw_order(), Some(2));
        assert_eq!(canvas.min_draw_order(), Some(-1));
    }
}
