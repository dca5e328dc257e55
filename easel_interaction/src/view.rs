// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// View-level mapping between the y-up canvas and a y-down view surface.
///
/// The canvas origin sits at the center of the view, canvas y grows upward,
/// and a pan offset (in view pixels) shifts everything after that:
///
/// `world_to_view = translate(pan) ∘ translate(center) ∘ scale(1, -1)`
///
/// Panning never touches object transforms.
#[derive(Clone, Debug)]
pub struct View {
    size: Size,
    pan: Vec2,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Default for View {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl View {
    /// Creates a view of the given size with no pan.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let mut view = Self {
            size,
            pan: Vec2::ZERO,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// Size of the view surface in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resizes the view surface; the canvas origin stays centered.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.rebuild_transforms();
    }

    /// Current pan offset in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the pan offset in view pixels.
    pub fn set_pan(&mut self, pan: Vec2) {
        if self.pan == pan {
            return;
        }
        self.pan = pan;
        self.rebuild_transforms();
    }

    /// Pans by a delta in view pixels.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        self.set_pan(self.pan + delta);
    }

    /// Full canvas-to-view transform.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.world_to_view
    }

    /// Full view-to-canvas transform.
    #[must_use]
    pub fn view_to_world(&self) -> Affine {
        self.view_to_world
    }

    /// Maps a canvas point to view pixels.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Maps a view pixel to canvas space.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// The canvas region currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world.transform_rect_bbox(self.size.to_rect())
    }

    fn rebuild_transforms(&mut self) {
        let center = self.size.to_vec2() * 0.5;
        self.world_to_view =
            Affine::translate(self.pan + center) * Affine::scale_non_uniform(1.0, -1.0);
        // Pure translate plus a y flip: never singular.
        self.view_to_world = self.world_to_view.inverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_centered_and_y_flips() {
        let view = View::new(Size::new(800.0, 600.0));
        assert_eq!(view.world_to_view_point(Point::ZERO), Point::new(400.0, 300.0));
        assert_eq!(view.world_to_view_point(Point::new(10.0, 10.0)), Point::new(410.0, 290.0));
        assert_eq!(view.view_to_world_point(Point::new(0.0, 0.0)), Point::new(-400.0, 300.0));
    }

    #[test]
    fn pan_shifts_in_view_pixels() {
        let mut view = View::new(Size::new(200.0, 100.0));
        view.pan_by_view(Vec2::new(10.0, 20.0));
        assert_eq!(view.pan(), Vec2::new(10.0, 20.0));
        assert_eq!(view.world_to_view_point(Point::ZERO), Point::new(110.0, 70.0));

        // Moving the view down shows more of the canvas above.
        let visible = view.visible_world_rect();
        assert_eq!(visible, Rect::new(-110.0, -30.0, 90.0, 70.0));
    }

    #[test]
    fn round_trips_points() {
        let mut view = View::default();
        view.set_pan(Vec2::new(-33.0, 12.5));
        let pt = Point::new(17.25, -4.5);
        let back = view.view_to_world_point(view.world_to_view_point(pt));
        assert!((back - pt).hypot() < 1e-9);
    }
}
