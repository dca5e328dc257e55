// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry supplied by the embedding application for hit testing.
//!
//! The canvas never inspects an item's shape directly. Instead every item
//! implements [`Collide`], answering in its own local coordinate space; the
//! canvas maps pointer positions into that space through the inverse of the
//! item's committed transform.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, Circle, Line, ParamCurveNearest, Point, Rect, Shape};

/// Local-space geometry of a drawable item.
pub trait Collide {
    /// Untransformed bounds. For curved or rotated content, use a conservative AABB.
    fn local_bounds(&self) -> Rect;

    /// Returns `true` if `pt` (in local coordinates) lies on the item.
    fn collide_local(&self, pt: Point) -> bool;
}

impl Collide for Rect {
    fn local_bounds(&self) -> Rect {
        self.abs()
    }

    fn collide_local(&self, pt: Point) -> bool {
        // Inclusive on every edge, unlike `Rect::contains`.
        let r = self.abs();
        pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
    }
}

impl Collide for Circle {
    fn local_bounds(&self) -> Rect {
        self.bounding_box()
    }

    fn collide_local(&self, pt: Point) -> bool {
        (pt - self.center).hypot2() <= self.radius * self.radius
    }
}

impl Collide for BezPath {
    fn local_bounds(&self) -> Rect {
        self.bounding_box()
    }

    fn collide_local(&self, pt: Point) -> bool {
        self.contains(pt)
    }
}

/// A stroked line segment (centerline + half-width).
///
/// Hits when the distance from the point to the segment is at most
/// `half_width`. Joins, caps, and variable width are not modeled.
#[derive(Clone, Copy, Debug)]
pub struct StrokedLine {
    /// The centerline segment in local coordinates.
    pub line: Line,
    /// Half of the stroke width in local units.
    pub half_width: f64,
}

impl Collide for StrokedLine {
    fn local_bounds(&self) -> Rect {
        self.line.bounding_box().inflate(self.half_width, self.half_width)
    }

    fn collide_local(&self, pt: Point) -> bool {
        let dist = self.line.nearest(pt, 0.).distance_sq.sqrt();
        dist <= self.half_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_are_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(r.collide_local(Point::new(10.0, 5.0)));
        assert!(r.collide_local(Point::new(0.0, 0.0)));
        assert!(!r.collide_local(Point::new(10.1, 5.0)));
    }

    #[test]
    fn circle_hit_and_miss() {
        let c = Circle::new((0.0, 0.0), 2.0);
        assert!(c.collide_local(Point::new(1.0, 1.0)));
        assert!(!c.collide_local(Point::new(2.0, 2.0)));
        assert_eq!(c.local_bounds(), Rect::new(-2.0, -2.0, 2.0, 2.0));
    }

    #[test]
    fn path_uses_fill_containment() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((0.0, 10.0));
        path.close_path();
        assert!(path.collide_local(Point::new(2.0, 2.0)));
        assert!(!path.collide_local(Point::new(8.0, 8.0)));
    }

    #[test]
    fn stroked_line_hit_and_miss() {
        let stroked = StrokedLine {
            line: Line::new((0.0, 0.0), (10.0, 0.0)),
            half_width: 1.0,
        };

        assert!(stroked.collide_local(Point::new(5.0, 0.0)));
        assert!(stroked.collide_local(Point::new(5.0, 0.5)));
        assert!(!stroked.collide_local(Point::new(5.0, 5.0)));
        assert_eq!(stroked.local_bounds(), Rect::new(-1.0, -1.0, 11.0, 1.0));
    }
}
