// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Minor-grid snapping.
///
/// The canvas grid has major lines every `major_spacing` units and
/// `minor_count` minor lines between each pair of major lines, so snap nodes
/// sit every `major_spacing / (minor_count + 1)` units on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSnap {
    /// Distance between major grid lines.
    pub major_spacing: f64,
    /// Number of minor lines between two major lines.
    pub minor_count: u32,
}

impl Default for GridSnap {
    fn default() -> Self {
        Self {
            major_spacing: 100.0,
            minor_count: 9,
        }
    }
}

impl GridSnap {
    /// Creates a snap grid.
    #[must_use]
    pub const fn new(major_spacing: f64, minor_count: u32) -> Self {
        Self {
            major_spacing,
            minor_count,
        }
    }

    /// Distance between snap nodes.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.major_spacing / (f64::from(self.minor_count) + 1.0)
    }

    /// Rounds a single coordinate to the nearest node.
    ///
    /// A non-positive or non-finite spacing leaves the value untouched.
    #[must_use]
    pub fn snap_value(&self, value: f64) -> f64 {
        let spacing = self.spacing();
        if !(spacing.is_finite() && spacing > 0.0) {
            return value;
        }
        (value / spacing).round() * spacing
    }

    /// Snaps each coordinate of a point independently.
    #[must_use]
    pub fn snap_point(&self, pt: Point) -> Point {
        Point::new(self.snap_value(pt.x), self.snap_value(pt.y))
    }

    /// Snaps each component of an offset independently.
    #[must_use]
    pub fn snap_vec(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.snap_value(v.x), self.snap_value(v.y))
    }
}
