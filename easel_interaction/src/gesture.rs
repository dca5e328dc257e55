// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tentative transforms for a drag gesture.
//!
//! Everything here is a pure function of the press point, the live pointer,
//! the anchor, the axis locks, and the optional snap grid. Degenerate inputs
//! (a pointer or press that coincides with the anchor) produce the identity
//! rather than a NaN-laden transform.

use easel_transform::Transform;
use kurbo::Point;

use crate::{AxisLock, GridSnap, TransformMode};

/// Inputs captured when a transforming drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    /// Pointer position at press, in canvas space.
    pub press: Point,
    /// Fixed point for rotate and scale, in canvas space.
    pub anchor: Point,
    /// Axes held fixed.
    pub lock: AxisLock,
    /// Snap grid, when snapping is on.
    pub snap: Option<GridSnap>,
}

impl Gesture {
    /// Computes the tentative transform for `mode` at pointer position `pointer`.
    #[must_use]
    pub fn tentative(&self, mode: TransformMode, pointer: Point) -> Transform {
        match mode {
            TransformMode::Translate => self.translation(pointer),
            TransformMode::Rotate => self.rotation(pointer),
            TransformMode::Scale => self.scaling(pointer),
        }
    }

    /// Offset by `pointer - press`, snapped to the grid, then axis-locked.
    #[must_use]
    pub fn translation(&self, pointer: Point) -> Transform {
        let mut delta = pointer - self.press;
        if let Some(grid) = self.snap {
            delta = grid.snap_vec(delta);
        }
        let delta = self.lock.constrain(delta);
        Transform::translate(delta)
    }

    /// Rotation about the anchor by the angle swept from the press point.
    ///
    /// Snapping applies to the pointer position before the angle is measured,
    /// never to the angle itself.
    #[must_use]
    pub fn rotation(&self, pointer: Point) -> Transform {
        let pointer = self.snapped(pointer);
        let from = self.press - self.anchor;
        let to = pointer - self.anchor;
        if from.hypot2() == 0.0 || to.hypot2() == 0.0 {
            return Transform::IDENTITY;
        }
        let theta = to.atan2() - from.atan2();
        Transform::rotate_about(theta, self.anchor)
    }

    /// Scale about the anchor by the pointer's projection onto the press vector.
    ///
    /// The factor is `dot(pointer - anchor, press - anchor) / |press - anchor|²`,
    /// applied to each unlocked axis.
    #[must_use]
    pub fn scaling(&self, pointer: Point) -> Transform {
        let pointer = self.snapped(pointer);
        let from = self.press - self.anchor;
        let denom = from.hypot2();
        if denom == 0.0 {
            return Transform::IDENTITY;
        }
        let factor = (pointer - self.anchor).dot(from) / denom;
        let (sx, sy) = self.lock.scale_factors(factor);
        Transform::scale_about(sx, sy, self.anchor)
    }

    fn snapped(&self, pointer: Point) -> Point {
        match self.snap {
            Some(grid) => grid.snap_point(pointer),
            None => pointer,
        }
    }
}
