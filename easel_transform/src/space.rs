// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Transform;

/// Which coordinate space a new transform is expressed in.
///
/// This decides the composition order when a transform is committed onto an
/// object that already carries one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CoordinateSpace {
    /// World (canvas) coordinates: the new transform applies after the
    /// existing one, `new ∘ old`.
    #[default]
    Global,
    /// The object's own coordinates: the new transform applies before the
    /// existing one, `old ∘ new`.
    Local,
}

impl CoordinateSpace {
    /// Returns `true` for [`CoordinateSpace::Local`].
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Local)
    }

    /// Composes `delta` onto `existing` in this space.
    #[must_use]
    pub fn compose(self, existing: Transform, delta: Transform) -> Transform {
        match self {
            Self::Global => Transform::compose(delta, existing),
            Self::Local => Transform::compose(existing, delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use kurbo::{Point, Vec2};

    use super::*;

    #[test]
    fn global_applies_delta_last_and_local_applies_it_first() {
        let old = Transform::rotate_about(FRAC_PI_2, Point::ZERO);
        let delta = Transform::translate(Vec2::new(10.0, 0.0));
        let p = Point::new(1.0, 0.0);

        // Rotate to (0, 1), then shift.
        let global = CoordinateSpace::Global.compose(old, delta).apply(p);
        assert!((global - Point::new(10.0, 1.0)).hypot() < 1e-9);

        // Shift to (11, 0), then rotate.
        let local = CoordinateSpace::Local.compose(old, delta).apply(p);
        assert!((local - Point::new(0.0, 11.0)).hypot() < 1e-9);
    }
}
