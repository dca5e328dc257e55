// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

bitflags::bitflags! {
    /// Axes held fixed while dragging.
    ///
    /// A locked axis keeps a translation component of 0 and a scale factor of
    /// 1. Locks also constrain view panning.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AxisLock: u8 {
        /// Hold the x axis.
        const X = 0b0000_0001;
        /// Hold the y axis.
        const Y = 0b0000_0010;
    }
}

impl AxisLock {
    /// Builds a lock set from two toggles.
    #[must_use]
    pub fn from_bools(x: bool, y: bool) -> Self {
        let mut lock = Self::empty();
        lock.set(Self::X, x);
        lock.set(Self::Y, y);
        lock
    }

    /// Zeroes the locked components of an offset.
    #[must_use]
    pub fn constrain(self, offset: Vec2) -> Vec2 {
        Vec2::new(
            if self.contains(Self::X) { 0.0 } else { offset.x },
            if self.contains(Self::Y) { 0.0 } else { offset.y },
        )
    }

    /// Per-axis scale factors for a uniform `factor`, with locked axes at 1.
    #[must_use]
    pub fn scale_factors(self, factor: f64) -> (f64, f64) {
        (
            if self.contains(Self::X) { 1.0 } else { factor },
            if self.contains(Self::Y) { 1.0 } else { factor },
        )
    }
}
