// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary types returned from canvas mutations.

use alloc::vec::Vec;
use kurbo::Rect;

/// World-space regions touched by a canvas mutation.
///
/// `Damage` is intentionally coarse: for a transform change it holds the
/// object's world bounds before and after, which is enough to bound a repaint.
/// Rectangles may overlap and are not deduplicated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// World-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Damage covering a single rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let mut dirty_rects = Vec::with_capacity(1);
        dirty_rects.push(rect);
        Self { dirty_rects }
    }

    /// Returns `true` if nothing needs repainting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Appends the rectangles of `other`.
    pub fn extend(&mut self, other: Self) {
        self.dirty_rects.extend(other.dirty_rects);
    }

    /// Returns the union of all damage rects.
    #[must_use]
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}
