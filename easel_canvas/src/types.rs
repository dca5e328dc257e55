// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the canvas: object keys and flags.

use core::fmt;

/// Identifier for an object on a [`Canvas`](crate::Canvas).
///
/// This is a small, copyable handle. Keys are issued by an append-only store
/// and are never reused:
///
/// - On insert, a fresh key is issued.
/// - On remove, the key becomes vacant; lookups with it fail with
///   [`CanvasError::ObjectNotFound`](crate::CanvasError::ObjectNotFound).
/// - A vacant key can be filled again only with
///   [`Canvas::restore`](crate::Canvas::restore), which is how undo brings a
///   deleted object back under its original identity.
///
/// Because keys are never recycled, a stale key never aliases a different
/// object, and history records can hold keys across removals.
///
/// ### Order
///
/// Keys order by insertion. Hit testing uses this order to break draw-order
/// ties: the more recently inserted object wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectKey(pub(crate) u32);

impl ObjectKey {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw insertion index of this key.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

bitflags::bitflags! {
    /// Object flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u8 {
        /// Object is visible (included in the draw list).
        const VISIBLE  = 0b0000_0001;
        /// Object is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ObjectFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}
