// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// The selected object and the anchor resolved for it.
///
/// At most one object is selected at a time. The anchor is resolved when the
/// object is picked and stays fixed until the selection changes.
///
/// The revision counter bumps only when the selected key or the anchor
/// actually changes, so observers can cheaply tell whether to refresh
/// selection chrome.
#[derive(Clone, Debug)]
pub struct SelectionState<K> {
    key: Option<K>,
    anchor: Point,
    revision: u64,
}

impl<K> Default for SelectionState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SelectionState<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: None,
            anchor: Point::ZERO,
            revision: 0,
        }
    }

    /// The selected key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
    }

    /// Anchor for the current selection, in canvas space.
    ///
    /// This is the origin when nothing is selected.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears the selection and resets the anchor to the origin.
    pub fn clear(&mut self) {
        if self.key.is_none() && self.anchor == Point::ZERO {
            return;
        }
        self.key = None;
        self.anchor = Point::ZERO;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: PartialEq> SelectionState<K> {
    /// Selects `key` with the given anchor, replacing any previous selection.
    ///
    /// Returns `true` if anything changed.
    pub fn select(&mut self, key: K, anchor: Point) -> bool {
        if self.key.as_ref() == Some(&key) && self.anchor == anchor {
            return false;
        }
        self.key = Some(key);
        self.anchor = anchor;
        self.bump_revision();
        true
    }

    /// Returns `true` if `key` is the selected key.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
    }
}
