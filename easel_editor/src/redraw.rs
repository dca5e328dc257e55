// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_canvas::{Damage, ObjectKey};

/// A repaint request emitted by the [`Editor`](crate::Editor).
#[derive(Clone, Debug, PartialEq)]
pub enum Redraw {
    /// Committed object state changed within the given world-space regions.
    Committed(Damage),
    /// The tentative transform of the dragged object changed.
    Preview(ObjectKey),
    /// The view pan or size changed; everything moved on screen.
    View,
    /// The selection (or its anchor) changed.
    Selection,
}

/// Receiver for [`Redraw`] requests.
///
/// The editor calls [`RedrawSink::redraw`] synchronously, before the
/// operation that caused it returns, so committed changes are visible
/// immediately.
///
/// Implemented for `()` (discard everything) and for any `FnMut(Redraw)`.
pub trait RedrawSink {
    /// Handles one repaint request.
    fn redraw(&mut self, redraw: Redraw);
}

impl RedrawSink for () {
    fn redraw(&mut self, _redraw: Redraw) {}
}

impl<F: FnMut(Redraw)> RedrawSink for F {
    fn redraw(&mut self, redraw: Redraw) {
        self(redraw);
    }
}
