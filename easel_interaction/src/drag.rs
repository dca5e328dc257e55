// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking for a press/move/release sequence.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] with the press position.
//! 2) On each move, call [`DragState::update`] to get the delta since the previous move.
//! 3) [`DragState::total_offset`] gives the offset from the press position.
//! 4) Call [`DragState::end`] on release or cancellation.
//!
//! ## Minimal example
//!
//! ```
//! use easel_interaction::DragState;
//! use kurbo::{Point, Vec2};
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(Point::new(15.0, 30.0)), Some(Vec2::new(0.0, 5.0)));
//! assert_eq!(drag.total_offset(Point::new(15.0, 30.0)), Some(Vec2::new(5.0, 10.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Press and last-seen pointer positions of an active drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    press: Option<Point>,
    last: Option<Point>,
}

impl DragState {
    /// Starts tracking a drag from `pos`, replacing any previous one.
    pub fn start(&mut self, pos: Point) {
        self.press = Some(pos);
        self.last = Some(pos);
    }

    /// Records a new pointer position, returning the delta since the previous one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.press?;
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Offset of `pos` from the press position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.press.map(|press| pos - press)
    }

    /// Position at which the drag started.
    #[must_use]
    pub fn press(&self) -> Option<Point> {
        self.press
    }

    /// Most recent position passed to [`DragState::start`] or [`DragState::update`].
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.press = None;
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_ignores_updates() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert_eq!(drag.last(), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);
        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::ZERO));
        assert_eq!(drag.press(), Some(Point::ZERO));
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);
        drag.update(Point::new(10.0, 10.0));

        let restart = Point::new(50.0, 60.0);
        drag.start(restart);
        assert_eq!(drag.press(), Some(restart));
        assert_eq!(drag.last(), Some(restart));
        assert_eq!(drag.total_offset(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.last(), None);

        // Ending twice is harmless.
        drag.end();
        assert_eq!(drag, DragState::default());
    }
}
