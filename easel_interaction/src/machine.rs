// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use easel_transform::{CoordinateSpace, Transform};
use kurbo::{Point, Rect, Vec2};

use crate::{
    AnchorMode, AxisLock, DragState, Gesture, GridSnap, Mode, SelectionState, TransformMode, View,
};

/// Result of hit testing at a press position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<K> {
    /// The topmost object under the pointer.
    pub key: K,
    /// Its world bounding box, used to resolve corner and center anchors.
    pub bounds: Rect,
}

/// What a press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome<K> {
    /// A drag is already in progress; the press was ignored.
    Ignored,
    /// A view pan started.
    PanStarted,
    /// The object was selected without starting a drag.
    Selected(K),
    /// The object was selected and a transforming drag started.
    DragStarted(K),
    /// Nothing was hit; any selection was cleared.
    Cleared,
}

/// What a pointer move did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome<K> {
    /// Nothing is being dragged.
    Idle,
    /// The tentative transform of the dragged object changed.
    Preview {
        /// The dragged object.
        key: K,
        /// The uncommitted transform for the current pointer position.
        transform: Transform,
    },
    /// The view pan offset changed to the contained value.
    Panned(Vec2),
}

/// A transform to commit on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Commit<K> {
    /// Object to transform.
    pub key: K,
    /// The transform to compose onto the object's committed transform.
    pub transform: Transform,
    /// Composition order.
    pub space: CoordinateSpace,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle,
    Panning { press_view: Point, base_pan: Vec2 },
    Dragging { mode: TransformMode, tentative: Transform },
}

/// Press/move/release state machine for direct manipulation.
///
/// `Interaction` owns the modal settings (mode, axis locks, anchor mode,
/// coordinate space, grid snapping), the single-object selection, and the
/// view pan. It never touches object transforms: pointer moves only produce a
/// tentative transform, and a release hands back a [`Commit`] for the caller
/// to apply and record.
///
/// Pointer positions are in canvas space, already mapped through the current
/// [`View`].
///
/// ## State transitions
///
/// - `Idle` + press on an object in a transforming mode: start dragging.
/// - `Idle` + press on an object in [`Mode::Select`]: select only.
/// - `Idle` + press in [`Mode::Pan`]: start panning.
/// - `Dragging` + move: recompute the tentative transform.
/// - `Dragging` + release: produce a [`Commit`] and clear the selection.
/// - `Panning` + move: update the view pan offset.
/// - Any state + mode switch or [`Interaction::cancel`]: back to idle with
///   the selection cleared and nothing committed.
#[derive(Clone, Debug)]
pub struct Interaction<K> {
    mode: Mode,
    axis_lock: AxisLock,
    anchor_mode: AnchorMode,
    space: CoordinateSpace,
    grid: GridSnap,
    grid_snap: bool,
    selection: SelectionState<K>,
    drag: DragState,
    phase: Phase,
    view: View,
}

impl<K> Default for Interaction<K> {
    fn default() -> Self {
        Self::new(View::default())
    }
}

impl<K> Interaction<K> {
    /// Creates an idle state machine over `view`.
    #[must_use]
    pub fn new(view: View) -> Self {
        Self {
            mode: Mode::default(),
            axis_lock: AxisLock::empty(),
            anchor_mode: AnchorMode::default(),
            space: CoordinateSpace::default(),
            grid: GridSnap::default(),
            grid_snap: false,
            selection: SelectionState::new(),
            drag: DragState::default(),
            phase: Phase::Idle,
            view,
        }
    }

    /// The active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The active axis locks.
    #[must_use]
    pub fn axis_lock(&self) -> AxisLock {
        self.axis_lock
    }

    /// The active anchor mode.
    #[must_use]
    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    /// The coordinate space commits compose in.
    #[must_use]
    pub fn coordinate_space(&self) -> CoordinateSpace {
        self.space
    }

    /// The snap grid, whether or not snapping is on.
    #[must_use]
    pub fn grid(&self) -> GridSnap {
        self.grid
    }

    /// Returns `true` if grid snapping is on.
    #[must_use]
    pub fn grid_snap(&self) -> bool {
        self.grid_snap
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionState<K> {
        &self.selection
    }

    /// The view pan state.
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Mutable access to the view, for resizing or programmatic panning.
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Returns `true` while a transforming drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Returns `true` while the view is being panned.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, Phase::Panning { .. })
    }

    /// Sets axis locks for subsequent moves.
    pub fn set_axis_lock(&mut self, lock: AxisLock) {
        self.axis_lock = lock;
    }

    /// Sets the anchor mode used by the next press.
    pub fn set_anchor_mode(&mut self, anchor_mode: AnchorMode) {
        self.anchor_mode = anchor_mode;
    }

    /// Sets the coordinate space for commits.
    ///
    /// Switching to [`CoordinateSpace::Local`] resets the anchor mode to
    /// [`AnchorMode::Origin`]: in the object's own space the other anchors
    /// would refer to world bounds.
    pub fn set_coordinate_space(&mut self, space: CoordinateSpace) {
        self.space = space;
        if space.is_local() {
            self.anchor_mode = AnchorMode::Origin;
        }
    }

    /// Turns grid snapping on or off.
    pub fn set_grid_snap(&mut self, enabled: bool) {
        self.grid_snap = enabled;
    }

    /// Replaces the snap grid.
    pub fn set_grid(&mut self, grid: GridSnap) {
        self.grid = grid;
    }

    /// Switches mode, abandoning any drag and clearing the selection.
    pub fn set_mode(&mut self, mode: Mode) {
        self.cancel();
        if self.mode != mode {
            log::debug!("interaction: mode {:?} -> {mode:?}", self.mode);
            self.mode = mode;
        }
    }

    /// Abandons any drag or pan and clears the selection.
    ///
    /// The tentative transform is discarded; nothing is committed. Returns
    /// `true` if a drag was discarded.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            log::debug!("interaction: drag cancelled");
        }
        self.phase = Phase::Idle;
        self.drag.end();
        self.selection.clear();
        was_dragging
    }

    fn snap(&self) -> Option<GridSnap> {
        self.grid_snap.then_some(self.grid)
    }

    fn gesture(&self) -> Option<Gesture> {
        Some(Gesture {
            press: self.drag.press()?,
            anchor: self.selection.anchor(),
            lock: self.axis_lock,
            snap: self.snap(),
        })
    }
}

impl<K: Copy + PartialEq + Debug> Interaction<K> {
    /// The dragged object and its tentative transform, while dragging.
    #[must_use]
    pub fn tentative(&self) -> Option<(K, Transform)> {
        match self.phase {
            Phase::Dragging { tentative, .. } => Some((*self.selection.key()?, tentative)),
            _ => None,
        }
    }

    /// The selected key, if any.
    #[must_use]
    pub fn selected(&self) -> Option<K> {
        self.selection.key().copied()
    }

    /// Handles a pointer press at canvas point `point`.
    ///
    /// `hit` is the caller's hit-test result at `point`; it is ignored in
    /// [`Mode::Pan`].
    pub fn on_press(&mut self, point: Point, hit: Option<Hit<K>>) -> PressOutcome<K> {
        if self.is_dragging() {
            return PressOutcome::Ignored;
        }

        if self.mode == Mode::Pan {
            self.phase = Phase::Panning {
                press_view: self.view.world_to_view_point(point),
                base_pan: self.view.pan(),
            };
            self.drag.start(point);
            log::debug!("interaction: pan started");
            return PressOutcome::PanStarted;
        }

        let Some(hit) = hit else {
            self.cancel();
            return PressOutcome::Cleared;
        };

        let anchor = self.anchor_mode.resolve(hit.bounds);
        self.selection.select(hit.key, anchor);

        match self.mode.transform_mode() {
            Some(mode) => {
                self.phase = Phase::Dragging {
                    mode,
                    tentative: Transform::IDENTITY,
                };
                self.drag.start(point);
                log::debug!("interaction: {mode:?} drag of {:?} about {anchor:?}", hit.key);
                PressOutcome::DragStarted(hit.key)
            }
            None => {
                self.phase = Phase::Idle;
                log::debug!("interaction: selected {:?}", hit.key);
                PressOutcome::Selected(hit.key)
            }
        }
    }

    /// Handles a pointer move to canvas point `point`.
    pub fn on_move(&mut self, point: Point) -> MoveOutcome<K> {
        match self.phase {
            Phase::Idle => MoveOutcome::Idle,
            Phase::Panning {
                press_view,
                base_pan,
            } => {
                // `point` was mapped through the current view, so mapping it
                // back recovers the physical pointer position.
                let now = self.view.world_to_view_point(point);
                let delta = self.axis_lock.constrain(now - press_view);
                self.view.set_pan(base_pan + delta);
                self.drag.update(point);
                log::trace!("interaction: pan {:?}", self.view.pan());
                MoveOutcome::Panned(self.view.pan())
            }
            Phase::Dragging { mode, .. } => {
                let (Some(gesture), Some(key)) = (self.gesture(), self.selected()) else {
                    return MoveOutcome::Idle;
                };
                let tentative = gesture.tentative(mode, point);
                self.phase = Phase::Dragging { mode, tentative };
                self.drag.update(point);
                log::trace!("interaction: tentative {tentative:?}");
                MoveOutcome::Preview {
                    key,
                    transform: tentative,
                }
            }
        }
    }

    /// Handles a pointer release at canvas point `point`.
    ///
    /// Ending a transforming drag recomputes the tentative transform at
    /// `point`, clears the selection, and returns the transform to commit.
    pub fn on_release(&mut self, point: Point) -> Option<Commit<K>> {
        match self.phase {
            Phase::Idle => None,
            Phase::Panning { .. } => {
                self.phase = Phase::Idle;
                self.drag.end();
                log::debug!("interaction: pan ended at {:?}", self.view.pan());
                None
            }
            Phase::Dragging { mode, .. } => {
                let commit = self
                    .gesture()
                    .zip(self.selected())
                    .map(|(gesture, key)| Commit {
                        key,
                        transform: gesture.tentative(mode, point),
                        space: self.space,
                    });
                self.cancel();
                if let Some(commit) = &commit {
                    log::debug!(
                        "interaction: release commits {:?} in {:?} space",
                        commit.key,
                        commit.space
                    );
                }
                commit
            }
        }
    }
}
