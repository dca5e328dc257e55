// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_canvas::{Canvas, CanvasError, Collide, Damage, DrawableObject, ObjectKey};
use easel_history::History;
use easel_interaction::{
    AnchorMode, AxisLock, Hit, Interaction, Mode, MoveOutcome, PressOutcome, View,
};
use easel_transform::{CoordinateSpace, Transform, TransformInput};
use kurbo::{Point, Rect, Size};

use crate::{Change, EditorError, EditorSettings, Redraw, RedrawSink, TransformationChange};

/// The editing kernel: canvas, undo history, and pointer interaction.
///
/// `Editor` is the surface the GUI layer drives. Pointer events go in with
/// canvas-space coordinates; committed changes are recorded as [`Change`]s so
/// they can be undone; and every visible change is reported to the
/// [`RedrawSink`] before the call returns.
///
/// The editor is single-threaded and never blocks. Every error is
/// recoverable: the editor stays consistent and the session can continue.
#[derive(Debug)]
pub struct Editor<T, R = ()> {
    canvas: Canvas<T>,
    history: History<Change<T>>,
    interaction: Interaction<ObjectKey>,
    settings: EditorSettings,
    redraw: R,
}

impl<T: Collide> Editor<T> {
    /// Creates an empty editor that discards redraw requests.
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_redraw(settings, ())
    }
}

impl<T: Collide, R: RedrawSink> Editor<T, R> {
    /// Creates an empty editor reporting repaints to `redraw`.
    pub fn with_redraw(settings: EditorSettings, redraw: R) -> Self {
        let history = match settings.history_limit {
            Some(limit) => History::with_limit(limit),
            None => History::new(),
        };
        let mut interaction = Interaction::new(View::new(settings.view_size));
        interaction.set_grid(settings.grid());
        interaction.set_grid_snap(settings.grid_snap);
        interaction.set_coordinate_space(settings.coordinate_space());
        Self {
            canvas: Canvas::new(),
            history,
            interaction,
            settings,
            redraw,
        }
    }

    /// The object store.
    #[must_use]
    pub fn canvas(&self) -> &Canvas<T> {
        &self.canvas
    }

    /// The undo history.
    #[must_use]
    pub fn history(&self) -> &History<Change<T>> {
        &self.history
    }

    /// Interaction state: mode, locks, selection, and view.
    #[must_use]
    pub fn interaction(&self) -> &Interaction<ObjectKey> {
        &self.interaction
    }

    /// Current settings, including toggles changed at runtime.
    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// The redraw sink.
    pub fn redraw_sink(&mut self) -> &mut R {
        &mut self.redraw
    }

    /// Mutable access to an object's item, bypassing the history.
    ///
    /// Use [`Editor::edit_item`] for edits that should be undoable.
    pub fn item_mut(&mut self, key: ObjectKey) -> Option<&mut T> {
        self.canvas.item_mut(key)
    }

    /// Handles a pointer press at canvas point `point`.
    pub fn on_press(&mut self, point: Point) -> PressOutcome<ObjectKey> {
        let hit = if self.interaction.mode() == Mode::Pan {
            None
        } else {
            self.canvas.hit_test(point).and_then(|key| {
                let bounds = self.canvas.get(key)?.world_bounds();
                Some(Hit { key, bounds })
            })
        };
        let outcome = self.track_selection(|ix| ix.on_press(point, hit));
        if let PressOutcome::DragStarted(key) = outcome
            && self.settings.immediate_preview
        {
            self.redraw.redraw(Redraw::Preview(key));
        }
        outcome
    }

    /// Handles a pointer move to canvas point `point`.
    pub fn on_move(&mut self, point: Point) -> MoveOutcome<ObjectKey> {
        let outcome = self.interaction.on_move(point);
        match outcome {
            MoveOutcome::Preview { key, .. } if self.settings.immediate_preview => {
                self.redraw.redraw(Redraw::Preview(key));
            }
            MoveOutcome::Panned(_) => self.redraw.redraw(Redraw::View),
            _ => {}
        }
        outcome
    }

    /// Handles a pointer release at canvas point `point`.
    ///
    /// Ending a transforming drag commits the transform, records it, and
    /// clears the selection. Returns the key of the transformed object, or
    /// `None` if nothing was committed. An identity transform (a click without
    /// movement) is not recorded.
    ///
    /// If the dragged object vanished in the meantime the release acts as a
    /// plain deselect.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Singular`] if the transform has no inverse (for
    /// example a scale factor of zero). Nothing is applied or recorded.
    pub fn on_release(&mut self, point: Point) -> Result<Option<ObjectKey>, EditorError> {
        let commit = self.track_selection(|ix| ix.on_release(point));
        let Some(commit) = commit else {
            return Ok(None);
        };
        match self.commit_transform(commit.key, commit.transform, commit.space) {
            Err(EditorError::Canvas(CanvasError::ObjectNotFound(key))) => {
                log::warn!("editor: {key} vanished during drag; treating release as deselect");
                Ok(None)
            }
            other => other,
        }
    }

    /// Reverts the most recent change. Returns `Ok(false)` if there was none.
    ///
    /// Any drag in progress is abandoned first.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Canvas`] if the change no longer fits the
    /// canvas; the change stays on the undo stack.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        self.deselect();
        let Some(key) = self.history.undo_entries().back().map(Change::key) else {
            return Ok(false);
        };
        let before = self.world_bounds(key);
        let undone = self.history.undo(&mut self.canvas)?;
        self.report_damage(before, self.world_bounds(key));
        Ok(undone)
    }

    /// Re-applies the most recently undone change. Returns `Ok(false)` if there was none.
    ///
    /// Any drag in progress is abandoned first.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Canvas`] if the change no longer fits the
    /// canvas; the change stays on the redo stack.
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        self.deselect();
        let Some(key) = self.history.redo_entries().last().map(Change::key) else {
            return Ok(false);
        };
        let before = self.world_bounds(key);
        let redone = self.history.redo(&mut self.canvas)?;
        self.report_damage(before, self.world_bounds(key));
        Ok(redone)
    }

    /// Returns `true` if there is anything to undo.
    #[must_use]
    pub fn changes_made(&self) -> bool {
        self.history.changes_made()
    }

    /// Returns `true` if there is anything to redo.
    #[must_use]
    pub fn redo_available(&self) -> bool {
        self.history.redo_available()
    }

    /// Switches mode, abandoning any drag and clearing the selection.
    pub fn set_mode(&mut self, mode: Mode) {
        self.track_selection(|ix| ix.set_mode(mode));
    }

    /// Holds the x and/or y axis fixed during drags and pans.
    pub fn set_axis_lock(&mut self, x: bool, y: bool) {
        self.interaction.set_axis_lock(AxisLock::from_bools(x, y));
    }

    /// Sets where the anchor sits for the next press.
    pub fn set_anchor_mode(&mut self, anchor_mode: AnchorMode) {
        self.interaction.set_anchor_mode(anchor_mode);
    }

    /// Sets the composition order for commits.
    ///
    /// Switching to [`CoordinateSpace::Local`] also resets the anchor mode
    /// to [`AnchorMode::Origin`].
    pub fn set_coordinate_space(&mut self, space: CoordinateSpace) {
        self.interaction.set_coordinate_space(space);
        self.settings.use_global_coords = !space.is_local();
    }

    /// Turns grid snapping on or off.
    pub fn set_grid_snap(&mut self, enabled: bool) {
        self.interaction.set_grid_snap(enabled);
        self.settings.grid_snap = enabled;
    }

    /// Resizes the view surface.
    pub fn set_view_size(&mut self, size: Size) {
        if self.interaction.view().size() == size {
            return;
        }
        self.interaction.view_mut().set_size(size);
        self.settings.view_size = size;
        self.redraw.redraw(Redraw::View);
    }

    /// Abandons any drag and clears the selection, without committing.
    pub fn deselect(&mut self) {
        self.track_selection(Interaction::cancel);
    }

    /// Places an object without recording it, e.g. while loading a file.
    pub fn load_object(&mut self, object: DrawableObject<T>) -> ObjectKey {
        let key = self.canvas.insert(object);
        self.report_damage(None, self.world_bounds(key));
        key
    }

    /// Places a newly authored object and records its creation.
    pub fn add_object(&mut self, object: DrawableObject<T>) -> ObjectKey {
        let key = self.canvas.insert(object);
        self.history.push(Change::Creation { key, object: None });
        log::debug!("editor: created {key}");
        self.report_damage(None, self.world_bounds(key));
        key
    }

    /// Removes an object and records the deletion.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Canvas`] if `key` is not on the canvas.
    pub fn delete_object(&mut self, key: ObjectKey) -> Result<(), EditorError> {
        if self.interaction.selected() == Some(key) {
            self.deselect();
        }
        let before = self.world_bounds(key);
        self.history
            .execute(Change::Deletion { key, object: None }, &mut self.canvas)?;
        log::debug!("editor: deleted {key}");
        self.report_damage(before, None);
        Ok(())
    }

    /// Replaces an object's item, e.g. after its label or script was edited,
    /// and records the edit.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Canvas`] if `key` is not on the canvas.
    pub fn edit_item(&mut self, key: ObjectKey, item: T) -> Result<(), EditorError> {
        if self.interaction.selected() == Some(key) {
            self.deselect();
        }
        let before = self.world_bounds(key);
        self.history
            .execute(Change::Edit { key, item }, &mut self.canvas)?;
        log::debug!("editor: edited {key}");
        self.report_damage(before, self.world_bounds(key));
        Ok(())
    }

    /// Draws an object above every other one, recording the change.
    ///
    /// Returns `Ok(false)` if it already is strictly on top.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Canvas`] if `key` is not on the canvas.
    pub fn raise(&mut self, key: ObjectKey) -> Result<bool, EditorError> {
        let from = self.draw_order(key)?;
        let Some(top) = self.others(key).max() else {
            return Ok(false);
        };
        if from > top {
            return Ok(false);
        }
        self.reorder(key, from, top.saturating_add(1))
    }

    /// Draws an object below every other one, recording the change.
    ///
    /// Returns `Ok(false)` if it already is strictly at the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Canvas`] if `key` is not on the canvas.
    pub fn lower(&mut self, key: ObjectKey) -> Result<bool, EditorError> {
        let from = self.draw_order(key)?;
        let Some(bottom) = self.others(key).min() else {
            return Ok(false);
        };
        if from < bottom {
            return Ok(false);
        }
        self.reorder(key, from, bottom.saturating_sub(1))
    }

    /// Applies an explicitly entered transform to the selected object.
    ///
    /// The transform composes in the current coordinate space and is
    /// recorded like a drag commit. The selection is cleared afterwards.
    /// Returns the transformed key, or `None` if nothing was selected.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonAffine`] for a non-affine matrix and
    /// [`EditorError::Singular`] for a transform without inverse. Nothing is
    /// applied in either case.
    pub fn apply_custom_transform(
        &mut self,
        input: impl Into<TransformInput>,
    ) -> Result<Option<ObjectKey>, EditorError> {
        let Some(key) = self.interaction.selected() else {
            return Ok(None);
        };
        let space = self.interaction.coordinate_space();
        let transform = input.into().resolve();
        self.deselect();
        self.commit_transform(key, transform?, space)
    }

    /// The transform to draw an object with right now.
    ///
    /// While the object is being dragged and immediate preview is on, this is
    /// the committed transform with the tentative one composed in the current
    /// coordinate space. Otherwise it is the committed transform.
    #[must_use]
    pub fn preview_transform(&self, key: ObjectKey) -> Option<Transform> {
        let committed = self.canvas.get(key)?.transform();
        if !self.settings.immediate_preview {
            return Some(committed);
        }
        match self.interaction.tentative() {
            Some((dragged, tentative)) if dragged == key => Some(
                self.interaction
                    .coordinate_space()
                    .compose(committed, tentative),
            ),
            _ => Some(committed),
        }
    }

    fn commit_transform(
        &mut self,
        key: ObjectKey,
        transform: Transform,
        space: CoordinateSpace,
    ) -> Result<Option<ObjectKey>, EditorError> {
        if transform.is_identity() {
            return Ok(None);
        }
        let change = TransformationChange::new(key, transform, space).inspect_err(|err| {
            log::warn!("editor: rejected commit on {key}: {err}");
        })?;
        let before = self.world_bounds(key);
        self.history
            .execute(Change::Transformation(change), &mut self.canvas)?;
        log::debug!("editor: committed {transform:?} on {key} in {space:?} space");
        self.report_damage(before, self.world_bounds(key));
        Ok(Some(key))
    }

    fn reorder(&mut self, key: ObjectKey, from: i32, to: i32) -> Result<bool, EditorError> {
        self.history
            .execute(Change::Reorder { key, from, to }, &mut self.canvas)?;
        log::debug!("editor: {key} draw order {from} -> {to}");
        self.report_damage(None, self.world_bounds(key));
        Ok(true)
    }

    fn draw_order(&self, key: ObjectKey) -> Result<i32, CanvasError> {
        self.canvas
            .get(key)
            .map(DrawableObject::draw_order)
            .ok_or(CanvasError::ObjectNotFound(key))
    }

    fn others(&self, key: ObjectKey) -> impl Iterator<Item = i32> + '_ {
        self.canvas
            .iter()
            .filter(move |(other, _)| *other != key)
            .map(|(_, obj)| obj.draw_order())
    }

    fn world_bounds(&self, key: ObjectKey) -> Option<Rect> {
        self.canvas.get(key).map(DrawableObject::world_bounds)
    }

    fn report_damage(&mut self, before: Option<Rect>, after: Option<Rect>) {
        let mut damage = Damage::default();
        damage.dirty_rects.extend(before);
        damage.dirty_rects.extend(after);
        if !damage.is_empty() {
            self.redraw.redraw(Redraw::Committed(damage));
        }
    }

    /// Runs `f` on the interaction state, reporting a selection repaint if
    /// the selection changed.
    fn track_selection<O>(&mut self, f: impl FnOnce(&mut Interaction<ObjectKey>) -> O) -> O {
        let revision = self.interaction.selection().revision();
        let out = f(&mut self.interaction);
        if self.interaction.selection().revision() != revision {
            self.redraw.redraw(Redraw::Selection);
        }
        out
    }
}
