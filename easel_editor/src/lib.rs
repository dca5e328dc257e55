// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Editor: the transform-and-undo kernel of the Easel drawing editor.
//!
//! [`Editor`] ties the other Easel crates together:
//! - an [`easel_canvas::Canvas`] holding the drawable objects,
//! - an [`easel_interaction::Interaction`] turning pointer events into
//!   tentative and committed transforms,
//! - an [`easel_history::History`] of [`Change`] records, so every committed
//!   edit can be undone and redone.
//!
//! The GUI layer owns windows, painting, dialogs, and files. It forwards pointer
//! events in canvas coordinates, calls the toolbar operations (`set_mode`,
//! `set_axis_lock`, `undo`, ...), and repaints whenever the editor reports a
//! [`Redraw`] through its [`RedrawSink`].
//!
//! ## Change records
//!
//! Each [`Change`] carries everything needed to apply and revert it:
//! - [`Change::Transformation`] holds the transform and its precomputed inverse,
//!   so singular transforms are rejected before anything is recorded. Undo and
//!   redo write back the exact committed transforms seen when it was applied.
//! - [`Change::Creation`] and [`Change::Deletion`] move the object between the
//!   canvas and the record; undoing a creation takes the object off the canvas
//!   and redoing it restores the object under the same key.
//! - [`Change::Reorder`] records raise/lower of the draw order.
//! - [`Change::Edit`] swaps an object's item, e.g. after its label or script
//!   was edited.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_canvas::DrawableObject;
//! use easel_editor::{Editor, EditorSettings, Redraw};
//! use kurbo::{Point, Rect};
//!
//! let mut repaints = Vec::new();
//! let mut editor = Editor::with_redraw(EditorSettings::default(), |r: Redraw| repaints.push(r));
//!
//! let key = editor.load_object(DrawableObject::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
//!
//! // Drag the square 20 units to the right.
//! editor.on_press(Point::new(5.0, 5.0));
//! editor.on_move(Point::new(15.0, 5.0));
//! editor.on_release(Point::new(25.0, 5.0)).unwrap();
//! assert_eq!(editor.canvas().hit_test(Point::new(25.0, 5.0)), Some(key));
//!
//! // And back again.
//! assert!(editor.undo().unwrap());
//! assert_eq!(editor.canvas().hit_test(Point::new(5.0, 5.0)), Some(key));
//! assert!(editor.redo_available());
//!
//! drop(editor);
//! assert!(repaints.iter().any(|r| matches!(r, Redraw::Committed(_))));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod change;
mod editor;
mod error;
mod redraw;
mod settings;

pub use change::{Change, TransformationChange};
pub use editor::Editor;
pub use error::EditorError;
pub use redraw::{Redraw, RedrawSink};
pub use settings::EditorSettings;
