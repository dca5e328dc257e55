// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Interaction: direct-manipulation state for the editing kernel.
//!
//! This crate turns pointer presses, moves, and releases into transforms. It
//! does not own any objects: callers supply a hit-test result on press and
//! receive a tentative transform on each move and a [`Commit`] on release.
//!
//! - [`Interaction`] is the state machine (idle, panning, dragging) plus the
//!   modal settings it reads: [`Mode`], [`AxisLock`], [`AnchorMode`],
//!   [`CoordinateSpace`](easel_transform::CoordinateSpace), and [`GridSnap`].
//! - [`Gesture`] holds the pure per-mode math: translate by the pointer
//!   offset, rotate by the swept angle about the anchor, scale by projection
//!   onto the press vector.
//! - [`SelectionState`] tracks the single selected object and its anchor.
//! - [`View`] maps the y-up canvas onto a y-down view surface and carries the
//!   pan offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_interaction::{Hit, Interaction, Mode, PressOutcome};
//! use kurbo::{Point, Rect, Vec2};
//!
//! let mut ix = Interaction::default();
//! ix.set_mode(Mode::Translate);
//!
//! let hit = Hit { key: 7_u32, bounds: Rect::new(0.0, 0.0, 10.0, 10.0) };
//! assert_eq!(ix.on_press(Point::new(5.0, 5.0), Some(hit)), PressOutcome::DragStarted(7));
//!
//! // Moving only previews; nothing is committed until release.
//! ix.on_move(Point::new(6.0, 5.0));
//!
//! let commit = ix.on_release(Point::new(25.0, 5.0)).unwrap();
//! assert_eq!(commit.key, 7);
//! assert_eq!(commit.transform.translation(), Vec2::new(20.0, 0.0));
//! assert_eq!(ix.selected(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
mod gesture;
mod lock;
mod machine;
mod mode;
mod selection;
mod snap;
mod view;

pub use drag::DragState;
pub use gesture::Gesture;
pub use lock::AxisLock;
pub use machine::{Commit, Hit, Interaction, MoveOutcome, PressOutcome};
pub use mode::{AnchorMode, Mode, TransformMode};
pub use selection::SelectionState;
pub use snap::GridSnap;
pub use view::View;
