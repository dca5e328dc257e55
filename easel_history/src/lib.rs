// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel History: linear undo/redo over reversible commands.
//!
//! This crate focuses on the _bookkeeping_ of an undo history. It does not
//! know what the commands change; callers describe each change as a value
//! implementing [`Command`], and [`History`] moves those values between its
//! undo and redo stacks as the user steps back and forth.
//!
//! - [`History::execute`] applies a command and records it only on success.
//! - [`History::push`] records a command the caller already applied.
//! - [`History::undo`] / [`History::redo`] are no-ops (returning `Ok(false)`)
//!   when there is nothing to step over.
//! - Recording anything clears the redo stack: history never branches.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_history::{Command, History};
//!
//! struct Rename {
//!     old: String,
//!     new: String,
//! }
//!
//! impl Command<String> for Rename {
//!     type Error = core::convert::Infallible;
//!
//!     fn apply(&mut self, name: &mut String) -> Result<(), Self::Error> {
//!         name.clone_from(&self.new);
//!         Ok(())
//!     }
//!
//!     fn revert(&mut self, name: &mut String) -> Result<(), Self::Error> {
//!         name.clone_from(&self.old);
//!         Ok(())
//!     }
//! }
//!
//! let mut name = String::from("circle");
//! let mut history = History::new();
//!
//! history
//!     .execute(Rename { old: name.clone(), new: "unit circle".into() }, &mut name)
//!     .unwrap();
//! assert_eq!(name, "unit circle");
//!
//! assert!(history.undo(&mut name).unwrap());
//! assert_eq!(name, "circle");
//!
//! // Nothing left to undo: a no-op, not an error.
//! assert!(!history.undo(&mut name).unwrap());
//! assert!(history.redo_available());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod history;

pub use command::Command;
pub use history::History;
