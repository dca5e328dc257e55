// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Command;

/// Linear undo/redo history.
///
/// `History` keeps two stacks of commands:
/// - **undo**: commands whose effect is currently applied, oldest first.
/// - **redo**: commands that were undone, most recently undone last.
///
/// Recording a new command clears the redo stack: history never branches.
///
/// The undo stack is unbounded by default. [`History::with_limit`] caps it,
/// discarding the oldest entries once the cap is exceeded.
#[derive(Clone, Debug)]
pub struct History<C> {
    undo: VecDeque<C>,
    redo: Vec<C>,
    limit: Option<usize>,
    revision: u64,
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> History<C> {
    /// Creates an empty, unbounded history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: None,
            revision: 0,
        }
    }

    /// Creates an empty history that keeps at most `limit` undo entries.
    ///
    /// A limit of `0` disables recording entirely.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: Some(limit),
            revision: 0,
        }
    }

    /// The configured undo capacity, if any.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` if there is anything to undo.
    ///
    /// Typically drives the enabled state of an "Undo" control.
    #[must_use]
    pub fn changes_made(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if there is anything to redo.
    #[must_use]
    pub fn redo_available(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of entries that can be undone.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of entries that can be redone.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undoable entries, oldest first; the back one is undone first.
    #[must_use]
    pub fn undo_entries(&self) -> &VecDeque<C> {
        &self.undo
    }

    /// Redoable entries; the last one is redone first.
    #[must_use]
    pub fn redo_entries(&self) -> &[C] {
        &self.redo
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped whenever either stack changes, which gives
    /// observers a cheap "did anything change?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records a command whose effect has already been applied.
    ///
    /// Clears the redo stack.
    pub fn push(&mut self, entry: C) {
        self.redo.clear();
        self.undo.push_back(entry);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
        self.bump_revision();
        log::debug!(
            "history: recorded entry ({} undo, 0 redo)",
            self.undo.len()
        );
    }

    /// Drops every entry from both stacks.
    pub fn clear(&mut self) {
        if self.undo.is_empty() && self.redo.is_empty() {
            return;
        }
        self.undo.clear();
        self.redo.clear();
        self.bump_revision();
    }

    /// Applies `entry` to `target`, then records it.
    ///
    /// The entry is recorded only if it applied successfully, so a failure never
    /// leaves a dangling entry on the stack.
    ///
    /// # Errors
    ///
    /// Returns the command's error if applying fails; the history is unchanged.
    pub fn execute<T>(&mut self, mut entry: C, target: &mut T) -> Result<(), C::Error>
    where
        C: Command<T>,
        T: ?Sized,
    {
        if let Err(err) = entry.apply(target) {
            log::warn!("history: command failed to apply; not recorded");
            return Err(err);
        }
        self.push(entry);
        Ok(())
    }

    /// Reverts the most recent entry and moves it to the redo stack.
    ///
    /// Returns `Ok(false)` without doing anything if there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns the command's error if reverting fails. The entry stays on the
    /// undo stack.
    pub fn undo<T>(&mut self, target: &mut T) -> Result<bool, C::Error>
    where
        C: Command<T>,
        T: ?Sized,
    {
        let Some(mut entry) = self.undo.pop_back() else {
            return Ok(false);
        };
        if let Err(err) = entry.revert(target) {
            log::warn!("history: undo failed; entry kept");
            self.undo.push_back(entry);
            return Err(err);
        }
        self.redo.push(entry);
        self.bump_revision();
        log::debug!(
            "history: undo ({} undo, {} redo)",
            self.undo.len(),
            self.redo.len()
        );
        Ok(true)
    }

    /// Re-applies the most recently undone entry and moves it back to the undo stack.
    ///
    /// Returns `Ok(false)` without doing anything if there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Returns the command's error if applying fails. The entry stays on the
    /// redo stack.
    pub fn redo<T>(&mut self, target: &mut T) -> Result<bool, C::Error>
    where
        C: Command<T>,
        T: ?Sized,
    {
        let Some(mut entry) = self.redo.pop() else {
            return Ok(false);
        };
        if let Err(err) = entry.apply(target) {
            log::warn!("history: redo failed; entry kept");
            self.redo.push(entry);
            return Err(err);
        }
        self.undo.push_back(entry);
        self.bump_revision();
        log::debug!(
            "history: redo ({} undo, {} redo)",
            self.undo.len(),
            self.redo.len()
        );
        Ok(true)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adds its amount to an `i64`.
    #[derive(Debug, PartialEq)]
    struct Add(i64);

    impl Command<i64> for Add {
        type Error = ();

        fn apply(&mut self, target: &mut i64) -> Result<(), ()> {
            *target += self.0;
            Ok(())
        }

        fn revert(&mut self, target: &mut i64) -> Result<(), ()> {
            *target -= self.0;
            Ok(())
        }
    }

    /// Fails whenever the target is negative.
    #[derive(Debug, PartialEq)]
    struct Guarded(i64);

    impl Command<i64> for Guarded {
        type Error = &'static str;

        fn apply(&mut self, target: &mut i64) -> Result<(), Self::Error> {
            if *target < 0 {
                return Err("negative");
            }
            *target += self.0;
            Ok(())
        }

        fn revert(&mut self, target: &mut i64) -> Result<(), Self::Error> {
            if *target < 0 {
                return Err("negative");
            }
            *target -= self.0;
            Ok(())
        }
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let mut history = History::<Add>::new();
        let mut value: i64 = 7;
        assert_eq!(history.undo(&mut value), Ok(false));
        assert_eq!(history.redo(&mut value), Ok(false));
        assert_eq!(value, 7);
        assert!(!history.changes_made());
        assert!(!history.redo_available());
        assert_eq!(history.revision(), 0);
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut history = History::new();
        let mut value: i64 = 0;
        history.execute(Add(5), &mut value).unwrap();
        history.execute(Add(3), &mut value).unwrap();
        assert_eq!(value, 8);

        assert_eq!(history.undo(&mut value), Ok(true));
        assert_eq!(value, 5);
        assert!(history.redo_available());

        assert_eq!(history.redo(&mut value), Ok(true));
        assert_eq!(value, 8);
        assert!(!history.redo_available());
    }

    #[test]
    fn push_after_undo_clears_redo() {
        let mut history = History::new();
        let mut value: i64 = 0;
        history.execute(Add(1), &mut value).unwrap(); // X
        history.execute(Add(10), &mut value).unwrap(); // Y
        history.undo(&mut value).unwrap();
        history.execute(Add(100), &mut value).unwrap(); // Z

        assert_eq!(history.undo_entries(), &[Add(1), Add(100)]);
        assert!(history.redo_entries().is_empty());
        assert_eq!(value, 101);
    }

    #[test]
    fn failed_execute_is_not_recorded() {
        let mut history = History::new();
        let mut value: i64 = -1;
        assert_eq!(history.execute(Guarded(4), &mut value), Err("negative"));
        assert!(!history.changes_made());
        assert_eq!(value, -1);
    }

    #[test]
    fn failed_undo_keeps_entry_on_undo_stack() {
        let mut history = History::new();
        let mut value: i64 = 0;
        history.execute(Guarded(4), &mut value).unwrap();
        value = -10;
        let rev = history.revision();

        assert_eq!(history.undo(&mut value), Err("negative"));
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.revision(), rev);
    }

    #[test]
    fn failed_redo_keeps_entry_on_redo_stack() {
        let mut history = History::new();
        let mut value: i64 = 0;
        history.execute(Guarded(4), &mut value).unwrap();
        history.undo(&mut value).unwrap();
        value = -10;

        assert_eq!(history.redo(&mut value), Err("negative"));
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 1);
    }

    #[test]
    fn limit_discards_oldest_entries() {
        let mut history = History::with_limit(2);
        let mut value: i64 = 0;
        for n in [1, 2, 3] {
            history.execute(Add(n), &mut value).unwrap();
        }
        assert_eq!(history.undo_entries(), &[Add(2), Add(3)]);

        while history.undo(&mut value).unwrap() {}
        // The first addition can no longer be undone.
        assert_eq!(value, 1);
    }

    #[test]
    fn limit_holds_across_many_pushes() {
        let mut history = History::with_limit(3);
        for n in 0..100 {
            history.push(Add(n));
            assert!(history.undo_len() <= 3);
        }
        assert_eq!(history.undo_entries(), &[Add(97), Add(98), Add(99)]);

        let mut disabled = History::with_limit(0);
        disabled.push(Add(1));
        assert!(!disabled.changes_made());
    }

    #[test]
    fn clear_bumps_revision_only_on_change() {
        let mut history = History::<Add>::new();
        history.clear();
        assert_eq!(history.revision(), 0);

        history.push(Add(1));
        history.clear();
        assert_eq!(history.revision(), 2);
        assert!(!history.changes_made());
    }
}
