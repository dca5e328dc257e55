// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A reversible change to some `Target`.
///
/// A command is a data-carrying record: everything needed to perform the
/// change and to take it back lives in the value itself rather than in
/// captured closures. Implementations typically match on a record enum, one
/// arm per kind of change.
///
/// ## Contract
///
/// For every command a [`History`](crate::History) holds, calling
/// [`apply`](Command::apply) then [`revert`](Command::revert) (or the
/// reverse) must restore the target to the state it was in beforehand.
/// Both methods take `&mut self` so that a command may move data between
/// itself and the target (for example, an object removed by `revert` and put
/// back by `apply`).
///
/// A method that returns an error must leave the target unchanged.
pub trait Command<Target: ?Sized> {
    /// Error produced when the change cannot be performed.
    type Error;

    /// Performs (or re-performs) the change.
    fn apply(&mut self, target: &mut Target) -> Result<(), Self::Error>;

    /// Takes the change back.
    fn revert(&mut self, target: &mut Target) -> Result<(), Self::Error>;
}
