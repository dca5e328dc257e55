// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::ObjectKey;

/// Error returned by keyed canvas operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// The key was never issued by this canvas, or its object has been removed.
    ObjectNotFound(ObjectKey),
    /// [`Canvas::restore`](crate::Canvas::restore) targeted a key that still holds an object.
    KeyInUse(ObjectKey),
}

impl CanvasError {
    /// The key the failed operation referred to.
    #[must_use]
    pub fn key(&self) -> ObjectKey {
        match *self {
            Self::ObjectNotFound(key) | Self::KeyInUse(key) => key,
        }
    }
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectNotFound(key) => write!(f, "{key} is not on the canvas"),
            Self::KeyInUse(key) => write!(f, "{key} already holds an object"),
        }
    }
}

impl core::error::Error for CanvasError {}
