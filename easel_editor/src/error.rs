// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use easel_canvas::CanvasError;
use easel_transform::{NonAffineMatrix, SingularTransform};

/// Error returned by [`Editor`](crate::Editor) operations.
///
/// None of these abort the session: the editor state is left consistent and
/// the caller may keep dispatching events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorError {
    /// A keyed operation referred to an object that is not on the canvas.
    Canvas(CanvasError),
    /// A commit would have recorded a transform that cannot be undone.
    Singular(SingularTransform),
    /// A custom transform was not an affine matrix.
    NonAffine(NonAffineMatrix),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas: {err}"),
            Self::Singular(err) => write!(f, "commit rejected: {err}"),
            Self::NonAffine(err) => write!(f, "custom transform rejected: {err}"),
        }
    }
}

impl core::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            Self::Singular(err) => Some(err),
            Self::NonAffine(err) => Some(err),
        }
    }
}

impl From<CanvasError> for EditorError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

impl From<SingularTransform> for EditorError {
    fn from(err: SingularTransform) -> Self {
        Self::Singular(err)
    }
}

impl From<NonAffineMatrix> for EditorError {
    fn from(err: NonAffineMatrix) -> Self {
        Self::NonAffine(err)
    }
}
