// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// What a pointer press does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Pick an object without transforming it.
    Select,
    /// Drag the view.
    Pan,
    /// Drag an object by the pointer offset.
    #[default]
    Translate,
    /// Rotate an object about the anchor.
    Rotate,
    /// Scale an object about the anchor.
    Scale,
}

impl Mode {
    /// The transform this mode drags out, if any.
    #[must_use]
    pub const fn transform_mode(self) -> Option<TransformMode> {
        match self {
            Self::Translate => Some(TransformMode::Translate),
            Self::Rotate => Some(TransformMode::Rotate),
            Self::Scale => Some(TransformMode::Scale),
            Self::Select | Self::Pan => None,
        }
    }
}

/// The modes that produce a tentative transform while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformMode {
    /// Offset by the pointer delta.
    Translate,
    /// Rotation about the anchor.
    Rotate,
    /// Scale about the anchor.
    Scale,
}

impl From<TransformMode> for Mode {
    fn from(mode: TransformMode) -> Self {
        match mode {
            TransformMode::Translate => Self::Translate,
            TransformMode::Rotate => Self::Rotate,
            TransformMode::Scale => Self::Scale,
        }
    }
}

/// Where the anchor for rotate and scale sits.
///
/// Corner modes refer to the selected object's world bounding box. Canvas
/// space is y-up, so "top" is the edge with the larger y.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AnchorMode {
    /// The canvas origin.
    #[default]
    Origin,
    /// Center of the bounding box.
    Center,
    /// Minimum x, maximum y.
    TopLeft,
    /// Maximum x, maximum y.
    TopRight,
    /// Minimum x, minimum y.
    BottomLeft,
    /// Maximum x, minimum y.
    BottomRight,
    /// A fixed, user-chosen canvas point.
    Custom(Point),
}

impl AnchorMode {
    /// Resolves the anchor against an object's world bounding box.
    #[must_use]
    pub fn resolve(self, bounds: Rect) -> Point {
        match self {
            Self::Origin => Point::ZERO,
            Self::Center => bounds.center(),
            Self::TopLeft => Point::new(bounds.min_x(), bounds.max_y()),
            Self::TopRight => Point::new(bounds.max_x(), bounds.max_y()),
            Self::BottomLeft => Point::new(bounds.min_x(), bounds.min_y()),
            Self::BottomRight => Point::new(bounds.max_x(), bounds.min_y()),
            Self::Custom(pt) => pt,
        }
    }
}
