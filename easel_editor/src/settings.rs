// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_interaction::GridSnap;
use easel_transform::CoordinateSpace;
use kurbo::Size;

/// Editor configuration.
///
/// Constructed once (usually from the user's settings file) and passed to
/// [`Editor::new`](crate::Editor::new). Toggles changed at runtime through
/// the editor are written back here so they can be persisted.
///
/// With the `serde` feature, the field names follow the settings-file keys
/// (`gridMajorAxesSpacing`, `gridMinorAxesCount`, `defaultGridSnap`,
/// `enableImmediatePreview`, and camelCase for the rest). Missing keys take their defaults and unknown
/// keys are ignored, so a settings file shared with the GUI layer parses
/// as-is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EditorSettings {
    /// Distance between major grid lines, in canvas units.
    #[cfg_attr(feature = "serde", serde(rename = "gridMajorAxesSpacing"))]
    pub grid_major_spacing: f64,
    /// Minor grid lines between two major lines.
    #[cfg_attr(feature = "serde", serde(rename = "gridMinorAxesCount"))]
    pub grid_minor_count: u32,
    /// Snap drags to the minor grid.
    #[cfg_attr(feature = "serde", serde(rename = "defaultGridSnap"))]
    pub grid_snap: bool,
    /// Commit transforms in world coordinates rather than object-local ones.
    pub use_global_coords: bool,
    /// Draw the tentative transform while dragging.
    #[cfg_attr(feature = "serde", serde(rename = "enableImmediatePreview"))]
    pub immediate_preview: bool,
    /// Maximum number of undo entries; `None` is unbounded.
    pub history_limit: Option<usize>,
    /// Initial view surface size in pixels.
    pub view_size: Size,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_major_spacing: 100.0,
            grid_minor_count: 9,
            grid_snap: false,
            use_global_coords: true,
            immediate_preview: true,
            history_limit: None,
            view_size: Size::new(800.0, 600.0),
        }
    }
}

impl EditorSettings {
    /// The snap grid described by the grid settings.
    #[must_use]
    pub fn grid(&self) -> GridSnap {
        GridSnap::new(self.grid_major_spacing, self.grid_minor_count)
    }

    /// The coordinate space commits compose in.
    #[must_use]
    pub fn coordinate_space(&self) -> CoordinateSpace {
        if self.use_global_coords {
            CoordinateSpace::Global
        } else {
            CoordinateSpace::Local
        }
    }
}
