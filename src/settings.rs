// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas configuration and capture constants.
//!
//! `CanvasSettings` is passed into a capture session at construction; there
//! is no module-level global configuration. Visual styling beyond what
//! affects capture (colors, fonts, guide artwork) lives with the rendering
//! layer, not here.

use serde::{Deserialize, Serialize};

/// Maximum distance between consecutive samples of one stroke, in canvas
/// units.
///
/// A drag-gesture stream can report spurious jumps: a second finger landing
/// mid-stroke registers as a large movement of the same logical pointer.
/// Samples farther than this from the previous accepted point are
/// discontinuities rather than pen movement and are dropped.
pub const MAX_SAMPLE_DISTANCE: f64 = 130.0;

/// Visual parameters of the practice canvas that affect capture.
///
/// Line and border width shrink the drawable region (see
/// [`CanvasBounds`](crate::model::CanvasBounds)) so strokes never paint over
/// the canvas border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Stroke line width, in canvas units
    pub line_width: f64,
    /// Width of the border drawn around the canvas, in canvas units
    pub border_width: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            border_width: 1.0,
        }
    }
}
