// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! Stroke capture: turning a raw pointer stream into displayable strokes.
//!
//! `CaptureSession` is the state holder for one practice attempt. The input
//! source feeds it every raw movement sample while a press is active and one
//! release event when the pointer lifts. Each movement sample is either
//! accepted into the in-progress stroke or silently dropped: after the first
//! point of a stroke, a sample must be within [`MAX_SAMPLE_DISTANCE`] of the
//! previous accepted point and inside the canvas bounds. Release commits the
//! in-progress stroke to the completed list and resets it.
//!
//! There are no recoverable errors here; every operation succeeds or is a
//! no-op. The rendering layer polls [`CaptureSession::revision`] after
//! delivering events and redraws when the counter has moved, so no reactive
//! binding machinery is needed.

use crate::model::{CanvasBounds, Stroke};
use crate::settings::{CanvasSettings, MAX_SAMPLE_DISTANCE};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Phase of a pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// The pointer moved while pressed (the initial press position arrives
    /// as the first move)
    Moved,
    /// The pointer lifted
    Ended,
}

/// One raw event from the input source, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pos: Point,
    pub phase: PointerPhase,
}

/// Capture state for one practice attempt on the canvas.
///
/// Holds the in-progress stroke (accumulating while the pointer is down),
/// the completed strokes of this attempt, and the bounds/settings used for
/// filtering. The session is implicitly Idle when the in-progress stroke is
/// empty and Dragging otherwise; release always commits whatever was
/// accumulated, there is no cancel path.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    settings: CanvasSettings,
    bounds: CanvasBounds,
    active: Stroke,
    completed: Vec<Stroke>,
    revision: u64,
}

impl CaptureSession {
    /// Create a session with the given canvas settings.
    ///
    /// Bounds start as the degenerate default; call [`set_bounds`] with the
    /// measured surface rect before feeding samples, otherwise every point
    /// after the first of each stroke is rejected.
    ///
    /// [`set_bounds`]: CaptureSession::set_bounds
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            settings,
            bounds: CanvasBounds::default(),
            active: Stroke::new(),
            completed: Vec::new(),
            revision: 0,
        }
    }

    /// Record the measured surface rect.
    ///
    /// Called once when the canvas is laid out, and again only if the
    /// surface is re-measured.
    pub fn set_bounds(&mut self, surface: Rect) {
        self.bounds = CanvasBounds::from_surface(surface, &self.settings);
        tracing::debug!("canvas bounds set to {:?}", self.bounds.rect());
        self.bump();
    }

    /// Handle one raw movement sample of an active press.
    ///
    /// The first sample of a stroke is taken as-is: there is no previous
    /// point to measure against, and an out-of-bounds press is admitted.
    /// Later samples must pass both the distance and the bounds filter.
    pub fn pointer_moved(&mut self, pos: Point) {
        let Some(last) = self.active.last_point() else {
            self.active.push(pos);
            self.bump();
            return;
        };

        if last.distance(pos) > MAX_SAMPLE_DISTANCE {
            tracing::debug!("dropped sample at {:?}: discontinuous jump", pos);
            return;
        }
        if !self.bounds.contains(pos) {
            tracing::debug!("dropped sample at {:?}: outside canvas", pos);
            return;
        }

        self.active.push(pos);
        self.bump();
    }

    /// Commit the in-progress stroke and reset it.
    ///
    /// The commit is unconditional, matching the gesture contract: even a
    /// single-point stroke (or an empty one, if the press produced no
    /// samples) lands in the completed list.
    pub fn pointer_released(&mut self) {
        let stroke = self.active.take();
        tracing::debug!(points = stroke.len(), "committed stroke");
        self.completed.push(stroke);
        self.bump();
    }

    /// Dispatch a raw sample on its phase
    pub fn handle_sample(&mut self, sample: PointerSample) {
        match sample.phase {
            PointerPhase::Moved => self.pointer_moved(sample.pos),
            PointerPhase::Ended => self.pointer_released(),
        }
    }

    /// Forget all strokes, completed and in-progress.
    ///
    /// Called when the practice character changes; bounds and settings are
    /// kept since the canvas itself has not moved.
    pub fn clear(&mut self) {
        self.active = Stroke::new();
        self.completed.clear();
        self.bump();
    }

    /// The completed strokes of this attempt, oldest first
    pub fn strokes(&self) -> &[Stroke] {
        &self.completed
    }

    /// Consume the session, yielding the completed strokes
    pub fn into_strokes(self) -> Vec<Stroke> {
        self.completed
    }

    /// The stroke currently being drawn (empty while Idle)
    pub fn active_stroke(&self) -> &Stroke {
        &self.active
    }

    /// The bounds currently used for filtering
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// The settings this session was constructed with
    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    /// Monotonic change counter.
    ///
    /// Bumped on every accepted mutation (accepted point, commit, clear,
    /// bounds change) and untouched by dropped samples. The renderer polls
    /// this after delivering events and redraws when it has moved.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
