// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! Replay of recorded pointer sessions.
//!
//! A practice attempt can be logged on-device as a JSON document holding the
//! measured surface rect, the canvas settings in effect, and the ordered
//! pointer events. Replaying such a document through a fresh
//! [`CaptureSession`] reproduces exactly the strokes live capture produced,
//! which makes captured-input bug reports reproducible off-device.

use crate::capture::{CaptureSession, PointerPhase, PointerSample};
use crate::model::Stroke;
use crate::settings::CanvasSettings;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Errors from loading a recorded session
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read session file")]
    Io(#[from] std::io::Error),
    #[error("malformed session file")]
    Json(#[from] serde_json::Error),
}

/// One recorded pointer event.
///
/// Release events carry the lift position too, mirroring what the gesture
/// source reports; replay ignores it, as live capture does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub x: f64,
    pub y: f64,
    pub phase: PointerPhase,
}

/// A full recorded practice attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Measured surface rect as (x0, y0, x1, y1)
    pub surface: (f64, f64, f64, f64),
    /// Canvas settings in effect during recording
    #[serde(default)]
    pub settings: CanvasSettings,
    /// Pointer events in delivery order
    pub events: Vec<RecordedEvent>,
}

impl RecordedSession {
    /// Load a session from a JSON file
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Feed a recorded session through a fresh capture pipeline and return the
/// committed strokes.
pub fn replay(session: &RecordedSession) -> Vec<Stroke> {
    let mut capture = CaptureSession::new(session.settings);
    let (x0, y0, x1, y1) = session.surface;
    capture.set_bounds(Rect::new(x0, y0, x1, y1));

    for event in &session.events {
        capture.handle_sample(PointerSample {
            pos: Point::new(event.x, event.y),
            phase: event.phase,
        });
    }

    capture.into_strokes()
}
