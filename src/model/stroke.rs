// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! A single captured stroke.

use super::StrokeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One continuous pencil-down-to-pencil-up drawing motion.
///
/// Points are stored in drawing order; the renderer draws them as a connected
/// polyline. The id is assigned at creation and stays stable for the
/// stroke's lifetime. It is not persisted: deserialized strokes get a fresh
/// id, which keeps the global counter authoritative within a process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(skip)]
    id: StrokeId,
    points: Vec<Point>,
}

impl Stroke {
    /// Create a new empty stroke with a fresh id
    pub fn new() -> Self {
        Self {
            id: StrokeId::next(),
            points: Vec::new(),
        }
    }

    /// The stroke's stable identity, used as a list key by the renderer
    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// The accepted points, in drawing order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The most recently accepted point, if any
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Append an accepted point. Filtering is the capture session's job;
    /// the stroke itself accepts whatever it is given.
    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Take the finished stroke out, leaving a fresh empty one in its place.
    pub(crate) fn take(&mut self) -> Stroke {
        std::mem::replace(self, Stroke::new())
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stroke_is_empty() {
        let stroke = Stroke::new();
        assert!(stroke.is_empty());
        assert_eq!(stroke.len(), 0);
        assert_eq!(stroke.last_point(), None);
    }

    #[test]
    fn push_preserves_drawing_order() {
        let mut stroke = Stroke::new();
        stroke.push(Point::new(10.0, 10.0));
        stroke.push(Point::new(15.0, 12.0));
        stroke.push(Point::new(20.0, 14.0));

        assert_eq!(stroke.len(), 3);
        assert_eq!(stroke.points()[0], Point::new(10.0, 10.0));
        assert_eq!(stroke.points()[2], Point::new(20.0, 14.0));
        assert_eq!(stroke.last_point(), Some(Point::new(20.0, 14.0)));
    }

    #[test]
    fn take_returns_contents_and_resets() {
        let mut stroke = Stroke::new();
        let original_id = stroke.id();
        stroke.push(Point::new(1.0, 2.0));

        let taken = stroke.take();
        assert_eq!(taken.id(), original_id);
        assert_eq!(taken.len(), 1);

        assert!(stroke.is_empty());
        assert_ne!(stroke.id(), original_id);
    }
}
