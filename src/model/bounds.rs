// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! The inset rectangle within which drawn points are considered valid.

use crate::settings::CanvasSettings;
use kurbo::{Point, Rect};

/// Drawable region of the practice canvas.
///
/// Derived from the measured surface rect by insetting every side by half the
/// stroke line width plus the border width, so a line drawn right up to the
/// edge still renders inside the canvas border. The default is the
/// degenerate zero-area rect at the origin, which rejects essentially every
/// point; callers must measure the surface before filtering begins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasBounds {
    rect: Rect,
}

impl CanvasBounds {
    /// Bounds for a measured surface, inset for line and border width
    pub fn from_surface(surface: Rect, settings: &CanvasSettings) -> Self {
        let inset = settings.line_width / 2.0 + settings.border_width;
        Self {
            rect: surface.inset(-inset),
        }
    }

    /// Whether a point lies inside the bounds, edges included.
    ///
    /// `kurbo::Rect::contains` is half-open on the max edges; drawing up to
    /// the inset border is legal here, so the check is inclusive on all four
    /// sides.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.rect.x0
            && point.x <= self.rect.x1
            && point.y >= self.rect.y0
            && point.y <= self.rect.y1
    }

    /// The inset rect itself
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_100() -> CanvasBounds {
        // line width 2, border width 1 -> inset 2 on every side
        CanvasBounds::from_surface(Rect::new(0.0, 0.0, 100.0, 100.0), &CanvasSettings::default())
    }

    #[test]
    fn surface_is_inset_by_half_line_plus_border() {
        let bounds = bounds_100();
        assert_eq!(bounds.rect(), Rect::new(2.0, 2.0, 98.0, 98.0));
    }

    #[test]
    fn contains_is_inclusive_on_edges() {
        let bounds = bounds_100();
        assert!(bounds.contains(Point::new(2.0, 2.0)));
        assert!(bounds.contains(Point::new(98.0, 98.0)));
        assert!(bounds.contains(Point::new(50.0, 50.0)));
    }

    #[test]
    fn rejects_points_past_the_inset() {
        let bounds = bounds_100();
        assert!(!bounds.contains(Point::new(1.0, 50.0)));
        assert!(!bounds.contains(Point::new(99.0, 50.0)));
        assert!(!bounds.contains(Point::new(200.0, 200.0)));
        assert!(!bounds.contains(Point::new(50.0, -5.0)));
    }

    #[test]
    fn default_bounds_reject_ordinary_points() {
        let bounds = CanvasBounds::default();
        assert!(!bounds.contains(Point::new(10.0, 10.0)));
        assert!(!bounds.contains(Point::new(0.5, 0.0)));
    }
}
