//! Static court geometry: boundary, half-court line, center circle, lanes,
//! and the free-throw / three-point arcs.
//!
//! The court is produced as data and stroked by the renderer; it is never
//! part of the dynamic glyph store. Arc angles follow the classic convention
//! of degrees counterclockwise from 3 o'clock, with a positive extent
//! sweeping further counterclockwise in screen space.

#[cfg(test)]
#[path = "court_test.rs"]
mod court_test;

use crate::geom::{Bounds, Point};

/// One stroke-only element of the court outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourtShape {
    /// Unfilled rectangle outline.
    Rect(Bounds),
    /// Straight line between two points.
    Line { from: Point, to: Point },
    /// Unfilled oval inscribed in its bounds.
    Oval(Bounds),
    /// Partial oval inscribed in its bounds, from `start_deg` sweeping
    /// `extent_deg` counterclockwise.
    Arc {
        bounds: Bounds,
        start_deg: f64,
        extent_deg: f64,
    },
}

/// The full court outline for a board of the given size.
///
/// All positions are proportions of the board dimensions, so the court
/// scales with the window it was created for. The free-throw and
/// three-point arcs carry fixed pixel offsets from those proportions.
#[must_use]
pub fn shapes(width: f64, height: f64) -> Vec<CourtShape> {
    let half_width = width / 2.0;
    let quarter_width = width / 4.0;
    let third_height = height / 3.0;
    let lane_bottom = height - third_height;
    let lane_right = width - quarter_width;
    let bounds_left = width / 40.0;
    let bounds_right = width - bounds_left;
    let bounds_top = height / 12.0;
    let bounds_bottom = height - bounds_top;
    let circle_left = width / 2.3;
    let circle_right = width - circle_left;
    let arc_top = bounds_top + 40.0;
    let arc_bottom = bounds_bottom - 40.0;
    let three_point_left = -width / 2.9;

    vec![
        // Out-of-bounds boundary.
        CourtShape::Rect(Bounds::from_corners(
            Point::new(bounds_left, bounds_top),
            Point::new(bounds_right, bounds_bottom),
        )),
        // Half-court line.
        CourtShape::Line {
            from: Point::new(half_width, 0.0),
            to: Point::new(half_width, height),
        },
        // Center circle.
        CourtShape::Oval(Bounds::from_corners(
            Point::new(circle_left, third_height),
            Point::new(circle_right, lane_bottom),
        )),
        // Left lane.
        CourtShape::Rect(Bounds::from_corners(
            Point::new(bounds_left, third_height),
            Point::new(quarter_width, lane_bottom),
        )),
        // Left free-throw arc, opening toward the basket.
        CourtShape::Arc {
            bounds: Bounds::from_corners(
                Point::new(quarter_width - 100.0, third_height),
                Point::new(circle_left - 150.0, lane_bottom),
            ),
            start_deg: 270.0,
            extent_deg: 180.0,
        },
        // Right lane.
        CourtShape::Rect(Bounds::from_corners(
            Point::new(bounds_right, third_height),
            Point::new(lane_right, lane_bottom),
        )),
        // Right free-throw arc.
        CourtShape::Arc {
            bounds: Bounds::from_corners(
                Point::new(lane_right + 100.0, third_height),
                Point::new(circle_right + 150.0, lane_bottom),
            ),
            start_deg: 90.0,
            extent_deg: 180.0,
        },
        // Left three-point arc.
        CourtShape::Arc {
            bounds: Bounds::from_corners(
                Point::new(three_point_left, arc_top),
                Point::new(circle_left - 40.0, arc_bottom),
            ),
            start_deg: 270.0,
            extent_deg: 180.0,
        },
        // Right three-point arc.
        CourtShape::Arc {
            bounds: Bounds::from_corners(
                Point::new(circle_right + 50.0, arc_top),
                Point::new(width - three_point_left, arc_bottom),
            ),
            start_deg: 90.0,
            extent_deg: 180.0,
        },
    ]
}
