#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn bounds_approx_eq(a: Bounds, b: Bounds) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.width, b.width) && approx_eq(a.height, b.height)
}

/// The original window proportions: a 1280-wide screen, 720 tall.
fn court() -> Vec<CourtShape> {
    shapes(1280.0, 720.0)
}

// --- Shape inventory ---

#[test]
fn nine_shapes() {
    assert_eq!(court().len(), 9);
}

#[test]
fn arc_start_angles_alternate_by_side() {
    let starts: Vec<f64> = court()
        .iter()
        .filter_map(|s| match s {
            CourtShape::Arc { start_deg, .. } => Some(*start_deg),
            _ => None,
        })
        .collect();
    // Left-side arcs open from the bottom, right-side from the top.
    assert_eq!(starts, vec![270.0, 90.0, 270.0, 90.0]);
}

#[test]
fn every_arc_sweeps_half_a_turn() {
    for shape in court() {
        if let CourtShape::Arc { extent_deg, .. } = shape {
            assert_eq!(extent_deg, 180.0);
        }
    }
}

// --- Boundary and half-court line ---

#[test]
fn boundary_insets_by_fortieth_and_twelfth() {
    let CourtShape::Rect(b) = court()[0] else {
        panic!("expected boundary rect");
    };
    // 1280/40 = 32, 720/12 = 60.
    assert!(bounds_approx_eq(b, Bounds::new(32.0, 60.0, 1216.0, 600.0)));
}

#[test]
fn half_court_line_spans_full_height() {
    let CourtShape::Line { from, to } = court()[1] else {
        panic!("expected half-court line");
    };
    assert_eq!(from, Point::new(640.0, 0.0));
    assert_eq!(to, Point::new(640.0, 720.0));
}

// --- Center circle ---

#[test]
fn center_circle_occupies_middle_third() {
    let CourtShape::Oval(b) = court()[2] else {
        panic!("expected center circle");
    };
    let left = 1280.0 / 2.3; // 556.5217...
    assert!(approx_eq(b.x, left));
    assert!(approx_eq(b.y, 240.0));
    assert!(approx_eq(b.width, 1280.0 - 2.0 * left));
    assert!(approx_eq(b.height, 240.0));
}

#[test]
fn center_circle_is_centered_on_half_court() {
    let CourtShape::Oval(b) = court()[2] else {
        panic!("expected center circle");
    };
    assert!(approx_eq(b.center().x, 640.0));
    assert!(approx_eq(b.center().y, 360.0));
}

// --- Lanes ---

#[test]
fn left_lane_bounds() {
    let CourtShape::Rect(b) = court()[3] else {
        panic!("expected left lane");
    };
    assert!(bounds_approx_eq(b, Bounds::new(32.0, 240.0, 288.0, 240.0)));
}

#[test]
fn right_lane_mirrors_left() {
    let CourtShape::Rect(b) = court()[5] else {
        panic!("expected right lane");
    };
    // Corners arrive right-to-left and normalize: 960 .. 1248.
    assert!(bounds_approx_eq(b, Bounds::new(960.0, 240.0, 288.0, 240.0)));
}

// --- Free-throw arcs ---

#[test]
fn left_free_throw_arc_bounds() {
    let CourtShape::Arc { bounds, start_deg, extent_deg } = court()[4] else {
        panic!("expected left free-throw arc");
    };
    let right = 1280.0 / 2.3 - 150.0; // 406.5217...
    assert!(approx_eq(bounds.x, 220.0)); // 1280/4 - 100
    assert!(approx_eq(bounds.y, 240.0));
    assert!(approx_eq(bounds.width, right - 220.0));
    assert!(approx_eq(bounds.height, 240.0));
    assert_eq!(start_deg, 270.0);
    assert_eq!(extent_deg, 180.0);
}

#[test]
fn right_free_throw_arc_bounds() {
    let CourtShape::Arc { bounds, start_deg, .. } = court()[6] else {
        panic!("expected right free-throw arc");
    };
    let left = (1280.0 - 1280.0 / 2.3) + 150.0; // 873.4783...
    assert!(approx_eq(bounds.x, left));
    assert!(approx_eq(bounds.width, 1060.0 - left)); // 1280 - 1280/4 + 100 = 1060
    assert_eq!(start_deg, 90.0);
}

#[test]
fn free_throw_arcs_are_the_same_size() {
    let arcs: Vec<Bounds> = court()
        .iter()
        .filter_map(|s| match s {
            CourtShape::Arc { bounds, .. } => Some(*bounds),
            _ => None,
        })
        .collect();
    assert!(approx_eq(arcs[0].width, arcs[1].width));
    assert!(approx_eq(arcs[0].height, arcs[1].height));
}

// --- Three-point arcs ---

#[test]
fn left_three_point_arc_extends_off_court() {
    let CourtShape::Arc { bounds, start_deg, .. } = court()[7] else {
        panic!("expected left three-point arc");
    };
    let left = -1280.0 / 2.9; // -441.3793...
    let right = 1280.0 / 2.3 - 40.0; // 516.5217...
    assert!(approx_eq(bounds.x, left));
    assert!(approx_eq(bounds.width, right - left));
    assert!(approx_eq(bounds.y, 100.0)); // 720/12 + 40
    assert!(approx_eq(bounds.height, 520.0)); // 620 - 100
    assert_eq!(start_deg, 270.0);
}

#[test]
fn right_three_point_arc_bounds() {
    let CourtShape::Arc { bounds, start_deg, .. } = court()[8] else {
        panic!("expected right three-point arc");
    };
    let left = (1280.0 - 1280.0 / 2.3) + 50.0; // 773.4783...
    let right = 1280.0 + 1280.0 / 2.9; // 1721.3793...
    assert!(approx_eq(bounds.x, left));
    assert!(approx_eq(bounds.width, right - left));
    assert_eq!(start_deg, 90.0);
}

// --- Scaling ---

#[test]
fn boundary_scales_with_the_board() {
    let small = shapes(400.0, 120.0);
    let CourtShape::Rect(b) = small[0] else {
        panic!("expected boundary rect");
    };
    assert!(bounds_approx_eq(b, Bounds::new(10.0, 10.0, 380.0, 100.0)));
}

#[test]
fn half_court_line_scales_with_the_board() {
    let small = shapes(400.0, 120.0);
    let CourtShape::Line { from, to } = small[1] else {
        panic!("expected half-court line");
    };
    assert_eq!(from, Point::new(200.0, 0.0));
    assert_eq!(to, Point::new(200.0, 120.0));
}
