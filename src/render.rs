//! Rendering: draws the surface scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! the surface and produces pixels — it does not mutate any application
//! state.
//!
//! Paint order is the layering contract: the base coat first, then dynamic
//! glyphs in `(z_index, id)` order, then the court strokes, so the court
//! outline is never occluded by markers or by erase overdraws.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::court::CourtShape;
use crate::geom::Bounds;
use crate::surface::{Color, Glyph, GlyphShape, Surface};

/// Draw the full scene: base, dynamic glyphs, court.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, surface: &Surface) -> Result<(), JsValue> {
    ctx.set_line_width(1.0);

    // Layer 1: the base coat.
    ctx.set_fill_style_str(surface.background_fill().as_css());
    ctx.fill_rect(0.0, 0.0, surface.width(), surface.height());

    // Layer 2: dynamic glyphs in z-order (bottom first).
    for glyph in surface.sorted_glyphs() {
        draw_glyph(ctx, glyph)?;
    }

    // Layer 3: the court, stroked above the dynamic layer.
    ctx.set_stroke_style_str(Color::Black.as_css());
    for shape in surface.background() {
        draw_court_shape(ctx, shape)?;
    }

    Ok(())
}

// =============================================================
// Dynamic glyphs
// =============================================================

fn draw_glyph(ctx: &CanvasRenderingContext2d, glyph: &Glyph) -> Result<(), JsValue> {
    match glyph.shape {
        GlyphShape::Oval => {
            let center = glyph.bounds.center();
            ctx.begin_path();
            ctx.ellipse(
                center.x,
                center.y,
                glyph.bounds.radius_x(),
                glyph.bounds.radius_y(),
                0.0,
                0.0,
                2.0 * PI,
            )?;
            ctx.set_fill_style_str(glyph.fill.as_css());
            ctx.fill();
            ctx.set_stroke_style_str(glyph.outline.as_css());
            ctx.stroke();
        }
        GlyphShape::Rect => {
            let b = glyph.bounds;
            ctx.set_fill_style_str(glyph.fill.as_css());
            ctx.fill_rect(b.x, b.y, b.width, b.height);
            ctx.set_stroke_style_str(glyph.outline.as_css());
            ctx.stroke_rect(b.x, b.y, b.width, b.height);
        }
    }
    Ok(())
}

// =============================================================
// Court strokes
// =============================================================

fn draw_court_shape(ctx: &CanvasRenderingContext2d, shape: &CourtShape) -> Result<(), JsValue> {
    match *shape {
        CourtShape::Rect(b) => {
            ctx.stroke_rect(b.x, b.y, b.width, b.height);
        }
        CourtShape::Line { from, to } => {
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.stroke();
        }
        CourtShape::Oval(b) => {
            let center = b.center();
            ctx.begin_path();
            ctx.ellipse(center.x, center.y, b.radius_x(), b.radius_y(), 0.0, 0.0, 2.0 * PI)?;
            ctx.stroke();
        }
        CourtShape::Arc { bounds, start_deg, extent_deg } => {
            draw_arc(ctx, bounds, start_deg, extent_deg)?;
        }
    }
    Ok(())
}

/// Stroke a partial oval given in degrees counterclockwise from 3 o'clock.
/// Canvas angles run clockwise in screen space, so both endpoints negate
/// and a positive extent sweeps anticlockwise.
fn draw_arc(
    ctx: &CanvasRenderingContext2d,
    bounds: Bounds,
    start_deg: f64,
    extent_deg: f64,
) -> Result<(), JsValue> {
    let center = bounds.center();
    let start = (-start_deg).to_radians();
    let end = (-(start_deg + extent_deg)).to_radians();
    ctx.begin_path();
    ctx.ellipse_with_anticlockwise(
        center.x,
        center.y,
        bounds.radius_x(),
        bounds.radius_y(),
        0.0,
        start,
        end,
        extent_deg > 0.0,
    )?;
    ctx.stroke();
    Ok(())
}
