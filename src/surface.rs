//! Scene model: colors, glyphs, and the drawing surface that owns them.
//!
//! The surface holds two real layers. The static layer is the court outline,
//! built once from the board dimensions. The dynamic layer is a z-ordered
//! store of glyphs (marker ovals, line-segment squares, erase overdraws).
//! The renderer reads both — [`Surface::background`] and
//! [`Surface::sorted_glyphs`] — to determine draw order.
//!
//! `reassert_background` keeps the classic redraw-the-court-after-every-draw
//! contract observable: the board invokes it after marker placement and
//! erasure, and each invocation is recorded in a monotonic epoch. With real
//! layering the call changes no pixels; the court is always stroked above
//! the dynamic layer.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::court::{self, CourtShape};
use crate::geom::Bounds;

/// Unique identifier for a glyph on the surface.
pub type GlyphId = Uuid;

/// The board's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Offense markers and lines.
    Red,
    /// Defense markers and lines.
    Blue,
    /// The background; also used to erase by overdrawing.
    White,
    /// Marker outlines and the court strokes.
    Black,
}

impl Color {
    /// The CSS color string for canvas fill/stroke styles.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// The drawn form of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphShape {
    /// Oval inscribed in its bounds.
    Oval,
    /// Filled and outlined rectangle.
    Rect,
}

/// One dynamic object on the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    /// Unique identifier; the handle held by strategy pieces.
    pub id: GlyphId,
    /// Oval or rectangle.
    pub shape: GlyphShape,
    /// Bounding box in board pixels.
    pub bounds: Bounds,
    /// Interior color.
    pub fill: Color,
    /// Outline color.
    pub outline: Color,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
}

/// The drawing surface: static court layer plus z-ordered dynamic glyphs.
pub struct Surface {
    width: f64,
    height: f64,
    background: Vec<CourtShape>,
    glyphs: HashMap<GlyphId, Glyph>,
    next_z: i64,
    background_epoch: u64,
}

impl Surface {
    /// Create a surface for a board of the given size, with the court built
    /// and no dynamic glyphs.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: court::shapes(width, height),
            glyphs: HashMap::new(),
            next_z: 0,
            background_epoch: 0,
        }
    }

    /// Draw an oval filled with `fill`, outlined in black, above everything
    /// drawn so far. Returns the new glyph's handle.
    pub fn draw_oval(&mut self, bounds: Bounds, fill: Color) -> GlyphId {
        self.push_glyph(GlyphShape::Oval, bounds, fill, Color::Black)
    }

    /// Draw a rectangle with the given fill and outline above everything
    /// drawn so far. Returns the new glyph's handle.
    pub fn draw_rect(&mut self, bounds: Bounds, fill: Color, outline: Color) -> GlyphId {
        self.push_glyph(GlyphShape::Rect, bounds, fill, outline)
    }

    fn push_glyph(&mut self, shape: GlyphShape, bounds: Bounds, fill: Color, outline: Color) -> GlyphId {
        let id = Uuid::new_v4();
        let z_index = self.next_z;
        self.next_z += 1;
        self.glyphs.insert(id, Glyph { id, shape, bounds, fill, outline, z_index });
        id
    }

    /// Remove a glyph by handle, returning it if it was present. Removing an
    /// unknown handle is a no-op.
    pub fn remove(&mut self, id: &GlyphId) -> Option<Glyph> {
        self.glyphs.remove(id)
    }

    /// Return a reference to a glyph by handle.
    #[must_use]
    pub fn get(&self, id: &GlyphId) -> Option<&Glyph> {
        self.glyphs.get(id)
    }

    /// Reassert the static layer above the current dynamic state.
    ///
    /// Layering makes this bookkeeping rather than a geometry redraw: the
    /// renderer always strokes the court last, so the call only records that
    /// the contract was honored. Idempotent in visible effect.
    pub fn reassert_background(&mut self) {
        self.background_epoch += 1;
    }

    /// How many times the background has been reasserted.
    #[must_use]
    pub fn background_epoch(&self) -> u64 {
        self.background_epoch
    }

    /// The fill color of the surface base, also used for erasing.
    #[must_use]
    pub fn background_fill(&self) -> Color {
        Color::White
    }

    /// The static court layer.
    #[must_use]
    pub fn background(&self) -> &[CourtShape] {
        &self.background
    }

    /// Return all glyphs sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_glyphs(&self) -> Vec<&Glyph> {
        let mut glyphs: Vec<&Glyph> = self.glyphs.values().collect();
        glyphs.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        glyphs
    }

    /// Number of dynamic glyphs currently on the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the surface has no dynamic glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Board width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Board height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
