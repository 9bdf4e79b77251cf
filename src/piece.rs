//! Per-side drawing state: the strategy piece and its marker stack.
//!
//! Each side of the board owns exactly one piece. A piece records the latest
//! pointer position, the handles of its placed markers (newest last), and
//! the bounds of its most recent line segment so that segment can be erased
//! by overdrawing the background color.

#[cfg(test)]
#[path = "piece_test.rs"]
mod piece_test;

use crate::consts::{MARKER_RADIUS, SEGMENT_SIZE};
use crate::geom::{Bounds, Point};
use crate::surface::{Color, GlyphId, Surface};

/// Ordered handles of one side's placed markers, newest on top.
///
/// A plain LIFO; the board enforces the per-side cap before pushing.
#[derive(Debug, Default)]
pub struct MarkerStack {
    ids: Vec<GlyphId>,
}

impl MarkerStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a newly placed marker's handle.
    pub fn push(&mut self, id: GlyphId) {
        self.ids.push(id);
    }

    /// Pop the most recently pushed handle, if any.
    pub fn pop(&mut self) -> Option<GlyphId> {
        self.ids.pop()
    }

    /// Number of handles on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no markers are placed (or all were undone).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The handles in placement order, oldest first.
    #[must_use]
    pub fn ids(&self) -> &[GlyphId] {
        &self.ids
    }
}

/// One side's drawing state and its operations against the surface.
pub struct StrategyPiece {
    color: Color,
    position: Point,
    markers: MarkerStack,
    last_segment: Option<Bounds>,
}

impl StrategyPiece {
    /// Create a piece drawing in the given color, positioned at the origin
    /// with nothing placed.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            position: Point::new(0.0, 0.0),
            markers: MarkerStack::new(),
            last_segment: None,
        }
    }

    /// The color this piece draws with.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The last recorded pointer position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Record the latest pointer location. Pure mutation, no drawing.
    pub fn update_position(&mut self, at: Point) {
        self.position = at;
    }

    /// Draw a marker oval centered on the recorded position and push its
    /// handle. The caller enforces the per-side cap; this draws
    /// unconditionally.
    pub fn create_marker(&mut self, surface: &mut Surface) -> GlyphId {
        let bounds = Bounds::centered(self.position, MARKER_RADIUS * 2.0, MARKER_RADIUS * 2.0);
        let id = surface.draw_oval(bounds, self.color);
        self.markers.push(id);
        id
    }

    /// Draw one square line segment anchored at the recorded position and
    /// remember its bounds for a later erase. Each pointer sample gets its
    /// own segment; a drag leaves a dotted stroke.
    pub fn create_segment(&mut self, surface: &mut Surface) -> GlyphId {
        let bounds = Bounds::anchored(self.position, SEGMENT_SIZE, SEGMENT_SIZE);
        let id = surface.draw_rect(bounds, self.color, self.color);
        self.last_segment = Some(bounds);
        id
    }

    /// Overdraw the most recent segment in the background color, consuming
    /// its recorded bounds. A no-op when no segment bounds are recorded.
    pub fn erase(&mut self, surface: &mut Surface) -> Option<Bounds> {
        let bounds = self.last_segment.take()?;
        let background = surface.background_fill();
        surface.draw_rect(bounds, background, background);
        Some(bounds)
    }

    /// Pop the newest marker and delete it from the surface. A no-op when
    /// the stack is empty.
    pub fn undo_marker(&mut self, surface: &mut Surface) -> Option<GlyphId> {
        let id = self.markers.pop()?;
        surface.remove(&id);
        Some(id)
    }

    /// Number of markers this piece currently has placed.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// The bounds of the most recent segment, if one exists un-erased.
    #[must_use]
    pub fn last_segment(&self) -> Option<Bounds> {
        self.last_segment
    }

    /// Read-only view of the marker stack.
    #[must_use]
    pub fn markers(&self) -> &MarkerStack {
        &self.markers
    }
}
