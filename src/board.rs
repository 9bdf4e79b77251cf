//! The board: the routing state machine over side and mode.
//!
//! The board owns the drawing surface, both strategy pieces, and the
//! per-side marker counts. It stores only the derived [`Bindings`]; the
//! side/mode flags themselves arrive as an immutable snapshot with every
//! event, so a routing decision and the flags it read can never be torn by
//! a flag change happening between delivery and handling. Every handled
//! event reports a [`BoardAction`] for the session layer to surface.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::consts::MAX_MARKERS_PER_SIDE;
use crate::geom::{Bounds, Point};
use crate::input::{Bindings, BoardFlags, InputEvent, Side};
use crate::piece::StrategyPiece;
use crate::surface::{GlyphId, Surface};

/// What a routed event did, for the host to surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardAction {
    /// The event was ignored or had nothing to do.
    None,
    /// A marker was placed for `side`.
    MarkerPlaced { side: Side, id: GlyphId },
    /// `side` already has the full count of markers; nothing was drawn.
    LimitReached { side: Side },
    /// A line segment was drawn for `side`.
    SegmentDrawn { side: Side, id: GlyphId },
    /// The active side's most recent segment was overdrawn at `bounds`.
    Erased { side: Side, bounds: Bounds },
    /// The newest marker for `side` was removed by undo.
    MarkerRemoved { side: Side, id: GlyphId },
}

/// The diagramming board: surface, pieces, counts, and event routing.
pub struct Board {
    surface: Surface,
    offense: StrategyPiece,
    defense: StrategyPiece,
    offense_count: usize,
    defense_count: usize,
    bindings: Bindings,
}

impl Board {
    /// Create a fresh board: the court built for the given size, new pieces,
    /// zero counts, and inert routing until the controller re-binds.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            surface: Surface::new(width, height),
            offense: StrategyPiece::new(Side::Offense.color()),
            defense: StrategyPiece::new(Side::Defense.color()),
            offense_count: 0,
            defense_count: 0,
            bindings: Bindings::Inert,
        }
    }

    /// Swap the active routing to match the flags. Called by the controller
    /// after every side/mode change; stale routing never survives it.
    pub fn rebind(&mut self, flags: BoardFlags) {
        self.bindings = Bindings::from_flags(flags);
    }

    /// Route one raw event under the given flags snapshot.
    pub fn handle(&mut self, event: InputEvent, flags: BoardFlags) -> BoardAction {
        match (self.bindings, event) {
            (Bindings::Inert, _) | (Bindings::Markers, InputEvent::PrimaryDrag(_)) => {
                BoardAction::None
            }
            (Bindings::Markers, InputEvent::PrimaryPress(at)) => self.place_marker(at, flags),
            (Bindings::Lines, InputEvent::PrimaryPress(at) | InputEvent::PrimaryDrag(at)) => {
                self.draw_segment(at, flags)
            }
            (_, InputEvent::SecondaryDrag(at)) => self.erase_segment(at, flags),
            (_, InputEvent::Undo) => self.undo_marker(flags),
        }
    }

    /// Marker placement from a primary press: cap-checked per side. The
    /// court is reasserted in every branch, as the original redrew it
    /// unconditionally.
    fn place_marker(&mut self, at: Point, flags: BoardFlags) -> BoardAction {
        let action = match flags.side {
            Some(side) if self.marker_count(side) < MAX_MARKERS_PER_SIDE => {
                let (piece, surface) = self.side_piece(side);
                piece.update_position(at);
                let id = piece.create_marker(surface);
                match side {
                    Side::Offense => self.offense_count += 1,
                    Side::Defense => self.defense_count += 1,
                }
                BoardAction::MarkerPlaced { side, id }
            }
            Some(side) => BoardAction::LimitReached { side },
            None => BoardAction::None,
        };
        self.surface.reassert_background();
        action
    }

    /// Segment drawing from a primary press or drag: requires a chosen side;
    /// each sample yields one square.
    fn draw_segment(&mut self, at: Point, flags: BoardFlags) -> BoardAction {
        let Some(side) = flags.side else {
            return BoardAction::None;
        };
        let (piece, surface) = self.side_piece(side);
        piece.update_position(at);
        let id = piece.create_segment(surface);
        BoardAction::SegmentDrawn { side, id }
    }

    /// Erase on the active piece: the flags decide the target, never the
    /// glyph under the pointer. An unset side falls through to offense.
    fn erase_segment(&mut self, at: Point, flags: BoardFlags) -> BoardAction {
        let side = flags.side.unwrap_or(Side::Offense);
        let (piece, surface) = self.side_piece(side);
        piece.update_position(at);
        let erased = piece.erase(surface);
        self.surface.reassert_background();
        match erased {
            Some(bounds) => BoardAction::Erased { side, bounds },
            None => BoardAction::None,
        }
    }

    /// Undo the newest marker. The offense chain fires only when offense is
    /// the active side; otherwise the defense chain is consulted, including
    /// when no side is chosen. One side per request.
    fn undo_marker(&mut self, flags: BoardFlags) -> BoardAction {
        let side = match flags.side {
            Some(Side::Offense) => Side::Offense,
            _ => Side::Defense,
        };
        if self.marker_count(side) == 0 {
            return BoardAction::None;
        }
        let (piece, surface) = self.side_piece(side);
        let Some(id) = piece.undo_marker(surface) else {
            return BoardAction::None;
        };
        match side {
            Side::Offense => self.offense_count -= 1,
            Side::Defense => self.defense_count -= 1,
        }
        BoardAction::MarkerRemoved { side, id }
    }

    /// Split borrow: the piece drawing for `side` plus the shared surface.
    fn side_piece(&mut self, side: Side) -> (&mut StrategyPiece, &mut Surface) {
        match side {
            Side::Offense => (&mut self.offense, &mut self.surface),
            Side::Defense => (&mut self.defense, &mut self.surface),
        }
    }

    // --- Queries ---

    /// Number of markers placed for `side`.
    #[must_use]
    pub fn marker_count(&self, side: Side) -> usize {
        match side {
            Side::Offense => self.offense_count,
            Side::Defense => self.defense_count,
        }
    }

    /// Read-only view of the piece drawing for `side`.
    #[must_use]
    pub fn piece(&self, side: Side) -> &StrategyPiece {
        match side {
            Side::Offense => &self.offense,
            Side::Defense => &self.defense,
        }
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The routing currently in force.
    #[must_use]
    pub fn bindings(&self) -> Bindings {
        self.bindings
    }

    /// Board width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.surface.width()
    }

    /// Board height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.surface.height()
    }
}
