//! Session controller: the side/mode flags, the board, and user-facing text.
//!
//! The session is the pure core behind the host's menus. Every flag command
//! re-binds the board's routing, every raw input event is forwarded with a
//! snapshot of the flags taken at delivery, and the status line and notices
//! reproduce the desktop program's wording. The host shows
//! [`Notice::welcome`] once at startup and [`Notice::help`] on request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use log::info;

use crate::board::{Board, BoardAction};
use crate::input::{BoardFlags, InputEvent, Mode, Side};

/// Usage text shown at startup and from the help menu.
const USAGE_BODY: &str = "Welcome!\n\
Please choose the player representation you want put down by clicking 'Side'\n\
on the menu bar. Then choose whether you want to place player reps on the\n\
whiteboard or draw lines to show player motion by clicking 'Mode' on the menu\n\
bar. The default mode is player representation which will draw circles on the\n\
board. To see this message again click on help.";

/// Informational text the host shows in a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub body: &'static str,
}

impl Notice {
    /// Shown once when the program starts.
    #[must_use]
    pub fn welcome() -> Self {
        Self { title: "Welcome!", body: USAGE_BODY }
    }

    /// Shown from the Help menu; same body as the welcome.
    #[must_use]
    pub fn help() -> Self {
        Self { title: "Help!", body: USAGE_BODY }
    }

    /// Shown when a side already has its full count of markers.
    #[must_use]
    pub fn limit() -> Self {
        Self {
            title: "Too Many!",
            body: "Only 5 players can be represented per side",
        }
    }

    /// The notice a board action calls for, if any.
    #[must_use]
    pub fn for_action(action: &BoardAction) -> Option<Self> {
        match action {
            BoardAction::LimitReached { .. } => Some(Self::limit()),
            _ => None,
        }
    }
}

/// The session: flags, board, and the commands the host menus invoke.
pub struct Session {
    flags: BoardFlags,
    board: Board,
}

impl Session {
    /// Start a session for a board of the given size: no side chosen, marker
    /// mode, a fresh inert board.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            flags: BoardFlags::default(),
            board: Board::new(width, height),
        }
    }

    /// Select the active side, as from the Side menu.
    pub fn choose_side(&mut self, side: Side) {
        info!("side selected: {}", side.label());
        self.flags.side = Some(side);
        self.board.rebind(self.flags);
    }

    /// Select the active mode, as from the Mode menu.
    pub fn choose_mode(&mut self, mode: Mode) {
        info!("mode selected: {}", mode.label());
        self.flags.mode = mode;
        self.board.rebind(self.flags);
    }

    /// Flip the active side, choosing offense when none is set.
    pub fn toggle_side(&mut self) {
        match self.flags.side {
            Some(Side::Offense) => self.choose_side(Side::Defense),
            _ => self.choose_side(Side::Offense),
        }
    }

    /// Flip the active mode.
    pub fn toggle_mode(&mut self) {
        match self.flags.mode {
            Mode::Markers => self.choose_mode(Mode::Lines),
            Mode::Lines => self.choose_mode(Mode::Markers),
        }
    }

    /// Discard the board and the flags and start over, keeping the
    /// dimensions. The new board is inert until the next flag command.
    pub fn new_board(&mut self) {
        info!("board reset");
        let (width, height) = (self.board.width(), self.board.height());
        self.flags = BoardFlags::default();
        self.board = Board::new(width, height);
    }

    /// Forward one raw event to the board with the current flags snapshot.
    pub fn handle(&mut self, event: InputEvent) -> BoardAction {
        self.board.handle(event, self.flags)
    }

    /// The status-bar text for the current flags.
    #[must_use]
    pub fn status_line(&self) -> String {
        match (self.flags.side, self.flags.mode) {
            (None, Mode::Markers) => {
                "Choose player representation. Default mode is 'Player Representation'.".to_owned()
            }
            (side, mode) => format!(
                "Current side: {} , Current Mode: {}",
                side.map_or("", Side::label),
                mode.label()
            ),
        }
    }

    // --- Queries ---

    /// The current flags.
    #[must_use]
    pub fn flags(&self) -> BoardFlags {
        self.flags
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}
