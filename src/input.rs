//! Input model: sides, modes, the flags snapshot, raw events, and the
//! derived routing state.
//!
//! [`BoardFlags`] is an immutable snapshot of the session's side/mode pair,
//! captured when each raw event is delivered, so routing decisions never
//! read mutable shared state. [`Bindings`] is what the board stores between
//! flag changes: which family of events is live at all. `Button`, `Key`,
//! and `Modifiers` are the vocabulary the engine consumes from the host.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::surface::Color;

/// Which team current input applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The attacking team; draws in red.
    Offense,
    /// The defending team; draws in blue.
    Defense,
}

impl Side {
    /// The drawing color of this side's piece.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Offense => Color::Red,
            Self::Defense => Color::Blue,
        }
    }

    /// Display name, as shown in the status line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Offense => "Offense",
            Self::Defense => "Defense",
        }
    }
}

/// Whether input places player markers or draws line segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks place player markers (default).
    #[default]
    Markers,
    /// Clicks and drags draw line segments.
    Lines,
}

impl Mode {
    /// Display name, as shown in the status line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Markers => "Players Representation Mode",
            Self::Lines => "Line Mode",
        }
    }
}

/// Immutable snapshot of the session flags, passed with each routed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardFlags {
    /// The active side, once one has been chosen.
    pub side: Option<Side>,
    /// The active mode.
    pub mode: Mode,
}

impl BoardFlags {
    #[must_use]
    pub fn new(side: Option<Side>, mode: Mode) -> Self {
        Self { side, mode }
    }
}

/// A raw input event, as interpreted from the host's pointer/key stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed at a position.
    PrimaryPress(Point),
    /// Pointer moved with the primary button held.
    PrimaryDrag(Point),
    /// Pointer moved with the secondary button held.
    SecondaryDrag(Point),
    /// The undo shortcut.
    Undo,
}

/// Which family of events the board currently routes.
///
/// Derived from the flags on every side/mode change and swapped atomically,
/// so a stale mode's handlers can never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bindings {
    /// Nothing is bound; every event is ignored. The state of a fresh board
    /// before the first side/mode command.
    #[default]
    Inert,
    /// Marker placement: primary press places, secondary drag erases, undo
    /// pops. Requires a chosen side.
    Markers,
    /// Line drawing: primary press and drag emit segments, secondary drag
    /// erases, undo pops.
    Lines,
}

impl Bindings {
    /// The routing for a flags snapshot: markers only once a side is chosen,
    /// lines regardless (segment creation checks the side itself).
    #[must_use]
    pub fn from_flags(flags: BoardFlags) -> Self {
        match flags.mode {
            Mode::Markers if flags.side.is_some() => Self::Markers,
            Mode::Markers => Self::Inert,
            Mode::Lines => Self::Lines,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key, holding the name as reported by the browser (e.g. `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}
