//! Top-level engine: the wasm-facing wrapper and its testable core.
//!
//! [`EngineCore`] holds everything that doesn't depend on the canvas
//! element: the session plus the pointer-gesture state used to classify
//! pointer moves as drags. [`Engine`] wraps a core together with the
//! browser canvas element and the render entry point.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::board::BoardAction;
use crate::geom::Point;
use crate::input::{Button, InputEvent, Key, Mode, Modifiers, Side};
use crate::render;
use crate::session::Session;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub session: Session,
    /// The button currently held, for classifying pointer moves.
    pub held: Option<Button>,
}

impl EngineCore {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            session: Session::new(width, height),
            held: None,
        }
    }

    // --- Pointer events ---

    /// Pointer pressed. A primary press is delivered to the board; a
    /// secondary press only arms drag classification, since the board
    /// reacts to secondary motion alone.
    pub fn on_pointer_down(&mut self, at: Point, button: Button) -> BoardAction {
        self.held = Some(button);
        match button {
            Button::Primary => self.session.handle(InputEvent::PrimaryPress(at)),
            Button::Secondary => BoardAction::None,
        }
    }

    /// Pointer moved. Classified by the held button; a move with no button
    /// down is ignored.
    pub fn on_pointer_move(&mut self, at: Point) -> BoardAction {
        match self.held {
            Some(Button::Primary) => self.session.handle(InputEvent::PrimaryDrag(at)),
            Some(Button::Secondary) => self.session.handle(InputEvent::SecondaryDrag(at)),
            None => BoardAction::None,
        }
    }

    /// Pointer released. Clears the held button when it matches; never an
    /// action of its own.
    pub fn on_pointer_up(&mut self, button: Button) -> BoardAction {
        if self.held == Some(button) {
            self.held = None;
        }
        BoardAction::None
    }

    // --- Key events ---

    /// Key pressed. Ctrl+Z is the undo shortcut; every other key belongs to
    /// the host's menu accelerators.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> BoardAction {
        if modifiers.ctrl && key.0.eq_ignore_ascii_case("z") {
            return self.session.handle(InputEvent::Undo);
        }
        BoardAction::None
    }
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element, sized from it.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        Self {
            canvas,
            core: EngineCore::new(width, height),
        }
    }

    // --- Delegated commands ---

    pub fn choose_side(&mut self, side: Side) {
        self.core.session.choose_side(side);
    }

    pub fn choose_mode(&mut self, mode: Mode) {
        self.core.session.choose_mode(mode);
    }

    pub fn toggle_side(&mut self) {
        self.core.session.toggle_side();
    }

    pub fn toggle_mode(&mut self) {
        self.core.session.toggle_mode();
    }

    pub fn new_board(&mut self) {
        self.core.session.new_board();
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, at: Point, button: Button) -> BoardAction {
        self.core.on_pointer_down(at, button)
    }

    pub fn on_pointer_move(&mut self, at: Point) -> BoardAction {
        self.core.on_pointer_move(at)
    }

    pub fn on_pointer_up(&mut self, button: Button) -> BoardAction {
        self.core.on_pointer_up(button)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> BoardAction {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current surface to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2d context is unavailable or any `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, self.core.session.board().surface())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn status_line(&self) -> String {
        self.core.session.status_line()
    }
}
