//! Board engine for an interactive basketball strategy whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the full lifecycle of the playbook board: translating raw pointer/key
//! events into marker placements, line segments, erasures, and undo,
//! enforcing the per-side marker cap, keeping the static court layer
//! visible above dynamic paint, and rendering the scene. The host
//! JavaScript layer is responsible only for wiring DOM events and menu
//! commands to the engine and surfacing the resulting
//! [`board::BoardAction`]s and [`session::Notice`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`session`] | Side/mode flags, status line, notices, board reset |
//! | [`board`] | Event routing state machine over side and mode |
//! | [`piece`] | Per-side marker stack and line state |
//! | [`surface`] | Glyph store with z-order and the static court layer |
//! | [`court`] | Procedural court outline geometry |
//! | [`input`] | Sides, modes, flags snapshot, raw events, bindings |
//! | [`geom`] | Point and bounds value types |
//! | [`render`] | Scene rendering to the 2d context |
//! | [`consts`] | Shared numeric constants (marker radius, caps, etc.) |

pub mod board;
pub mod consts;
pub mod court;
pub mod engine;
pub mod geom;
pub mod input;
pub mod piece;
pub mod render;
pub mod session;
pub mod surface;
