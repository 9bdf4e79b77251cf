//! Shared numeric constants for the playbook crate.

// ── Markers ─────────────────────────────────────────────────────

/// Radius in pixels of a player marker oval.
pub const MARKER_RADIUS: f64 = 20.0;

/// Most markers one side may have on the board at once.
pub const MAX_MARKERS_PER_SIDE: usize = 5;

// ── Line drawing ────────────────────────────────────────────────

/// Edge length in pixels of one square line segment.
pub const SEGMENT_SIZE: f64 = 10.0;
