//! Shared numeric constants for the floorplan engine.
//!
//! One grid unit is one meter; all geometry is expressed in grid units
//! unless the name carries a `_PX` suffix.

// ── Collision / adjacency ───────────────────────────────────────

/// Interiors must overlap by more than this (both axes) to collide (~1 cm).
pub const COLLISION_EPSILON: f64 = 0.01;

/// Max gap between two walls for them to count as touching/shared.
pub const EDGE_TOLERANCE: f64 = 0.1;

// ── Room limits ─────────────────────────────────────────────────

/// Minimum room extent on either axis.
pub const MIN_ROOM_SIZE: f64 = 1.0;

/// Maximum room extent on either axis.
pub const MAX_ROOM_SIZE: f64 = 20.0;

// ── Doors ───────────────────────────────────────────────────────

/// Narrowest allowed door, in meters.
pub const MIN_DOOR_WIDTH: f64 = 0.6;

/// Widest allowed door, in meters.
pub const MAX_DOOR_WIDTH: f64 = 2.0;

/// Door width used when the host supplies none.
pub const DEFAULT_DOOR_WIDTH: f64 = 0.9;

/// Creation-time clamp of a door's fractional position, keeping it off corners.
pub const DOOR_PLACEMENT_MIN: f64 = 0.15;
pub const DOOR_PLACEMENT_MAX: f64 = 0.85;

/// Drag-time clamp of a door's fractional position.
pub const DOOR_DRAG_MIN: f64 = 0.1;
pub const DOOR_DRAG_MAX: f64 = 0.9;

// ── Snap solver ─────────────────────────────────────────────────

/// How far from the dragged target the solver may search.
pub const SNAP_SEARCH_RADIUS: f64 = 3.0;

/// Cell step for the brute-force fallback scan.
pub const SNAP_GRID_STEP: f64 = 0.5;

/// Ranking is `distance - score * SNAP_SCORE_WEIGHT`; aligned candidates
/// win modest distance ties.
pub const SNAP_SCORE_WEIGHT: f64 = 0.5;

// ── Keyboard ────────────────────────────────────────────────────

/// Arrow-key nudge distance.
pub const NUDGE_STEP: f64 = 0.1;

// ── Timing ──────────────────────────────────────────────────────

/// Minimum interval between ghost-preview updates (~60 Hz).
pub const GHOST_THROTTLE_MS: f64 = 16.0;

/// Debounce delay for numeric field commits.
pub const NUMBER_DEBOUNCE_MS: f64 = 150.0;

/// Debounce delay for text field commits.
pub const TEXT_DEBOUNCE_MS: f64 = 300.0;

// ── Hit-testing / presentation ──────────────────────────────────

/// Max screen distance from a wall for a door-mode click to attach.
pub const DOOR_HIT_DIST_PX: f64 = 12.0;

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Screen pixels per grid unit at zoom 1. Presentation only; carries no
/// geometric meaning for collision purposes.
pub const CELL_PX: f64 = 40.0;
