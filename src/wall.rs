//! Shared-edge detection and door anchoring.
//!
//! Two rooms share a wall when the relevant edges sit within
//! [`EDGE_TOLERANCE`] of each other and their perpendicular extents
//! overlap with positive length. Each match yields an addressable
//! `SharedEdge` usable for highlighting and door placement.
//!
//! In door mode, a click is resolved to the nearest wall by projecting
//! the point onto each edge segment and taking the minimum perpendicular
//! distance; the projected fraction along the segment becomes the door's
//! `position`.

#[cfg(test)]
#[path = "wall_test.rs"]
mod wall_test;

use crate::consts::{DOOR_PLACEMENT_MAX, DOOR_PLACEMENT_MIN, EDGE_TOLERANCE};
use crate::geometry::{distance, overlap_span};
use crate::model::{DoorEdge, Room, RoomId};

/// A wall segment where two rooms touch.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedEdge {
    /// The room whose edge this record is expressed against.
    pub room_id: RoomId,
    /// The neighbor on the far side of the wall.
    pub other_room_id: RoomId,
    /// Which edge of `room_id` is shared.
    pub edge: DoorEdge,
    /// Fractional start of the shared span along the owning edge, in `[0, 1]`.
    pub start_pos: f64,
    /// Fractional end of the shared span along the owning edge, in `[0, 1]`.
    pub end_pos: f64,
    /// Absolute start of the shared segment.
    pub x1: f64,
    pub y1: f64,
    /// Absolute end of the shared segment.
    pub x2: f64,
    pub y2: f64,
}

/// A resolved anchor for a new door: which wall, where along it, and the
/// neighbor across it (if the anchor lies on a shared span).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorAnchor {
    pub room_id: RoomId,
    pub edge: DoorEdge,
    /// Fractional position along the edge, clamped away from corners.
    pub position: f64,
    pub connected_room_id: Option<RoomId>,
}

/// A wall as a directed segment from `(x1, y1)` to `(x2, y2)`, running in
/// the edge's natural direction (left→right or top→bottom).
#[must_use]
pub fn edge_segment(room: &Room, edge: DoorEdge) -> (f64, f64, f64, f64) {
    match edge {
        DoorEdge::Top => (room.x, room.y, room.right(), room.y),
        DoorEdge::Bottom => (room.x, room.bottom(), room.right(), room.bottom()),
        DoorEdge::Left => (room.x, room.y, room.x, room.bottom()),
        DoorEdge::Right => (room.right(), room.y, room.right(), room.bottom()),
    }
}

/// Scan all unordered room pairs for shared walls. Each match is reported
/// once, from the perspective of the pair's room that appears first in the
/// slice.
#[must_use]
pub fn shared_edges(rooms: &[&Room]) -> Vec<SharedEdge> {
    let mut out = Vec::new();
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            // b to the right of a
            if (a.right() - b.x).abs() <= EDGE_TOLERANCE {
                push_vertical(&mut out, a, b, DoorEdge::Right, a.right());
            }
            // b to the left of a
            if (b.right() - a.x).abs() <= EDGE_TOLERANCE {
                push_vertical(&mut out, a, b, DoorEdge::Left, a.x);
            }
            // b below a
            if (a.bottom() - b.y).abs() <= EDGE_TOLERANCE {
                push_horizontal(&mut out, a, b, DoorEdge::Bottom, a.bottom());
            }
            // b above a
            if (b.bottom() - a.y).abs() <= EDGE_TOLERANCE {
                push_horizontal(&mut out, a, b, DoorEdge::Top, a.y);
            }
        }
    }
    out
}

fn push_vertical(out: &mut Vec<SharedEdge>, a: &Room, b: &Room, edge: DoorEdge, x: f64) {
    let lo = a.y.max(b.y);
    let hi = a.bottom().min(b.bottom());
    if hi - lo <= 0.0 {
        return;
    }
    out.push(SharedEdge {
        room_id: a.id,
        other_room_id: b.id,
        edge,
        start_pos: (lo - a.y) / a.height,
        end_pos: (hi - a.y) / a.height,
        x1: x,
        y1: lo,
        x2: x,
        y2: hi,
    });
}

fn push_horizontal(out: &mut Vec<SharedEdge>, a: &Room, b: &Room, edge: DoorEdge, y: f64) {
    let lo = a.x.max(b.x);
    let hi = a.right().min(b.right());
    if hi - lo <= 0.0 {
        return;
    }
    out.push(SharedEdge {
        room_id: a.id,
        other_room_id: b.id,
        edge,
        start_pos: (lo - a.x) / a.width,
        end_pos: (hi - a.x) / a.width,
        x1: lo,
        y1: y,
        x2: hi,
        y2: y,
    });
}

/// Resolve a door-mode click at world point `(px, py)` to the nearest wall
/// within `max_dist`. Returns `None` when no wall is close enough.
#[must_use]
pub fn find_door_anchor(px: f64, py: f64, rooms: &[&Room], max_dist: f64) -> Option<DoorAnchor> {
    let edges = [DoorEdge::Top, DoorEdge::Bottom, DoorEdge::Left, DoorEdge::Right];
    let mut best: Option<(f64, RoomId, DoorEdge, f64)> = None;

    for room in rooms {
        for edge in edges {
            let (x1, y1, x2, y2) = edge_segment(room, edge);
            let (t, qx, qy) = project_onto_segment(px, py, x1, y1, x2, y2);
            let d = distance(px, py, qx, qy);
            if d <= max_dist && best.is_none_or(|(bd, ..)| d < bd) {
                best = Some((d, room.id, edge, t));
            }
        }
    }

    let (_, room_id, edge, t) = best?;
    let position = t.clamp(DOOR_PLACEMENT_MIN, DOOR_PLACEMENT_MAX);
    let room = rooms.iter().find(|r| r.id == room_id)?;
    let connected_room_id = neighbor_across(room, edge, position, rooms);
    Some(DoorAnchor { room_id, edge, position, connected_room_id })
}

/// The room on the far side of `room`'s `edge` at fractional position `t`,
/// if one touches there.
#[must_use]
pub fn neighbor_across(room: &Room, edge: DoorEdge, t: f64, rooms: &[&Room]) -> Option<RoomId> {
    for other in rooms {
        if other.id == room.id {
            continue;
        }
        let (facing_ok, span) = match edge {
            DoorEdge::Right => (
                (room.right() - other.x).abs() <= EDGE_TOLERANCE,
                overlap_span(room.y, room.bottom(), other.y, other.bottom()),
            ),
            DoorEdge::Left => (
                (other.right() - room.x).abs() <= EDGE_TOLERANCE,
                overlap_span(room.y, room.bottom(), other.y, other.bottom()),
            ),
            DoorEdge::Bottom => (
                (room.bottom() - other.y).abs() <= EDGE_TOLERANCE,
                overlap_span(room.x, room.right(), other.x, other.right()),
            ),
            DoorEdge::Top => (
                (other.bottom() - room.y).abs() <= EDGE_TOLERANCE,
                overlap_span(room.x, room.right(), other.x, other.right()),
            ),
        };
        if !facing_ok || span <= 0.0 {
            continue;
        }
        // The anchor point itself must fall inside the neighbor's span.
        let anchor = if edge.is_horizontal() {
            room.x + t * room.width
        } else {
            room.y + t * room.height
        };
        let (lo, hi) = if edge.is_horizontal() {
            (other.x, other.right())
        } else {
            (other.y, other.bottom())
        };
        if anchor >= lo - EDGE_TOLERANCE && anchor <= hi + EDGE_TOLERANCE {
            return Some(other.id);
        }
    }
    None
}

/// Project `(px, py)` onto the segment, returning the clamped fraction `t`
/// and the projected point.
fn project_onto_segment(
    px: f64,
    py: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> (f64, f64, f64) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return (0.0, x1, y1);
    }
    let t = (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0);
    (t, x1 + t * dx, y1 + t * dy)
}
