//! Resize engine.
//!
//! Two modes, matching the two ways a host edits size:
//!
//! - **Handle drag** — the caller supplies explicit position deltas for the
//!   dragged edge/corner; the change is clamped and then accepted or
//!   rejected whole.
//! - **Field input** — only the new width/height is known; growth is
//!   distributed per axis according to which sides are blocked by touching
//!   neighbors.
//!
//! Every mode is atomic: a rejected resize leaves the room untouched and
//! returns `None`.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::collision::rect_collides;
use crate::consts::{EDGE_TOLERANCE, MAX_ROOM_SIZE, MIN_ROOM_SIZE};
use crate::geometry::{Rect, overlap_span};
use crate::model::Room;

/// Which sides of a room touch another room. A blocked side pins that edge
/// during field-input growth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockedSides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

/// Detect which edges of `room` have a neighbor flush against them, with
/// wall-perpendicular extents overlapping.
#[must_use]
pub fn blocked_sides(room: &Room, rooms: &[&Room]) -> BlockedSides {
    let mut blocked = BlockedSides::default();
    for other in rooms.iter().filter(|r| r.id != room.id) {
        let y_overlap = overlap_span(room.y, room.bottom(), other.y, other.bottom()) > 0.0;
        let x_overlap = overlap_span(room.x, room.right(), other.x, other.right()) > 0.0;

        if y_overlap && (other.right() - room.x).abs() <= EDGE_TOLERANCE {
            blocked.left = true;
        }
        if y_overlap && (room.right() - other.x).abs() <= EDGE_TOLERANCE {
            blocked.right = true;
        }
        if x_overlap && (other.bottom() - room.y).abs() <= EDGE_TOLERANCE {
            blocked.top = true;
        }
        if x_overlap && (room.bottom() - other.y).abs() <= EDGE_TOLERANCE {
            blocked.bottom = true;
        }
    }
    blocked
}

/// Handle-drag resize: explicit position delta, clamped sizes, atomic
/// collision rejection. Returns the updated room or `None`.
#[must_use]
pub fn resize_with_delta(
    room: &Room,
    new_width: f64,
    new_height: f64,
    dx: f64,
    dy: f64,
    rooms: &[&Room],
) -> Option<Room> {
    let width = new_width.clamp(MIN_ROOM_SIZE, MAX_ROOM_SIZE);
    let height = new_height.clamp(MIN_ROOM_SIZE, MAX_ROOM_SIZE);
    let x = (room.x + dx).max(0.0);
    let y = (room.y + dy).max(0.0);

    accept_if_clear(room, x, y, width, height, rooms)
}

/// Field-input resize: distribute growth per axis away from blocked sides.
///
/// Per axis: one side blocked → grow away from it (the blocked edge stays
/// fixed); neither blocked → grow symmetrically from the center; both
/// blocked → default to growing toward the positive axis.
#[must_use]
pub fn resize_to(room: &Room, new_width: f64, new_height: f64, rooms: &[&Room]) -> Option<Room> {
    let width = new_width.clamp(MIN_ROOM_SIZE, MAX_ROOM_SIZE);
    let height = new_height.clamp(MIN_ROOM_SIZE, MAX_ROOM_SIZE);
    let blocked = blocked_sides(room, rooms);

    let x = distribute(room.x, room.width, width, blocked.left, blocked.right);
    let y = distribute(room.y, room.height, height, blocked.top, blocked.bottom);

    accept_if_clear(room, x, y, width, height, rooms)
}

/// Rotation is a degenerate resize: swap extents, clamp the position back
/// into the non-negative quadrant, reject on collision.
#[must_use]
pub fn rotate(room: &Room, rooms: &[&Room]) -> Option<Room> {
    let width = room.height;
    let height = room.width;
    let x = room.x.max(0.0);
    let y = room.y.max(0.0);

    accept_if_clear(room, x, y, width, height, rooms)
}

/// New origin for one axis given the old span and blocked flags.
fn distribute(pos: f64, old_extent: f64, new_extent: f64, neg_blocked: bool, pos_blocked: bool) -> f64 {
    let delta = new_extent - old_extent;
    match (neg_blocked, pos_blocked) {
        // Negative side pinned (or both): grow toward the positive axis.
        (true, false) | (true, true) => pos,
        // Positive side pinned: grow away from it, far edge stays put.
        (false, true) => pos - delta,
        // Free on both sides: grow symmetrically from the center.
        (false, false) => pos - delta / 2.0,
    }
}

fn accept_if_clear(
    room: &Room,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rooms: &[&Room],
) -> Option<Room> {
    if rect_collides(&Rect::new(x, y, width, height), Some(room.id), rooms) {
        return None;
    }
    let mut updated = room.clone();
    updated.x = x;
    updated.y = y;
    updated.width = width;
    updated.height = height;
    Some(updated)
}
