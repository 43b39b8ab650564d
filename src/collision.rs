//! Collision detection over a set of rooms.
//!
//! Rooms may touch edge-to-edge; only interior overlap beyond the epsilon
//! counts as a collision. Scans are O(n²) pairwise, which is fine for
//! interactive room counts (tens of rooms).

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use std::collections::HashSet;

use crate::geometry::Rect;
use crate::model::{Room, RoomId};

/// Whether placing `moving` at `(x, y)` with its current size would collide
/// with any other room. The moving room itself is excluded by id.
#[must_use]
pub fn would_collide(moving: &Room, x: f64, y: f64, rooms: &[&Room]) -> bool {
    rect_collides(&Rect::new(x, y, moving.width, moving.height), Some(moving.id), rooms)
}

/// Whether an arbitrary rectangle collides with any room, optionally
/// excluding one room by id. Used for resize candidates where the extents
/// differ from the room's current ones.
#[must_use]
pub fn rect_collides(rect: &Rect, exclude: Option<RoomId>, rooms: &[&Room]) -> bool {
    rooms
        .iter()
        .filter(|r| Some(r.id) != exclude)
        .any(|r| rect.overlaps(&r.rect()))
}

/// Ids of every room currently overlapping at least one other room. Used
/// for visual warning highlighting.
#[must_use]
pub fn all_overlapping_ids(rooms: &[&Room]) -> HashSet<RoomId> {
    let mut out = HashSet::new();
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            if a.rect().overlaps(&b.rect()) {
                out.insert(a.id);
                out.insert(b.id);
            }
        }
    }
    out
}
