#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::HANDLE_RADIUS_PX;
use crate::geometry::distance;
use crate::model::{Door, DoorId, Room, RoomId};
use crate::wall::edge_segment;

/// Which part of a room was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The room's interior.
    Body,
    /// One of the eight resize handles (selected room only).
    ResizeHandle(ResizeAnchor),
    /// A door on one of the room's walls.
    Door(DoorId),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub room_id: RoomId,
    pub part: HitPart,
}

/// Test what sits under `world_pt`: the selected room's resize handles
/// first (they extend past the body), then doors, then room bodies.
#[must_use]
pub fn hit_test(
    world_pt: Point,
    rooms: &[&Room],
    doors: &[&Door],
    camera: &Camera,
    selected_id: Option<RoomId>,
) -> Option<Hit> {
    let slop = camera.screen_dist_to_world(HANDLE_RADIUS_PX);

    if let Some(sel) = selected_id {
        if let Some(room) = rooms.iter().find(|r| r.id == sel) {
            if let Some(anchor) = handle_at(room, world_pt, slop) {
                return Some(Hit { room_id: sel, part: HitPart::ResizeHandle(anchor) });
            }
        }
    }

    for door in doors {
        let Some(room) = rooms.iter().find(|r| r.id == door.room_id) else {
            continue;
        };
        let (ax, ay) = door_anchor_point(room, door);
        let half = (door.width / 2.0).max(slop);
        if distance(world_pt.x, world_pt.y, ax, ay) <= half {
            return Some(Hit { room_id: door.room_id, part: HitPart::Door(door.id) });
        }
    }

    // Rooms never overlap, so any containing body wins; reverse sorted
    // order keeps ties (shared edges) deterministic.
    for room in rooms.iter().rev() {
        if room.rect().contains(world_pt.x, world_pt.y) {
            return Some(Hit { room_id: room.id, part: HitPart::Body });
        }
    }

    None
}

/// The world-space midpoint of a door opening.
#[must_use]
pub fn door_anchor_point(room: &Room, door: &Door) -> (f64, f64) {
    let (x1, y1, x2, y2) = edge_segment(room, door.edge);
    (x1 + (x2 - x1) * door.position, y1 + (y2 - y1) * door.position)
}

/// The resize handle under `world_pt`, if any. Handles sit at the four
/// corners and four edge midpoints.
fn handle_at(room: &Room, world_pt: Point, slop: f64) -> Option<ResizeAnchor> {
    let (cx, cy) = room.rect().center();
    let spots = [
        (ResizeAnchor::Nw, room.x, room.y),
        (ResizeAnchor::N, cx, room.y),
        (ResizeAnchor::Ne, room.right(), room.y),
        (ResizeAnchor::E, room.right(), cy),
        (ResizeAnchor::Se, room.right(), room.bottom()),
        (ResizeAnchor::S, cx, room.bottom()),
        (ResizeAnchor::Sw, room.x, room.bottom()),
        (ResizeAnchor::W, room.x, cy),
    ];
    spots
        .into_iter()
        .find(|&(_, hx, hy)| distance(world_pt.x, world_pt.y, hx, hy) <= slop)
        .map(|(anchor, ..)| anchor)
}
