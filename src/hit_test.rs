#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::model::{DoorEdge, RoomKind};

// =============================================================
// Helpers
// =============================================================

fn room_at(x: f64, y: f64, w: f64, h: f64) -> Room {
    Room {
        id: Uuid::new_v4(),
        kind: RoomKind::Bathroom,
        name: "Bathroom".to_owned(),
        x,
        y,
        width: w,
        height: h,
    }
}

fn door_on(room: &Room, edge: DoorEdge, position: f64) -> Door {
    Door {
        id: Uuid::new_v4(),
        room_id: room.id,
        connected_room_id: None,
        edge,
        position,
        width: 0.9,
    }
}

fn cam() -> Camera {
    Camera::default()
}

// =============================================================
// Body hits
// =============================================================

#[test]
fn point_inside_room_hits_body() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let hit = hit_test(Point::new(2.0, 1.5), &[&a], &[], &cam(), None).unwrap();
    assert_eq!(hit.room_id, a.id);
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn point_outside_everything_misses() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    assert!(hit_test(Point::new(10.0, 10.0), &[&a], &[], &cam(), None).is_none());
}

#[test]
fn point_picks_the_containing_room() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.0, 0.0, 4.0, 3.0);
    let hit = hit_test(Point::new(6.0, 1.0), &[&a, &b], &[], &cam(), None).unwrap();
    assert_eq!(hit.room_id, b.id);
}

// =============================================================
// Resize handles
// =============================================================

#[test]
fn selected_room_corner_hits_resize_handle() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let hit = hit_test(Point::new(0.0, 0.0), &[&a], &[], &cam(), Some(a.id)).unwrap();
    assert_eq!(hit.part, HitPart::ResizeHandle(ResizeAnchor::Nw));
}

#[test]
fn unselected_room_has_no_handles() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let hit = hit_test(Point::new(0.0, 0.0), &[&a], &[], &cam(), None).unwrap();
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn edge_midpoint_hits_edge_handle() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let hit = hit_test(Point::new(4.0, 1.5), &[&a], &[], &cam(), Some(a.id)).unwrap();
    assert_eq!(hit.part, HitPart::ResizeHandle(ResizeAnchor::E));
}

#[test]
fn handle_beats_neighboring_room_body() {
    // The Se handle of the selected room coincides with the neighbor's
    // body region; the handle must win.
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.0, 0.0, 4.0, 3.0);
    let hit = hit_test(Point::new(4.05, 1.5), &[&a, &b], &[], &cam(), Some(a.id)).unwrap();
    assert_eq!(hit.room_id, a.id);
    assert_eq!(hit.part, HitPart::ResizeHandle(ResizeAnchor::E));
}

#[test]
fn handle_slop_respects_zoom() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    // Zoomed out 4x the world-space slop quadruples.
    let camera = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 0.25 };
    let slop = camera.screen_dist_to_world(crate::consts::HANDLE_RADIUS_PX);
    let hit =
        hit_test(Point::new(slop * 0.9, 0.0), &[&a], &[], &camera, Some(a.id)).unwrap();
    assert_eq!(hit.part, HitPart::ResizeHandle(ResizeAnchor::Nw));
}

// =============================================================
// Doors
// =============================================================

#[test]
fn door_midpoint_hits_the_door() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let door = door_on(&a, DoorEdge::Top, 0.5);
    let hit = hit_test(Point::new(2.0, 0.0), &[&a], &[&door], &cam(), None).unwrap();
    assert_eq!(hit.room_id, a.id);
    assert_eq!(hit.part, HitPart::Door(door.id));
}

#[test]
fn door_beats_room_body() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let door = door_on(&a, DoorEdge::Left, 0.5);
    let hit = hit_test(Point::new(0.1, 1.5), &[&a], &[&door], &cam(), None).unwrap();
    assert_eq!(hit.part, HitPart::Door(door.id));
}

#[test]
fn door_anchor_point_positions() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    assert_eq!(door_anchor_point(&a, &door_on(&a, DoorEdge::Top, 0.25)), (1.0, 0.0));
    assert_eq!(door_anchor_point(&a, &door_on(&a, DoorEdge::Right, 0.5)), (4.0, 1.5));
    assert_eq!(door_anchor_point(&a, &door_on(&a, DoorEdge::Bottom, 1.0)), (4.0, 3.0));
}

#[test]
fn orphaned_door_is_skipped() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let ghost_room = room_at(10.0, 10.0, 2.0, 2.0);
    let door = door_on(&ghost_room, DoorEdge::Top, 0.5);
    // Door's room is not in the room set; the body hit still works.
    let hit = hit_test(Point::new(2.0, 1.5), &[&a], &[&door], &cam(), None).unwrap();
    assert_eq!(hit.part, HitPart::Body);
}
