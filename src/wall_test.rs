#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::model::{Room, RoomKind};

// =============================================================
// Helpers
// =============================================================

fn room_at(x: f64, y: f64, w: f64, h: f64) -> Room {
    Room {
        id: Uuid::new_v4(),
        kind: RoomKind::Living,
        name: "Living Room".to_owned(),
        x,
        y,
        width: w,
        height: h,
    }
}

// =============================================================
// edge_segment
// =============================================================

#[test]
fn edge_segments_run_in_natural_direction() {
    let r = room_at(1.0, 2.0, 4.0, 3.0);
    assert_eq!(edge_segment(&r, DoorEdge::Top), (1.0, 2.0, 5.0, 2.0));
    assert_eq!(edge_segment(&r, DoorEdge::Bottom), (1.0, 5.0, 5.0, 5.0));
    assert_eq!(edge_segment(&r, DoorEdge::Left), (1.0, 2.0, 1.0, 5.0));
    assert_eq!(edge_segment(&r, DoorEdge::Right), (5.0, 2.0, 5.0, 5.0));
}

// =============================================================
// shared_edges
// =============================================================

#[test]
fn full_shared_edge_reported_once_with_full_span() {
    // A's right edge coincides with B's left edge, overlapping in y 0..3.
    // Perspective follows slice order, so the record is A's Right edge.
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.0, 0.0, 4.0, 3.0);
    let edges = shared_edges(&[&a, &b]);

    assert_eq!(edges.len(), 1);
    let e = &edges[0];
    assert_eq!(e.room_id, a.id);
    assert_eq!(e.other_room_id, b.id);
    assert_eq!(e.edge, DoorEdge::Right);
    assert_eq!(e.start_pos, 0.0);
    assert_eq!(e.end_pos, 1.0);
    assert_eq!((e.x1, e.y1, e.x2, e.y2), (4.0, 0.0, 4.0, 3.0));
}

#[test]
fn partial_vertical_overlap_yields_partial_span() {
    let a = room_at(0.0, 0.0, 4.0, 4.0);
    let b = room_at(4.0, 2.0, 3.0, 4.0);
    let edges = shared_edges(&[&a, &b]);
    assert_eq!(edges.len(), 1);
    let e = &edges[0];
    assert_eq!(e.room_id, a.id);
    assert_eq!(e.edge, DoorEdge::Right);
    // Only the lower half of A's wall is shared.
    assert_eq!(e.start_pos, 0.5);
    assert_eq!(e.end_pos, 1.0);
    assert_eq!((e.y1, e.y2), (2.0, 4.0));
}

#[test]
fn perspective_follows_slice_order() {
    let left = room_at(0.0, 0.0, 4.0, 4.0);
    let right = room_at(4.0, 2.0, 3.0, 4.0);
    let edges = shared_edges(&[&right, &left]);
    assert_eq!(edges.len(), 1);
    let e = &edges[0];
    assert_eq!(e.room_id, right.id);
    assert_eq!(e.edge, DoorEdge::Left);
    assert_eq!(e.start_pos, 0.0);
    assert_eq!(e.end_pos, 0.5);
    assert_eq!((e.y1, e.y2), (2.0, 4.0));
}

#[test]
fn horizontal_adjacency_detected() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(1.0, 3.0, 4.0, 3.0);
    let edges = shared_edges(&[&a, &b]);
    assert_eq!(edges.len(), 1);
    let e = &edges[0];
    assert_eq!(e.edge, DoorEdge::Bottom);
    // Shared span covers x 1..4 of A's bottom wall.
    assert_eq!((e.x1, e.x2), (1.0, 4.0));
}

#[test]
fn gap_within_tolerance_still_counts() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.05, 0.0, 4.0, 3.0);
    assert_eq!(shared_edges(&[&a, &b]).len(), 1);
}

#[test]
fn gap_beyond_tolerance_is_not_shared() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.2, 0.0, 4.0, 3.0);
    assert!(shared_edges(&[&a, &b]).is_empty());
}

#[test]
fn corner_touching_rooms_share_nothing() {
    // Flush edges but zero-length perpendicular overlap.
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.0, 3.0, 4.0, 3.0);
    assert!(shared_edges(&[&a, &b]).is_empty());
}

#[test]
fn distant_rooms_share_nothing() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(10.0, 10.0, 4.0, 3.0);
    assert!(shared_edges(&[&a, &b]).is_empty());
}

#[test]
fn three_rooms_in_a_row_share_two_edges() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.0, 0.0, 4.0, 3.0);
    let c = room_at(8.0, 0.0, 4.0, 3.0);
    assert_eq!(shared_edges(&[&a, &b, &c]).len(), 2);
}

// =============================================================
// find_door_anchor
// =============================================================

#[test]
fn click_on_shared_wall_anchors_with_neighbor() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let b = room_at(4.0, 0.0, 4.0, 3.0);
    // Click on the shared wall at half height.
    let anchor = find_door_anchor(4.0, 1.5, &[&a, &b], 0.5).unwrap();
    assert_eq!(anchor.position, 0.5);
    // Whichever room owns the anchor, the other is across the wall.
    if anchor.room_id == a.id {
        assert_eq!(anchor.connected_room_id, Some(b.id));
    } else {
        assert_eq!(anchor.connected_room_id, Some(a.id));
    }
}

#[test]
fn click_on_exterior_wall_has_no_neighbor() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    let anchor = find_door_anchor(0.0, 1.5, &[&a], 0.5).unwrap();
    assert_eq!(anchor.room_id, a.id);
    assert_eq!(anchor.edge, DoorEdge::Left);
    assert!(anchor.connected_room_id.is_none());
}

#[test]
fn click_near_corner_is_clamped_away_from_it() {
    let a = room_at(0.0, 0.0, 4.0, 4.0);
    // Click close to the top of the left wall.
    let anchor = find_door_anchor(0.0, 0.1, &[&a], 0.5).unwrap();
    assert_eq!(anchor.position, DOOR_PLACEMENT_MIN);

    let anchor = find_door_anchor(0.0, 3.95, &[&a], 0.5).unwrap();
    assert_eq!(anchor.position, DOOR_PLACEMENT_MAX);
}

#[test]
fn click_too_far_from_any_wall_returns_none() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    assert!(find_door_anchor(10.0, 10.0, &[&a], 0.5).is_none());
}

#[test]
fn click_picks_the_nearest_of_two_walls() {
    let a = room_at(0.0, 0.0, 4.0, 3.0);
    // Inside the room, nearer the top wall.
    let anchor = find_door_anchor(2.0, 0.2, &[&a], 0.5).unwrap();
    assert_eq!(anchor.edge, DoorEdge::Top);
}

// =============================================================
// neighbor_across
// =============================================================

#[test]
fn neighbor_found_only_within_its_span() {
    // B covers only the lower half of A's right wall.
    let a = room_at(0.0, 0.0, 4.0, 4.0);
    let b = room_at(4.0, 2.0, 3.0, 2.0);
    let rooms = [&a, &b];

    assert_eq!(neighbor_across(&a, DoorEdge::Right, 0.75, &rooms), Some(b.id));
    assert_eq!(neighbor_across(&a, DoorEdge::Right, 0.2, &rooms), None);
}

#[test]
fn neighbor_across_other_edges() {
    let a = room_at(4.0, 4.0, 4.0, 3.0);
    let left = room_at(0.0, 4.0, 4.0, 3.0);
    let above = room_at(4.0, 1.0, 4.0, 3.0);
    let rooms = [&a, &left, &above];

    assert_eq!(neighbor_across(&a, DoorEdge::Left, 0.5, &rooms), Some(left.id));
    assert_eq!(neighbor_across(&a, DoorEdge::Top, 0.5, &rooms), Some(above.id));
    assert_eq!(neighbor_across(&a, DoorEdge::Bottom, 0.5, &rooms), None);
}
