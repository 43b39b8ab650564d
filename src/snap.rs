//! Placement/snap solver.
//!
//! When a drag target collides, the solver generates candidate positions
//! from every neighbor's edges and corners, filters them to collision-free
//! spots within the search radius, and ranks them by
//! `distance - score * SNAP_SCORE_WEIGHT` so cleanly aligned positions win
//! modest distance ties. A fixed-step grid scan is the fallback when no
//! structured candidate survives.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use tracing::debug;

use crate::collision::would_collide;
use crate::consts::{SNAP_GRID_STEP, SNAP_SCORE_WEIGHT, SNAP_SEARCH_RADIUS};
use crate::geometry::distance;
use crate::model::Room;

/// Result of a placement query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    /// True when no collision-free position exists within the search
    /// radius; `x`/`y` then carry the literal target. Callers decide
    /// whether to commit the flagged position (drag end does) or reject
    /// the move (`Engine::try_move` does).
    pub has_collision: bool,
}

/// Score tiers for structured candidates. Flush edge alignment beats
/// corner alignment, which beats single-axis alignment.
const EDGE_SCORE: f64 = 2.0;
const CORNER_SCORE: f64 = 1.5;
const AXIS_SCORE: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    x: f64,
    y: f64,
    score: f64,
}

/// Find the best valid position for `moving` near `(target_x, target_y)`.
///
/// Fast path: the literal target is returned unchanged when it is already
/// collision-free — most drags need no snapping.
#[must_use]
pub fn find_best_position(
    moving: &Room,
    target_x: f64,
    target_y: f64,
    rooms: &[&Room],
) -> SnapResult {
    if !would_collide(moving, target_x, target_y, rooms) {
        return SnapResult { x: target_x, y: target_y, has_collision: false };
    }

    let mut best: Option<(f64, Candidate)> = None;
    for cand in snap_candidates(moving, target_x, target_y, rooms) {
        let d = distance(target_x, target_y, cand.x, cand.y);
        if d > SNAP_SEARCH_RADIUS || would_collide(moving, cand.x, cand.y, rooms) {
            continue;
        }
        let rank = d - cand.score * SNAP_SCORE_WEIGHT;
        if best.is_none_or(|(r, _)| rank < r) {
            best = Some((rank, cand));
        }
    }

    if let Some((_, cand)) = best {
        return SnapResult { x: cand.x, y: cand.y, has_collision: false };
    }

    if let Some((x, y)) = grid_scan(moving, target_x, target_y, rooms) {
        debug!(x, y, "snap solver fell back to grid scan");
        return SnapResult { x, y, has_collision: false };
    }

    debug!(target_x, target_y, "no collision-free position within search radius");
    SnapResult { x: target_x, y: target_y, has_collision: true }
}

/// Candidate positions derived from every other room's geometry.
fn snap_candidates(
    moving: &Room,
    target_x: f64,
    target_y: f64,
    rooms: &[&Room],
) -> Vec<Candidate> {
    let w = moving.width;
    let h = moving.height;
    let mut out = Vec::new();

    for n in rooms.iter().filter(|r| r.id != moving.id) {
        // Flush against one edge, aligned to the neighbor's near corner.
        out.push(Candidate { x: n.x - w, y: n.y, score: EDGE_SCORE });
        out.push(Candidate { x: n.right(), y: n.y, score: EDGE_SCORE });
        out.push(Candidate { x: n.x, y: n.y - h, score: EDGE_SCORE });
        out.push(Candidate { x: n.x, y: n.bottom(), score: EDGE_SCORE });

        // Corner-to-corner for L-shaped adjacency.
        out.push(Candidate { x: n.x - w, y: n.y - h, score: CORNER_SCORE });
        out.push(Candidate { x: n.right(), y: n.y - h, score: CORNER_SCORE });
        out.push(Candidate { x: n.x - w, y: n.bottom(), score: CORNER_SCORE });
        out.push(Candidate { x: n.right(), y: n.bottom(), score: CORNER_SCORE });

        // Align one axis to the neighbor, keep the target's other axis.
        out.push(Candidate { x: n.x - w, y: target_y, score: AXIS_SCORE });
        out.push(Candidate { x: n.right(), y: target_y, score: AXIS_SCORE });
        out.push(Candidate { x: target_x, y: n.y - h, score: AXIS_SCORE });
        out.push(Candidate { x: target_x, y: n.bottom(), score: AXIS_SCORE });
    }

    out
}

/// Brute-force fallback: scan a fixed-step grid within the search radius
/// around the target and keep the closest collision-free cell.
fn grid_scan(moving: &Room, target_x: f64, target_y: f64, rooms: &[&Room]) -> Option<(f64, f64)> {
    let steps = (SNAP_SEARCH_RADIUS / SNAP_GRID_STEP) as i32;
    let mut best: Option<(f64, f64, f64)> = None;

    for iy in -steps..=steps {
        for ix in -steps..=steps {
            let x = target_x + f64::from(ix) * SNAP_GRID_STEP;
            let y = target_y + f64::from(iy) * SNAP_GRID_STEP;
            let d = distance(target_x, target_y, x, y);
            if d > SNAP_SEARCH_RADIUS {
                continue;
            }
            if best.is_some_and(|(bd, ..)| d >= bd) {
                continue;
            }
            if !would_collide(moving, x, y, rooms) {
                best = Some((d, x, y));
            }
        }
    }

    best.map(|(_, x, y)| (x, y))
}
