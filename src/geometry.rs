//! Pure geometry primitives: axis-aligned rectangles and grid rounding.
//!
//! All functions are stateless and treat exact edge-touching as
//! non-overlapping; only interior overlap beyond [`COLLISION_EPSILON`]
//! counts.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::COLLISION_EPSILON;

/// An axis-aligned rectangle in grid units, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point as `(x, y)`.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the interiors of the two rectangles overlap by more than
    /// the collision epsilon on both axes. Edge-to-edge touching is not
    /// an overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlap_span(self.x, self.right(), other.x, other.right()) > COLLISION_EPSILON
            && overlap_span(self.y, self.bottom(), other.y, other.bottom()) > COLLISION_EPSILON
    }

    /// Area of the overlapping region, zero when disjoint or touching.
    #[must_use]
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = overlap_span(self.x, self.right(), other.x, other.right());
        let h = overlap_span(self.y, self.bottom(), other.y, other.bottom());
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }

    /// Whether `(px, py)` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// Length of the overlap of two 1-D spans; negative when they are apart.
#[must_use]
pub fn overlap_span(a_lo: f64, a_hi: f64, b_lo: f64, b_hi: f64) -> f64 {
    a_hi.min(b_hi) - a_lo.max(b_lo)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax - bx).hypot(ay - by)
}

/// Round a coordinate to grid precision (tenths of a unit). Keeps drag
/// arithmetic from accumulating sub-millimeter drift.
#[must_use]
pub fn round_to_grid(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
