#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::CELL_PX;

/// A point in either screen (pixel) or world (grid-unit) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom over the plan.
///
/// `pan_x` / `pan_y` are in CSS pixels. `zoom` is a scale factor
/// (1.0 = `CELL_PX` pixels per grid unit). Presentation only — collision
/// math never sees pixels.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Pixels per grid unit at the current zoom.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom * CELL_PX
    }

    /// Convert a screen-space point (CSS pixels) to world grid units.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.scale(),
            y: (screen.y - self.pan_y) / self.scale(),
        }
    }

    /// Convert a world-space point (grid units) to screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale() + self.pan_x,
            y: world.y * self.scale() + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space grid units.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale()
    }
}
