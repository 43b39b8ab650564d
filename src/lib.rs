//! Spatial layout engine for an interactive apartment floor-plan editor.
//!
//! Rooms are axis-aligned rectangles placed on a grid of one-meter units;
//! doors are openings anchored to walls shared by adjacent rooms. The
//! engine owns collision-free placement, snap-based conflict resolution
//! when a drag lands in occupied space, adjacency-aware resize, and
//! shared-edge detection for door anchoring. The host page is responsible
//! only for wiring input events to the engine and reacting to the
//! resulting [`engine::Action`]s (rendering, persistence callbacks).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`]: layout ownership, gestures, mutation API |
//! | [`model`] | Rooms, doors, the layout aggregate, and the in-memory store |
//! | [`geometry`] | Rectangle overlap/area/distance primitives and grid rounding |
//! | [`collision`] | Hypothetical-placement tests and pairwise overlap scans |
//! | [`wall`] | Shared-edge detection and click-to-door-anchor resolution |
//! | [`snap`] | Placement solver for colliding drag targets |
//! | [`resize`] | Handle and field resize with blocked-edge growth distribution |
//! | [`camera`] | Pan/zoom camera and screen↔world conversions |
//! | [`hit`] | Hit-testing rooms, doors, and resize handles |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`throttle`] | Throttle/debounce helpers with explicit clocks |
//! | [`template`] | Template persistence with id regeneration |
//! | [`consts`] | Shared numeric constants (epsilons, size limits, timing) |

pub mod camera;
pub mod collision;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod model;
pub mod resize;
pub mod snap;
pub mod template;
pub mod throttle;
pub mod wall;
