//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a
//! pointer event. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up, carrying all context needed to compute
//! incremental deltas and commit final geometry on release. Representing
//! the gesture as a tagged state (rather than callback chains) is what
//! makes the cancellation rules enforceable: superseding a gesture always
//! replaces the whole state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::hit::ResizeAnchor;
use crate::model::{DoorId, RoomId, RoomKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Place a new room of the given kind on the next canvas click.
    PlaceRoom(RoomKind),
    /// Door placement: clicks near a wall create a door there.
    Door,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on Linux/Windows or Cmd on macOS — the shortcut chord.
    #[must_use]
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, holding the name as reported by the host
/// (e.g. `"Delete"`, `"ArrowLeft"`, `"r"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// What the user currently has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Room(RoomId),
    Door(DoorId),
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The current selection, if any.
    pub selected: Option<Selection>,
}

/// Internal state for the input state machine.
///
/// Each active variant carries the gesture context needed to compute
/// deltas and commit final geometry on pointer-up.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is panning the plan by dragging empty canvas.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is moving a room across the plan.
    DraggingRoom {
        /// Id of the room being dragged.
        id: RoomId,
        /// World-space pointer position at drag start.
        start_world: Point,
        /// Room x at drag start; deltas and snaps are computed from here.
        orig_x: f64,
        /// Room y at drag start.
        orig_y: f64,
    },
    /// The user is resizing a room by dragging one of its eight handles.
    ResizingRoom {
        /// Id of the room being resized.
        id: RoomId,
        /// Which corner/edge handle is being dragged.
        anchor: ResizeAnchor,
        /// World-space pointer position at resize start.
        start_world: Point,
        /// Room geometry at resize start.
        orig_x: f64,
        orig_y: f64,
        orig_w: f64,
        orig_h: f64,
    },
    /// The user is sliding a door along its wall (1-D drag).
    DraggingDoor {
        /// Id of the door being dragged.
        id: DoorId,
        /// Fractional position at drag start.
        orig_position: f64,
        /// World-space pointer position at drag start.
        start_world: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
