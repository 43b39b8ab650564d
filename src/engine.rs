use std::collections::HashSet;

use uuid::Uuid;

use crate::camera::{Camera, Point};
use crate::collision::{all_overlapping_ids, would_collide};
use crate::consts::{
    DEFAULT_DOOR_WIDTH, DOOR_DRAG_MAX, DOOR_DRAG_MIN, DOOR_HIT_DIST_PX, GHOST_THROTTLE_MS,
    MAX_DOOR_WIDTH, MIN_DOOR_WIDTH, NUDGE_STEP,
};
use crate::geometry::{Rect, round_to_grid};
use crate::hit::{HitPart, ResizeAnchor, hit_test};
use crate::input::{Button, InputState, Key, Modifiers, Selection, Tool, UiState};
use crate::model::{
    ApartmentLayout, Door, DoorId, LayoutStore, PartialRoom, Room, RoomId, RoomKind,
};
use crate::resize::{resize_to, resize_with_delta, rotate};
use crate::snap::find_best_position;
use crate::throttle::Throttle;
use crate::wall::{SharedEdge, find_door_anchor, shared_edges};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to process. Committed
/// mutations always carry a trailing `LayoutChanged` so hosts can wire a
/// single `onLayoutChange`/auto-save callback.
#[derive(Debug, Clone)]
pub enum Action {
    RoomCreated(Room),
    RoomUpdated { id: RoomId, fields: PartialRoom },
    RoomDeleted { id: RoomId },
    DoorCreated(Door),
    DoorUpdated { id: DoorId, position: f64 },
    DoorDeleted { id: DoorId },
    /// The snap preview moved; hosts draw this rectangle as the ghost.
    GhostMoved(Rect),
    /// The snap preview is gone (drag follows the pointer exactly, or ended).
    GhostCleared,
    SelectionChanged(Option<Selection>),
    LayoutChanged,
    RenderNeeded,
}

/// The floor-plan engine: owns the layout, camera, UI state, and the
/// gesture state machine. All host input funnels through the `on_*`
/// handlers; programmatic edits go through the `try_*`/`add_*` API.
///
/// Every mutation either succeeds atomically or leaves the layout
/// untouched; geometric rejection is an expected outcome, not an error.
pub struct Engine {
    pub store: LayoutStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    /// Presentation-only zoom scalar carried through load/save untouched.
    pub grid_size: Option<f64>,
    ghost: Option<Rect>,
    ghost_throttle: Throttle,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            store: LayoutStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            grid_size: None,
            ghost: None,
            ghost_throttle: Throttle::new(GHOST_THROTTLE_MS),
        }
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Layout I/O ---

    /// Replace the whole layout from a persisted snapshot.
    pub fn load_layout(&mut self, layout: ApartmentLayout) {
        self.grid_size = layout.grid_size;
        self.store.load(layout);
        self.ui.selected = None;
        self.input = InputState::Idle;
        self.clear_ghost();
    }

    /// Snapshot the current layout in wire shape.
    #[must_use]
    pub fn layout(&self) -> ApartmentLayout {
        let mut layout = self.store.snapshot();
        layout.grid_size = self.grid_size;
        layout
    }

    // --- Queries ---

    /// The current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.ui.selected
    }

    /// The current snap-preview rectangle, if a drag is deviating from the
    /// pointer.
    #[must_use]
    pub fn ghost(&self) -> Option<Rect> {
        self.ghost
    }

    /// Ids of rooms currently overlapping another, for warning highlights.
    #[must_use]
    pub fn overlapping_ids(&self) -> HashSet<RoomId> {
        all_overlapping_ids(&self.store.sorted_rooms())
    }

    /// All wall segments shared by two rooms, for highlighting in door mode.
    #[must_use]
    pub fn shared_edges(&self) -> Vec<SharedEdge> {
        shared_edges(&self.store.sorted_rooms())
    }

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    // --- Mutation API ---

    /// Create a room of `kind` with its default size centered on the
    /// target point, snapped to a free spot. `None` when no free spot
    /// exists within the search radius.
    pub fn add_room(&mut self, kind: RoomKind, target_x: f64, target_y: f64) -> Option<Room> {
        let (width, height) = kind.default_size();
        let room = Room {
            id: Uuid::new_v4(),
            kind,
            name: kind.label().to_owned(),
            x: round_to_grid((target_x - width / 2.0).max(0.0)),
            y: round_to_grid((target_y - height / 2.0).max(0.0)),
            width,
            height,
        };
        let result = find_best_position(&room, room.x, room.y, &self.store.sorted_rooms());
        if result.has_collision {
            return None;
        }
        let mut room = room;
        room.x = result.x;
        room.y = result.y;
        self.store.insert_room(room.clone());
        Some(room)
    }

    /// Move a room to the best valid position near the target. Rejects
    /// (returns false) when the solver cannot find a collision-free spot.
    pub fn try_move(&mut self, id: &RoomId, target_x: f64, target_y: f64) -> bool {
        let Some(room) = self.store.room(id).cloned() else {
            return false;
        };
        let result = find_best_position(&room, target_x, target_y, &self.store.sorted_rooms());
        if result.has_collision {
            return false;
        }
        if let Some(room) = self.store.room_mut(id) {
            room.x = result.x;
            room.y = result.y;
        }
        true
    }

    /// Field-input resize: new extents only, growth distributed away from
    /// blocked edges. Atomic; false = rejected, nothing changed.
    pub fn try_resize(&mut self, id: &RoomId, new_width: f64, new_height: f64) -> bool {
        let Some(room) = self.store.room(id).cloned() else {
            return false;
        };
        match resize_to(&room, new_width, new_height, &self.store.sorted_rooms()) {
            Some(updated) => {
                self.store.insert_room(updated);
                true
            }
            None => false,
        }
    }

    /// Rotate a room 90° by swapping its extents. Atomic.
    pub fn try_rotate(&mut self, id: &RoomId) -> bool {
        let Some(room) = self.store.room(id).cloned() else {
            return false;
        };
        match rotate(&room, &self.store.sorted_rooms()) {
            Some(updated) => {
                self.store.insert_room(updated);
                true
            }
            None => false,
        }
    }

    /// Create a door anchored to the wall nearest the world point, if one
    /// is within reach. The neighbor across a shared span becomes the
    /// door's connected room.
    pub fn add_door_at(&mut self, world_pt: Point) -> Option<Door> {
        let max_dist = self.camera.screen_dist_to_world(DOOR_HIT_DIST_PX);
        let rooms = self.store.sorted_rooms();
        let anchor = find_door_anchor(world_pt.x, world_pt.y, &rooms, max_dist)?;
        let door = Door {
            id: Uuid::new_v4(),
            room_id: anchor.room_id,
            connected_room_id: anchor.connected_room_id,
            edge: anchor.edge,
            position: anchor.position,
            width: DEFAULT_DOOR_WIDTH.clamp(MIN_DOOR_WIDTH, MAX_DOOR_WIDTH),
        };
        self.store.insert_door(door.clone());
        Some(door)
    }

    /// Delete a room and every door referencing it, returning the actions
    /// describing what was removed.
    pub fn delete_room(&mut self, id: &RoomId) -> Vec<Action> {
        let (room, removed_doors) = self.store.remove_room(id);
        if room.is_none() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        for door_id in removed_doors {
            actions.push(Action::DoorDeleted { id: door_id });
        }
        actions.push(Action::RoomDeleted { id: *id });
        if self.ui.selected == Some(Selection::Room(*id)) {
            self.ui.selected = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::LayoutChanged);
        actions
    }

    /// Delete a door by id.
    pub fn delete_door(&mut self, id: &DoorId) -> bool {
        let removed = self.store.remove_door(id).is_some();
        if removed && self.ui.selected == Some(Selection::Door(*id)) {
            self.ui.selected = None;
        }
        removed
    }

    /// Duplicate a room, placing the copy near a fixed offset via the snap
    /// solver. `None` when no free spot exists.
    pub fn duplicate_room(&mut self, id: &RoomId) -> Option<Room> {
        let source = self.store.room(id).cloned()?;
        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        let result =
            find_best_position(&copy, source.x + 1.0, source.y + 1.0, &self.store.sorted_rooms());
        if result.has_collision {
            return None;
        }
        copy.x = result.x;
        copy.y = result.y;
        self.store.insert_room(copy.clone());
        Some(copy)
    }

    /// Nudge a room by a small delta, rejecting silently on collision.
    pub fn nudge(&mut self, id: &RoomId, dx: f64, dy: f64) -> bool {
        let Some(room) = self.store.room(id).cloned() else {
            return false;
        };
        let x = (room.x + dx).max(0.0);
        let y = (room.y + dy).max(0.0);
        if would_collide(&room, x, y, &self.store.sorted_rooms()) {
            return false;
        }
        if let Some(room) = self.store.room_mut(id) {
            room.x = x;
            room.y = y;
        }
        true
    }

    /// Rename a room. Always succeeds for existing rooms.
    pub fn set_room_name(&mut self, id: &RoomId, name: String) -> bool {
        self.store.apply_partial(id, &PartialRoom { name: Some(name), ..Default::default() })
    }

    // --- Pointer events ---

    pub fn on_pointer_down(
        &mut self,
        screen_pt: Point,
        button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);

        match self.ui.tool {
            Tool::PlaceRoom(kind) => self.place_room_at(kind, world),
            Tool::Door => self.place_door_at(world),
            Tool::Select => self.begin_select_gesture(screen_pt, world),
        }
    }

    pub fn on_pointer_move(
        &mut self,
        screen_pt: Point,
        _modifiers: Modifiers,
        now_ms: f64,
    ) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);

        match self.input.clone() {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera.pan_x += screen_pt.x - last_screen.x;
                self.camera.pan_y += screen_pt.y - last_screen.y;
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingRoom { id, start_world, orig_x, orig_y } => {
                self.drag_room_frame(&id, start_world, orig_x, orig_y, world, now_ms)
            }
            InputState::ResizingRoom { id, anchor, start_world, orig_x, orig_y, orig_w, orig_h } => {
                self.resize_room_frame(
                    &id,
                    anchor,
                    start_world,
                    (orig_x, orig_y, orig_w, orig_h),
                    world,
                )
            }
            InputState::DraggingDoor { id, orig_position, start_world } => {
                self.drag_door_frame(&id, orig_position, start_world, world)
            }
        }
    }

    pub fn on_pointer_up(
        &mut self,
        screen_pt: Point,
        button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        let state = std::mem::take(&mut self.input);

        match state {
            InputState::Idle | InputState::Panning { .. } => Vec::new(),
            InputState::DraggingRoom { id, start_world, orig_x, orig_y } => {
                self.finish_room_drag(&id, start_world, orig_x, orig_y, world)
            }
            InputState::ResizingRoom { id, .. } => {
                let mut actions = Vec::new();
                if let Some(room) = self.store.room(&id) {
                    actions.push(Action::RoomUpdated {
                        id,
                        fields: PartialRoom {
                            x: Some(room.x),
                            y: Some(room.y),
                            width: Some(room.width),
                            height: Some(room.height),
                            ..Default::default()
                        },
                    });
                    actions.push(Action::LayoutChanged);
                }
                actions
            }
            InputState::DraggingDoor { id, .. } => {
                let mut actions = Vec::new();
                if let Some(door) = self.store.door(&id) {
                    actions.push(Action::DoorUpdated { id, position: door.position });
                    actions.push(Action::LayoutChanged);
                }
                actions
            }
        }
    }

    // --- Keyboard ---

    /// Keyboard surface: Delete/Backspace removes the selection, `r`
    /// rotates, Ctrl/Cmd+`d` duplicates, arrow keys nudge. Hosts are
    /// expected not to forward keys while focus is inside a text field.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selection(),
            "r" | "R" => self.rotate_selection(),
            "d" | "D" if modifiers.command() => self.duplicate_selection(),
            "ArrowLeft" => self.nudge_selection(-NUDGE_STEP, 0.0),
            "ArrowRight" => self.nudge_selection(NUDGE_STEP, 0.0),
            "ArrowUp" => self.nudge_selection(0.0, -NUDGE_STEP),
            "ArrowDown" => self.nudge_selection(0.0, NUDGE_STEP),
            _ => Vec::new(),
        }
    }

    // --- Gesture internals ---

    fn place_room_at(&mut self, kind: RoomKind, world: Point) -> Vec<Action> {
        let Some(room) = self.add_room(kind, world.x, world.y) else {
            return Vec::new();
        };
        self.ui.selected = Some(Selection::Room(room.id));
        vec![
            Action::RoomCreated(room),
            Action::SelectionChanged(self.ui.selected),
            Action::LayoutChanged,
            Action::RenderNeeded,
        ]
    }

    fn place_door_at(&mut self, world: Point) -> Vec<Action> {
        let Some(door) = self.add_door_at(world) else {
            return Vec::new();
        };
        self.ui.selected = Some(Selection::Door(door.id));
        vec![
            Action::DoorCreated(door),
            Action::SelectionChanged(self.ui.selected),
            Action::LayoutChanged,
            Action::RenderNeeded,
        ]
    }

    fn begin_select_gesture(&mut self, screen_pt: Point, world: Point) -> Vec<Action> {
        let rooms = self.store.sorted_rooms();
        let doors = self.store.sorted_doors();
        let selected_room = match self.ui.selected {
            Some(Selection::Room(id)) => Some(id),
            _ => None,
        };
        let hit = hit_test(world, &rooms, &doors, &self.camera, selected_room);

        let mut actions = Vec::new();
        match hit {
            Some(h) => match h.part {
                HitPart::ResizeHandle(anchor) => {
                    let Some(room) = self.store.room(&h.room_id) else {
                        return actions;
                    };
                    self.input = InputState::ResizingRoom {
                        id: h.room_id,
                        anchor,
                        start_world: world,
                        orig_x: room.x,
                        orig_y: room.y,
                        orig_w: room.width,
                        orig_h: room.height,
                    };
                }
                HitPart::Door(door_id) => {
                    let Some(door) = self.store.door(&door_id) else {
                        return actions;
                    };
                    self.input = InputState::DraggingDoor {
                        id: door_id,
                        orig_position: door.position,
                        start_world: world,
                    };
                    self.select(Some(Selection::Door(door_id)), &mut actions);
                }
                HitPart::Body => {
                    let Some(room) = self.store.room(&h.room_id) else {
                        return actions;
                    };
                    self.input = InputState::DraggingRoom {
                        id: h.room_id,
                        start_world: world,
                        orig_x: room.x,
                        orig_y: room.y,
                    };
                    self.select(Some(Selection::Room(h.room_id)), &mut actions);
                }
            },
            None => {
                self.input = InputState::Panning { last_screen: screen_pt };
                self.select(None, &mut actions);
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// One drag-move frame: run the solver and publish a throttled ghost
    /// only when the snapped position deviates from the literal target.
    fn drag_room_frame(
        &mut self,
        id: &RoomId,
        start_world: Point,
        orig_x: f64,
        orig_y: f64,
        world: Point,
        now_ms: f64,
    ) -> Vec<Action> {
        let Some(room) = self.store.room(id).cloned() else {
            return Vec::new();
        };
        let target_x = round_to_grid(orig_x + world.x - start_world.x);
        let target_y = round_to_grid(orig_y + world.y - start_world.y);
        let result = find_best_position(&room, target_x, target_y, &self.store.sorted_rooms());

        let mut actions = Vec::new();
        if result.has_collision {
            // No valid spot this frame: the room stays at its last good
            // position and any stale ghost goes away.
            if self.ghost.take().is_some() {
                actions.push(Action::GhostCleared);
            }
            actions.push(Action::RenderNeeded);
            return actions;
        }

        if let Some(room) = self.store.room_mut(id) {
            room.x = result.x;
            room.y = result.y;
        }

        let snapped = (result.x - target_x).abs() > f64::EPSILON
            || (result.y - target_y).abs() > f64::EPSILON;
        if snapped {
            let rect = Rect::new(result.x, result.y, room.width, room.height);
            if self.ghost != Some(rect) && self.ghost_throttle.ready(now_ms) {
                self.ghost = Some(rect);
                actions.push(Action::GhostMoved(rect));
            }
        } else if self.ghost.take().is_some() {
            actions.push(Action::GhostCleared);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn finish_room_drag(
        &mut self,
        id: &RoomId,
        start_world: Point,
        orig_x: f64,
        orig_y: f64,
        world: Point,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.ghost.take().is_some() {
            actions.push(Action::GhostCleared);
        }
        self.ghost_throttle.reset();

        let Some(room) = self.store.room(id).cloned() else {
            return actions;
        };
        let target_x = round_to_grid(orig_x + world.x - start_world.x);
        let target_y = round_to_grid(orig_y + world.y - start_world.y);
        let result = find_best_position(&room, target_x, target_y, &self.store.sorted_rooms());

        // Commit the best-effort position even when still flagged as
        // colliding; hosts surface the overlap via `overlapping_ids`
        // rather than discarding the user's gesture.
        if let Some(room) = self.store.room_mut(id) {
            room.x = result.x;
            room.y = result.y;
        }
        actions.push(Action::RoomUpdated {
            id: *id,
            fields: PartialRoom { x: Some(result.x), y: Some(result.y), ..Default::default() },
        });
        actions.push(Action::LayoutChanged);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn resize_room_frame(
        &mut self,
        id: &RoomId,
        anchor: ResizeAnchor,
        start_world: Point,
        orig: (f64, f64, f64, f64),
        world: Point,
    ) -> Vec<Action> {
        let (orig_x, orig_y, orig_w, orig_h) = orig;
        let Some(current) = self.store.room(id).cloned() else {
            return Vec::new();
        };
        let dx = world.x - start_world.x;
        let dy = world.y - start_world.y;

        // Per-anchor geometry: west/north handles move the origin with the
        // pointer, east/south handles only stretch the extent.
        let (new_w, pos_dx) = match anchor {
            ResizeAnchor::E | ResizeAnchor::Ne | ResizeAnchor::Se => (orig_w + dx, 0.0),
            ResizeAnchor::W | ResizeAnchor::Nw | ResizeAnchor::Sw => (orig_w - dx, dx),
            ResizeAnchor::N | ResizeAnchor::S => (orig_w, 0.0),
        };
        let (new_h, pos_dy) = match anchor {
            ResizeAnchor::S | ResizeAnchor::Se | ResizeAnchor::Sw => (orig_h + dy, 0.0),
            ResizeAnchor::N | ResizeAnchor::Ne | ResizeAnchor::Nw => (orig_h - dy, dy),
            ResizeAnchor::E | ResizeAnchor::W => (orig_h, 0.0),
        };

        let mut base = current;
        base.x = orig_x;
        base.y = orig_y;
        base.width = orig_w;
        base.height = orig_h;

        let resized = resize_with_delta(&base, new_w, new_h, pos_dx, pos_dy, &self.store.sorted_rooms());
        match resized {
            Some(updated) => {
                self.store.insert_room(updated);
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// A door drag is a 1-D variant: the pointer delta is projected onto
    /// the door's edge axis and clamped away from the corners.
    fn drag_door_frame(
        &mut self,
        id: &DoorId,
        orig_position: f64,
        start_world: Point,
        world: Point,
    ) -> Vec<Action> {
        let Some(door) = self.store.door(id).cloned() else {
            return Vec::new();
        };
        let Some(room) = self.store.room(&door.room_id) else {
            return Vec::new();
        };
        let frac_delta = if door.edge.is_horizontal() {
            (world.x - start_world.x) / room.width
        } else {
            (world.y - start_world.y) / room.height
        };
        let position = (orig_position + frac_delta).clamp(DOOR_DRAG_MIN, DOOR_DRAG_MAX);
        if let Some(door) = self.store.door_mut(id) {
            door.position = position;
        }
        vec![Action::RenderNeeded]
    }

    // --- Keyboard internals ---

    fn delete_selection(&mut self) -> Vec<Action> {
        match self.ui.selected {
            Some(Selection::Room(id)) => {
                let mut actions = self.delete_room(&id);
                if !actions.is_empty() {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
            Some(Selection::Door(id)) => {
                if self.delete_door(&id) {
                    vec![
                        Action::DoorDeleted { id },
                        Action::SelectionChanged(None),
                        Action::LayoutChanged,
                        Action::RenderNeeded,
                    ]
                } else {
                    Vec::new()
                }
            }
            None => Vec::new(),
        }
    }

    fn rotate_selection(&mut self) -> Vec<Action> {
        let Some(Selection::Room(id)) = self.ui.selected else {
            return Vec::new();
        };
        if !self.try_rotate(&id) {
            return Vec::new();
        }
        self.room_geometry_actions(&id)
    }

    fn duplicate_selection(&mut self) -> Vec<Action> {
        let Some(Selection::Room(id)) = self.ui.selected else {
            return Vec::new();
        };
        let Some(copy) = self.duplicate_room(&id) else {
            return Vec::new();
        };
        self.ui.selected = Some(Selection::Room(copy.id));
        vec![
            Action::RoomCreated(copy),
            Action::SelectionChanged(self.ui.selected),
            Action::LayoutChanged,
            Action::RenderNeeded,
        ]
    }

    fn nudge_selection(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        let Some(Selection::Room(id)) = self.ui.selected else {
            return Vec::new();
        };
        if !self.nudge(&id, dx, dy) {
            return Vec::new();
        }
        self.room_geometry_actions(&id)
    }

    fn room_geometry_actions(&self, id: &RoomId) -> Vec<Action> {
        let Some(room) = self.store.room(id) else {
            return Vec::new();
        };
        vec![
            Action::RoomUpdated {
                id: *id,
                fields: PartialRoom {
                    x: Some(room.x),
                    y: Some(room.y),
                    width: Some(room.width),
                    height: Some(room.height),
                    ..Default::default()
                },
            },
            Action::LayoutChanged,
            Action::RenderNeeded,
        ]
    }

    fn select(&mut self, selection: Option<Selection>, actions: &mut Vec<Action>) {
        if self.ui.selected != selection {
            self.ui.selected = selection;
            actions.push(Action::SelectionChanged(selection));
        }
    }

    fn clear_ghost(&mut self) {
        self.ghost = None;
        self.ghost_throttle.reset();
    }
}
