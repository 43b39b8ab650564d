//! Document model: rooms, doors, the layout aggregate, and the in-memory store.
//!
//! This module defines the core data types that describe a floor plan
//! (`Room`, `Door`, `ApartmentLayout`), a sparse-update type for incremental
//! edits (`PartialRoom`), and the runtime store that owns all live geometry
//! (`LayoutStore`).
//!
//! Data flows into this layer from persistence (JSON deserialization) and
//! from the interaction engine (mutations). The geometry components read
//! rooms via `sorted_rooms` so iteration order is deterministic.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;

/// Unique identifier for a room.
pub type RoomId = Uuid;

/// Unique identifier for a door.
pub type DoorId = Uuid;

/// Category of a room. Drives the default size and display color, never
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Bedroom,
    Bathroom,
    Kitchen,
    Living,
    Dining,
    Balcony,
    Storage,
    Office,
    Hallway,
    Entrance,
}

impl RoomKind {
    /// Default `(width, height)` in grid units when created from the toolbar.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Bedroom => (4.0, 3.5),
            Self::Bathroom => (2.5, 2.0),
            Self::Kitchen => (3.5, 3.0),
            Self::Living => (5.0, 4.0),
            Self::Dining => (4.0, 3.0),
            Self::Balcony => (3.0, 1.5),
            Self::Storage => (2.0, 1.5),
            Self::Office => (3.0, 3.0),
            Self::Hallway => (4.0, 1.5),
            Self::Entrance => (2.0, 2.0),
        }
    }

    /// Fill color as a CSS color string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Bedroom => "#A7C7E7",
            Self::Bathroom => "#B5EAD7",
            Self::Kitchen => "#FFDAB9",
            Self::Living => "#F7D9C4",
            Self::Dining => "#E2C2E9",
            Self::Balcony => "#C9E4C5",
            Self::Storage => "#D3D3D3",
            Self::Office => "#FDE2A7",
            Self::Hallway => "#EDEDED",
            Self::Entrance => "#F5C6AA",
        }
    }

    /// Human-readable label for toolbars and default names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::Living => "Living Room",
            Self::Dining => "Dining Room",
            Self::Balcony => "Balcony",
            Self::Storage => "Storage",
            Self::Office => "Office",
            Self::Hallway => "Hallway",
            Self::Entrance => "Entrance",
        }
    }
}

/// A placed rectangular room as stored in the layout and on the wire.
///
/// Coordinates are the top-left corner in grid units (one unit = one
/// meter); they are reals, not necessarily integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Stable unique identifier, assigned at creation, never reused.
    pub id: RoomId,
    /// Room category.
    #[serde(rename = "type")]
    pub kind: RoomKind,
    /// Free-text label, mutable.
    pub name: String,
    /// Left edge in grid units.
    pub x: f64,
    /// Top edge in grid units.
    pub y: f64,
    /// Extent along x, within `[MIN_ROOM_SIZE, MAX_ROOM_SIZE]`.
    pub width: f64,
    /// Extent along y, within `[MIN_ROOM_SIZE, MAX_ROOM_SIZE]`.
    pub height: f64,
}

impl Room {
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

    /// Floor area in square meters.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The room's footprint as a plain rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Which edge of a room a door is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl DoorEdge {
    /// Whether the edge runs along the x axis.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// An opening anchored to one edge of a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Unique identifier for this door.
    pub id: DoorId,
    /// The room that owns the wall this door sits on.
    pub room_id: RoomId,
    /// The neighbor on the far side of the wall, if any. `None` means an
    /// exterior wall.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_room_id: Option<RoomId>,
    /// Which edge of the owning room the door sits on.
    pub edge: DoorEdge,
    /// Fractional offset along that edge, in `[0, 1]`.
    pub position: f64,
    /// Door width in meters, independent of room size.
    pub width: f64,
}

/// Sparse update for a room. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialRoom {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New name, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The layout aggregate as persisted and exchanged with the host page.
///
/// `grid_size` is a presentation-only zoom scalar and carries no geometric
/// meaning for collision purposes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentLayout {
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<f64>,
}

/// In-memory store of rooms and doors.
pub struct LayoutStore {
    rooms: HashMap<RoomId, Room>,
    doors: HashMap<DoorId, Door>,
}

impl LayoutStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { rooms: HashMap::new(), doors: HashMap::new() }
    }

    /// Insert or replace a room.
    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    /// Insert or replace a door.
    pub fn insert_door(&mut self, door: Door) {
        self.doors.insert(door.id, door);
    }

    /// Return a reference to a room by id.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Return a mutable reference to a room by id.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Return a reference to a door by id.
    #[must_use]
    pub fn door(&self, id: &DoorId) -> Option<&Door> {
        self.doors.get(id)
    }

    /// Return a mutable reference to a door by id.
    pub fn door_mut(&mut self, id: &DoorId) -> Option<&mut Door> {
        self.doors.get_mut(id)
    }

    /// Remove a room, cascading to every door that references it as owner
    /// or neighbor. Returns the removed room and the ids of removed doors.
    pub fn remove_room(&mut self, id: &RoomId) -> (Option<Room>, Vec<DoorId>) {
        let room = self.rooms.remove(id);
        if room.is_none() {
            return (None, Vec::new());
        }
        let mut removed: Vec<DoorId> = self
            .doors
            .values()
            .filter(|d| d.room_id == *id || d.connected_room_id == Some(*id))
            .map(|d| d.id)
            .collect();
        removed.sort();
        for door_id in &removed {
            self.doors.remove(door_id);
        }
        (room, removed)
    }

    /// Remove a door by id, returning it if it was present.
    pub fn remove_door(&mut self, id: &DoorId) -> Option<Door> {
        self.doors.remove(id)
    }

    /// Apply a partial update to an existing room. Returns false if the
    /// room doesn't exist. No collision checking happens here; callers go
    /// through the engine's `try_*` API for validated mutations.
    pub fn apply_partial(&mut self, id: &RoomId, partial: &PartialRoom) -> bool {
        let Some(room) = self.rooms.get_mut(id) else {
            return false;
        };
        if let Some(x) = partial.x {
            room.x = x;
        }
        if let Some(y) = partial.y {
            room.y = y;
        }
        if let Some(w) = partial.width {
            room.width = w;
        }
        if let Some(h) = partial.height {
            room.height = h;
        }
        if let Some(ref name) = partial.name {
            room.name.clone_from(name);
        }
        true
    }

    /// Replace all contents with a full layout snapshot.
    pub fn load(&mut self, layout: ApartmentLayout) {
        self.rooms.clear();
        self.doors.clear();
        for room in layout.rooms {
            self.rooms.insert(room.id, room);
        }
        for door in layout.doors {
            self.doors.insert(door.id, door);
        }
    }

    /// Snapshot the current contents as a wire-shaped layout. Rooms and
    /// doors are sorted by id so snapshots are deterministic.
    #[must_use]
    pub fn snapshot(&self) -> ApartmentLayout {
        ApartmentLayout {
            rooms: self.sorted_rooms().into_iter().cloned().collect(),
            doors: self.sorted_doors().into_iter().cloned().collect(),
            grid_size: None,
        }
    }

    /// All rooms sorted by id for deterministic iteration.
    #[must_use]
    pub fn sorted_rooms(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.values().collect();
        rooms.sort_by_key(|r| r.id);
        rooms
    }

    /// All doors sorted by id for deterministic iteration.
    #[must_use]
    pub fn sorted_doors(&self) -> Vec<&Door> {
        let mut doors: Vec<&Door> = self.doors.values().collect();
        doors.sort_by_key(|d| d.id);
        doors
    }

    /// Number of rooms currently in the store.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of doors currently in the store.
    #[must_use]
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Returns `true` if the store holds no rooms and no doors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.doors.is_empty()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}
