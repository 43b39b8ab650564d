//! Template persistence: named, reusable layout snapshots.
//!
//! Templates are serialized as one JSON array under a fixed storage key.
//! The storage itself lives behind `StorageBackend` so hosts can plug in
//! browser local storage, a file, or anything else with string get/set
//! semantics. Loading is fail-closed: a corrupted entry yields an empty
//! template list and a log line, never a crash.
//!
//! Applying a template regenerates every room and door id through a
//! single id map so the same template can be applied twice without
//! identifier collisions, with door references staying consistent.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::model::{ApartmentLayout, RoomId};

/// Fixed key under which all templates are stored.
pub const STORAGE_KEY: &str = "floorplan.templates";

/// Failure writing to the storage backend. Reads never error; malformed
/// data degrades to an empty list instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A string key-value store, the whole persistence boundary.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A named, reusable snapshot of a layout. Counts and area are derived at
/// save time for list views; the layout omits the presentation-only grid
/// scalar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    /// Host-supplied creation timestamp; the engine has no clock.
    pub created_at: String,
    pub room_count: usize,
    pub door_count: usize,
    pub total_area: f64,
    pub layout: ApartmentLayout,
}

/// Load/save templates through a pluggable backend.
pub struct TemplateStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> TemplateStore<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All saved templates. Fail closed: missing or malformed storage
    /// yields an empty list.
    #[must_use]
    pub fn list(&self) -> Vec<Template> {
        let Some(raw) = self.backend.read(STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(templates) => templates,
            Err(err) => {
                warn!(error = %err, "malformed template storage, ignoring");
                Vec::new()
            }
        }
    }

    /// Save a layout snapshot as a new template and return it.
    pub fn save(
        &mut self,
        name: &str,
        created_at: &str,
        layout: &ApartmentLayout,
    ) -> Result<Template, StorageError> {
        let mut stored = layout.clone();
        stored.grid_size = None;
        let template = Template {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            created_at: created_at.to_owned(),
            room_count: stored.rooms.len(),
            door_count: stored.doors.len(),
            total_area: stored.rooms.iter().map(crate::model::Room::area).sum(),
            layout: stored,
        };
        let mut templates = self.list();
        templates.push(template.clone());
        self.persist(&templates)?;
        Ok(template)
    }

    /// Delete a template by id. Returns whether it existed.
    pub fn delete(&mut self, id: &Uuid) -> Result<bool, StorageError> {
        let mut templates = self.list();
        let before = templates.len();
        templates.retain(|t| t.id != *id);
        if templates.len() == before {
            return Ok(false);
        }
        self.persist(&templates)?;
        Ok(true)
    }

    /// Duplicate a template under a new name, with regenerated layout ids.
    pub fn duplicate(
        &mut self,
        id: &Uuid,
        new_name: &str,
        created_at: &str,
    ) -> Result<Option<Template>, StorageError> {
        let Some(source) = self.list().into_iter().find(|t| t.id == *id) else {
            return Ok(None);
        };
        let copy = Template {
            id: Uuid::new_v4(),
            name: new_name.to_owned(),
            created_at: created_at.to_owned(),
            layout: regenerate_ids(&source.layout),
            ..source
        };
        let mut templates = self.list();
        templates.push(copy.clone());
        self.persist(&templates)?;
        Ok(Some(copy))
    }

    /// Resolve a template to a layout ready to apply: every id freshly
    /// regenerated so repeated applications never collide.
    #[must_use]
    pub fn apply(&self, id: &Uuid) -> Option<ApartmentLayout> {
        self.list().into_iter().find(|t| t.id == *id).map(|t| regenerate_ids(&t.layout))
    }

    fn persist(&mut self, templates: &[Template]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(templates)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        self.backend.write(STORAGE_KEY, &raw)
    }
}

/// Re-key every room and door through one id map so door references stay
/// mutually consistent. Doors owned by a room missing from the layout are
/// dropped; a dangling connected-room reference degrades to an exterior
/// door.
#[must_use]
pub fn regenerate_ids(layout: &ApartmentLayout) -> ApartmentLayout {
    let id_map: HashMap<RoomId, RoomId> =
        layout.rooms.iter().map(|r| (r.id, Uuid::new_v4())).collect();

    let rooms = layout
        .rooms
        .iter()
        .map(|r| {
            let mut room = r.clone();
            room.id = id_map[&r.id];
            room
        })
        .collect();

    let doors = layout
        .doors
        .iter()
        .filter_map(|d| {
            let room_id = *id_map.get(&d.room_id)?;
            let mut door = d.clone();
            door.id = Uuid::new_v4();
            door.room_id = room_id;
            door.connected_room_id =
                d.connected_room_id.and_then(|c| id_map.get(&c).copied());
            Some(door)
        })
        .collect();

    ApartmentLayout { rooms, doors, grid_size: layout.grid_size }
}
